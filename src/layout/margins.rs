use crate::units::{Cm, Pt};

/// Page margins. Every section of a document carries the same margins; they
/// determine the content box (and therefore the width available to images and
/// tables) as well as where the renderer places headers and footers.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins from centimetre values, in the left / top / right / bottom
    /// order that document settings list them in
    pub fn from_cm(left: f32, top: f32, right: f32, bottom: f32) -> Margins {
        Margins {
            top: Cm(top).into(),
            right: Cm(right).into(),
            bottom: Cm(bottom).into(),
            left: Cm(left).into(),
        }
    }

    /// Combined left and right margin
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Combined top and bottom margin
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}
