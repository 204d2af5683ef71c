use crate::units::Pt;

/// An axis-aligned box in page space, lower-left corner first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// The box `width` wide and `height` tall hanging down from its top-left corner
    pub fn below(left: Pt, top: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: left,
            y1: top - height,
            x2: left + width,
            y2: top,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect::new(r.x1.0, r.y1.0, r.x2.0, r.y2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_hangs_from_the_top_edge() {
        let r = Rect::below(Pt(10.0), Pt(100.0), Pt(30.0), Pt(20.0));
        assert_eq!((r.y1, r.y2), (Pt(80.0), Pt(100.0)));
        assert_eq!((r.width(), r.height()), (Pt(30.0), Pt(20.0)));
    }
}
