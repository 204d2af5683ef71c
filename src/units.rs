//! Physical length units.
//!
//! Everything in the layout model is measured in [`Pt`] (1/72 inch). The other
//! units exist so that callers can speak in the units their settings come in
//! (margins and column widths in centimetres, logo heights in centimetres,
//! image widths in inches) and convert with `.into()`.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// Points, 1/72 of an inch.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
#[display("{_0}in")]
pub struct In(pub f32);

/// Millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// Centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
#[display("{_0}cm")]
pub struct Cm(pub f32);

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

impl From<In> for Pt {
    fn from(v: In) -> Self {
        Pt(v.0 * POINTS_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(v: Mm) -> Self {
        Pt(v.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<Cm> for Pt {
    fn from(v: Cm) -> Self {
        Pt(v.0 * 10.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl From<Pt> for In {
    fn from(v: Pt) -> Self {
        In(v.0 / POINTS_PER_INCH)
    }
}

impl From<Pt> for Cm {
    fn from(v: Pt) -> Self {
        Cm(v.0 * MM_PER_INCH / POINTS_PER_INCH / 10.0)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Ratio of two lengths
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centimetres_convert_through_inches() {
        let pt: Pt = Cm(2.54).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
        let back: Cm = pt.into();
        assert!((back.0 - 2.54).abs() < 1e-4);
    }

    #[test]
    fn ratio_of_lengths_is_unitless() {
        assert_eq!(Pt(30.0) / Pt(60.0), 0.5);
        assert_eq!(Pt(30.0) * 2.0, Pt(60.0));
    }
}
