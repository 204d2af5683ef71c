//! Pre-defined page sizes for the supported paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! except [`LEDGER`] which is landscape by definition. Use [`resolve`] to turn a named
//! [`PaperSize`] and an [`Orientation`] into physical dimensions.
//!
//! # Example
//!
//! ```
//! use pdf_creator::pagesize::{resolve, Orientation, PaperSize, A4};
//!
//! let (width, height) = resolve(PaperSize::A4, Orientation::Landscape);
//! assert_eq!((width, height), (A4.1, A4.0));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const LEDGER: PageSize = (Pt(17.0 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageSize = (Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageSize = (Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageSize = (Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

// iso b5
pub const B5: PageSize = (Pt(176.0 * 72.0 / 25.4), Pt(250.0 * 72.0 / 25.4));

/// The named paper formats a document can be set up with.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    B5,
    Ledger,
    Legal,
    Letter,
}

impl PaperSize {
    /// The format's size as printed, before any orientation is applied
    pub fn size(self) -> PageSize {
        match self {
            PaperSize::A0 => A0,
            PaperSize::A1 => A1,
            PaperSize::A2 => A2,
            PaperSize::A3 => A3,
            PaperSize::A4 => A4,
            PaperSize::A5 => A5,
            PaperSize::A6 => A6,
            PaperSize::B5 => B5,
            PaperSize::Ledger => LEDGER,
            PaperSize::Legal => LEGAL,
            PaperSize::Letter => LETTER,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Resolve a paper format and orientation to (width, height). Landscape swaps the
/// format's width and height; portrait uses them as listed.
pub fn resolve(paper: PaperSize, orientation: Orientation) -> PageSize {
    let (width, height) = paper.size();
    match orientation {
        Orientation::Portrait => (width, height),
        Orientation::Landscape => (height, width),
    }
}
