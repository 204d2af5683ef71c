//! Turning a laid-out [`Document`] into the bytes of the output file.
//!
//! [`Renderer`] is the seam between layout and typesetting. [`PdfRenderer`] is the
//! bundled implementation; it paginates the sections itself and writes a PDF that
//! uses the standard fonts, so nothing has to be embedded besides images.

mod fonts;
mod paginate;
mod pdf;

pub use pdf::PdfRenderer;

use crate::document::Document;
use crate::error::Result;

/// How text is encoded in the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the full WinAnsi (Latin-1) range. When unset only ASCII is shown and
    /// every other character becomes `?`.
    pub wide_characters: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            wide_characters: true,
        }
    }
}

pub trait Renderer {
    /// Typeset `document` and return the finished file. The page count is only
    /// known once this runs, so page-number fields are filled in here.
    fn render(&self, document: Document, options: &RenderOptions) -> Result<Vec<u8>>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, document: Document, options: &RenderOptions) -> Result<Vec<u8>> {
        (**self).render(document, options)
    }
}
