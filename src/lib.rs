//! Assemble paragraphs, images, page breaks, headers, footers and data tables into
//! a paginated PDF.
//!
//! ```no_run
//! use pdf_creator::{create_document, ContentElement, DocumentSettings, FileProperties, Options, TextFormat};
//!
//! let content = vec![
//!     ContentElement::paragraph("Hello\n\tWorld", TextFormat::default()),
//!     ContentElement::PageBreak,
//!     ContentElement::paragraph("Second page", TextFormat::default()),
//! ];
//! let output = create_document(
//!     &FileProperties::default(),
//!     &DocumentSettings::default(),
//!     &content,
//!     &Options::default(),
//! )?;
//! assert!(output.success);
//! # Ok::<(), pdf_creator::PDFError>(())
//! ```

mod assemble;
pub use assemble::*;

mod creator;
pub use creator::*;

mod document;
pub use document::*;

mod element;
pub use element::*;

mod identity;
pub use identity::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Builders turning content elements into blocks and tables
pub mod layout;

mod output;
pub use output::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub mod render;
pub use render::{PdfRenderer, RenderOptions, Renderer};

mod schema;
pub use schema::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod vocab;
pub use vocab::Vocabulary;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
