//! Builders that turn content elements into the blocks and tables of a section.
//!
//! Each builder handles one kind of content and knows nothing about sections or
//! the order of elements; that is the job of [`assemble`](crate::assemble).
//!
//! - [`tokenize`] breaks text into whitespace-exact tokens
//! - [`place_image`] sizes body images against the content width
//! - [`build_header_footer`] lays out the four header/footer variants
//! - [`build_table`] expands a [`TableSchema`](crate::TableSchema) into rows and cells

mod header_footer;
mod image;
mod margins;
mod table;
mod text;

pub use header_footer::*;
pub use self::image::*;
pub use margins::*;
pub use table::*;
pub use text::*;
