//! The content dispatcher: one pass over the content elements, in order, building
//! up the [`Document`].
//!
//! The pass is a fold. The document under construction is threaded from one element
//! to the next and the section content lands in is always the document's last one.
//! The first failing element aborts the whole pass and the partial document is
//! dropped.

use crate::document::Document;
use crate::element::{ContentElement, HeaderFooter};
use crate::error::Result;
use crate::info::Info;
use crate::layout::{build_header_footer, build_table, load_schema, place_image, text_paragraph};
use crate::output::FileSystem;
use crate::page::{Block, PageGeometry, TablePlacement};
use crate::style::Style;

/// Lay out `content` into a document whose sections all share `geometry`.
pub fn assemble<F: FileSystem + ?Sized>(
    fs: &F,
    info: Info,
    geometry: PageGeometry,
    content: &[ContentElement],
) -> Result<Document> {
    let doc = content
        .iter()
        .enumerate()
        .try_fold(Document::new(info, geometry), |doc, (index, element)| {
            dispatch(fs, doc, index, element)
        })?;

    log::info!(
        "laid out {} elements into {} sections",
        content.len(),
        doc.sections.len()
    );
    Ok(doc)
}

fn dispatch<F: FileSystem + ?Sized>(
    fs: &F,
    mut doc: Document,
    index: usize,
    element: &ContentElement,
) -> Result<Document> {
    log::debug!("element {index}: {:?}", element.kind());
    let style_name = format!("style_{index}");
    let content_width = doc.current_section().geometry.content_width();

    match element {
        ContentElement::Paragraph { text, format } => {
            let style = doc.add_style(Style::resolve(style_name, format));
            if let Some(paragraph) = text_paragraph(style, text) {
                doc.current_section_mut()
                    .blocks
                    .push(Block::Paragraph(paragraph));
            }
        }
        ContentElement::Image { path, alignment } => {
            doc.add_style(Style::normal(style_name));
            let image = place_image(fs, path, content_width, *alignment)?;
            doc.current_section_mut().blocks.push(Block::Image(image));
        }
        ContentElement::PageBreak => {
            doc.add_style(Style::normal(style_name));
            doc.start_section();
        }
        ContentElement::Header(header) => {
            header_footer(fs, &mut doc, style_name, header, TablePlacement::Header)?;
        }
        ContentElement::Footer(footer) => {
            header_footer(fs, &mut doc, style_name, footer, TablePlacement::Footer)?;
        }
        ContentElement::Table(source) => {
            doc.add_style(Style::normal(style_name));
            let schema = load_schema(fs, source)?;
            let cells = doc.add_style(Style::resolve(
                format!("table_{index}"),
                &schema.style.format,
            ));
            let table = build_table(fs, &schema, cells, content_width)?;
            doc.current_section_mut()
                .attach_table(schema.placement, table);
        }
    }

    Ok(doc)
}

fn header_footer<F: FileSystem + ?Sized>(
    fs: &F,
    doc: &mut Document,
    style_name: String,
    element: &HeaderFooter,
    placement: TablePlacement,
) -> Result<()> {
    let style = doc.add_style(Style::resolve(style_name, &element.format));
    let content_width = doc.current_section().geometry.content_width();
    if let Some(table) = build_header_footer(fs, element, style, placement, content_width)? {
        doc.current_section_mut().attach_table(placement, table);
    }
    Ok(())
}
