use crate::element::{HeaderFooter, HeaderFooterStyle};
use crate::error::{PDFError, Result};
use crate::layout::image::place_image_at_height;
use crate::layout::text::{page_number_tokens, text_paragraph};
use crate::output::FileSystem;
use crate::page::{Border, Cell, Column, Edges, Paragraph, Row, Table, TablePlacement};
use crate::style::{ParagraphAlignment, Style};
use crate::units::Pt;
use id_arena::Id;

/// Column widths of each variant as fractions of the content width.
fn column_fractions(style: HeaderFooterStyle) -> &'static [f32] {
    match style {
        HeaderFooterStyle::TextOnly => &[1.0],
        HeaderFooterStyle::TextAndPageNumber => &[0.75, 0.25],
        HeaderFooterStyle::LogoAndText => &[0.25, 0.75],
        HeaderFooterStyle::LogoTextAndPageNumber => &[0.25, 0.5, 0.25],
    }
}

/// Lay out a header or footer as a one-row table spanning the content width.
///
/// Returns [None] when the text is blank: such headers are skipped entirely, even
/// for the logo variants. The page-number cell is always right aligned. A positive
/// border width draws one rule between the table and the body: below a header,
/// above a footer.
pub fn build_header_footer<F: FileSystem + ?Sized>(
    fs: &F,
    element: &HeaderFooter,
    style: Id<Style>,
    placement: TablePlacement,
    content_width: Pt,
) -> Result<Option<Table>> {
    let Some(text) = text_paragraph(style, &element.text) else {
        log::debug!("skipping {placement:?} without text");
        return Ok(None);
    };

    let mut cells = Vec::with_capacity(3);
    if element.style.has_logo() {
        let logo = element
            .image_path
            .as_ref()
            .ok_or_else(|| PDFError::not_found("logo", ""))?;
        cells.push(Cell::Image(place_image_at_height(
            fs,
            "logo",
            logo,
            element.image_height,
        )?));
    }
    cells.push(Cell::Paragraph(text));
    if matches!(
        element.style,
        HeaderFooterStyle::TextAndPageNumber | HeaderFooterStyle::LogoTextAndPageNumber
    ) {
        cells.push(Cell::Paragraph(Paragraph {
            style,
            alignment: Some(ParagraphAlignment::Right),
            tokens: page_number_tokens(),
        }));
    }

    let border = (element.border_width > Pt(0.0)).then(|| Border {
        width: element.border_width,
        edges: match placement {
            TablePlacement::Footer => Edges::top(),
            _ => Edges::bottom(),
        },
    });

    Ok(Some(Table {
        columns: column_fractions(element.style)
            .iter()
            .map(|f| Column {
                width: content_width * *f,
            })
            .collect(),
        rows: vec![Row { cells }],
        border,
    }))
}
