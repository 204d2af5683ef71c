use crate::element::TableSource;
use crate::error::{PDFError, Result};
use crate::layout::image::place_image_at_height;
use crate::layout::text::{page_number_tokens, tokenize};
use crate::output::FileSystem;
use crate::page::{Border, Cell, Column, Edges, Paragraph, Row, Table};
use crate::schema::{BorderPlacement, CellType, TableSchema};
use crate::style::Style;
use crate::units::Pt;
use id_arena::Id;
use std::path::Path;

/// Read and parse the schema a table element refers to.
pub fn load_schema<F: FileSystem + ?Sized>(fs: &F, source: &TableSource) -> Result<TableSchema> {
    match source {
        TableSource::Inline(text) => TableSchema::parse(text),
        TableSource::File(path) => {
            let text = fs
                .read_to_string(path)
                .map_err(|_| PDFError::not_found("table schema", path))?;
            TableSchema::parse(&text)
        }
    }
}

fn text_cell(style: Id<Style>, text: &str) -> Cell {
    Cell::Paragraph(Paragraph::new(style, tokenize(text).unwrap_or_default()))
}

/// Expand a table schema into a table.
///
/// Columns must fit within `content_width`. The header row, when requested, shows
/// the column names as plain text whatever the column types. Data rows fill their
/// cells positionally: the n-th value of a row goes to the n-th column, its key is
/// not consulted. Values beyond the last column are dropped, missing values count
/// as empty.
pub fn build_table<F: FileSystem + ?Sized>(
    fs: &F,
    schema: &TableSchema,
    style: Id<Style>,
    content_width: Pt,
) -> Result<Table> {
    let required = schema.width();
    if required > content_width {
        return Err(PDFError::TableTooWide {
            required,
            available: content_width,
        });
    }

    let columns = schema
        .columns
        .iter()
        .map(|c| Column { width: c.width })
        .collect();

    let mut rows = Vec::with_capacity(schema.rows.len() + 1);
    if schema.has_header_row {
        rows.push(Row {
            cells: schema
                .columns
                .iter()
                .map(|c| text_cell(style, &c.name))
                .collect(),
        });
    }

    for data in &schema.rows {
        let mut values = data.values();
        let mut cells = Vec::with_capacity(schema.columns.len());
        for column in &schema.columns {
            let value = values.next().unwrap_or("");
            cells.push(match column.cell_type {
                CellType::Text => text_cell(style, value),
                CellType::Image => Cell::Image(place_image_at_height(
                    fs,
                    "table cell image",
                    Path::new(value.trim()),
                    column.height,
                )?),
                CellType::PageNumber => Cell::Paragraph(Paragraph::new(style, page_number_tokens())),
            });
        }
        rows.push(Row { cells });
    }

    let border = if schema.style.border_width > Pt(0.0) {
        let edges = match schema.style.border {
            BorderPlacement::None => None,
            BorderPlacement::Top => Some(Edges::top()),
            BorderPlacement::Bottom => Some(Edges::bottom()),
            BorderPlacement::All => Some(Edges::all()),
        };
        edges.map(|edges| Border {
            width: schema.style.border_width,
            edges,
        })
    } else {
        None
    };

    Ok(Table {
        columns,
        rows,
        border,
    })
}
