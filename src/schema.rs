//! Table schemas: the JSON document a table element embeds to describe its
//! columns, style and rows.
//!
//! ```json
//! {
//!   "HasHeaderRow": true,
//!   "TableType": "Table",
//!   "StyleSettings": { "FontFamily": "Arial", "FontSize": 9, "BorderWidthInPt": 0.5, "BorderStyle": "All" },
//!   "Columns": [
//!     { "Name": "Item", "WidthInCm": 8, "Type": "Text" },
//!     { "Name": "Logo", "WidthInCm": 3, "HeightInCm": 1, "Type": "Image" }
//!   ],
//!   "RowData": [ { "a": "Widgets", "b": "/srv/logos/widgets.png" } ]
//! }
//! ```
//!
//! Row objects are read in the order their keys appear; the keys themselves carry
//! no meaning.

use crate::error::Result;
use crate::page::TablePlacement;
use crate::style::{FontStyle, ParagraphAlignment, TextFormat};
use crate::units::{Cm, Pt};
use crate::vocab;
use serde::Deserialize;
use serde_json::{Map, Value};

/// How a column renders the values of its cells.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum CellType {
    #[default]
    Text,
    /// The value is a path to an image
    Image,
    /// The value is ignored, the cell shows the page number
    PageNumber,
}

/// Which edges of the table get a rule.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BorderPlacement {
    #[default]
    None,
    Top,
    Bottom,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub format: TextFormat,
    pub border_width: Pt,
    pub border: BorderPlacement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub width: Pt,
    /// Height of images in this column
    pub height: Pt,
    pub cell_type: CellType,
}

/// One row of table data as (key, value) pairs in their original order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowData(pub Vec<(String, String)>);

impl RowData {
    /// The row's values, in order. This is what cells are filled from.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub has_header_row: bool,
    pub placement: TablePlacement,
    pub style: TableStyle,
    pub columns: Vec<ColumnDefinition>,
    pub rows: Vec<RowData>,
}

impl TableSchema {
    /// Parse a schema from its JSON text. Malformed JSON, missing columns and unknown
    /// vocabulary all fail with [`SchemaInvalid`](crate::PDFError::SchemaInvalid).
    pub fn parse(text: &str) -> Result<TableSchema> {
        let wire: SchemaWire = serde_json::from_str(text)?;
        Ok(wire.into())
    }

    /// Combined width of all columns
    pub fn width(&self) -> Pt {
        self.columns.iter().map(|c| c.width).sum()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SchemaWire {
    #[serde(default)]
    has_header_row: bool,
    #[serde(default, deserialize_with = "vocab::deserialize")]
    table_type: TablePlacement,
    #[serde(default)]
    style_settings: StyleWire,
    columns: Vec<ColumnWire>,
    #[serde(default)]
    row_data: Vec<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct StyleWire {
    font_family: String,
    font_size: f32,
    #[serde(deserialize_with = "vocab::deserialize")]
    font_style: FontStyle,
    line_spacing_in_pt: f32,
    spacing_before_in_pt: f32,
    spacing_after_in_pt: f32,
    border_width_in_pt: f32,
    #[serde(deserialize_with = "vocab::deserialize")]
    border_style: BorderPlacement,
}

impl Default for StyleWire {
    fn default() -> Self {
        let format = TextFormat::default();
        StyleWire {
            font_family: format.font_family,
            font_size: format.font_size.0,
            font_style: format.font_style,
            line_spacing_in_pt: format.line_spacing.0,
            spacing_before_in_pt: format.spacing_before.0,
            spacing_after_in_pt: format.spacing_after.0,
            border_width_in_pt: 0.0,
            border_style: BorderPlacement::None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ColumnWire {
    #[serde(default)]
    name: String,
    width_in_cm: f32,
    #[serde(default)]
    height_in_cm: f32,
    #[serde(rename = "Type", default, deserialize_with = "vocab::deserialize")]
    cell_type: CellType,
}

impl From<SchemaWire> for TableSchema {
    fn from(w: SchemaWire) -> Self {
        let s = w.style_settings;
        TableSchema {
            has_header_row: w.has_header_row,
            placement: w.table_type,
            style: TableStyle {
                format: TextFormat {
                    font_family: s.font_family,
                    font_size: Pt(s.font_size),
                    font_style: s.font_style,
                    line_spacing: Pt(s.line_spacing_in_pt),
                    alignment: ParagraphAlignment::Left,
                    spacing_before: Pt(s.spacing_before_in_pt),
                    spacing_after: Pt(s.spacing_after_in_pt),
                },
                border_width: Pt(s.border_width_in_pt),
                border: s.border_style,
            },
            columns: w
                .columns
                .into_iter()
                .map(|c| ColumnDefinition {
                    name: c.name,
                    width: Cm(c.width_in_cm).into(),
                    height: Cm(c.height_in_cm).into(),
                    cell_type: c.cell_type,
                })
                .collect(),
            rows: w
                .row_data
                .into_iter()
                .map(|row| {
                    RowData(
                        row.into_iter()
                            .map(|(k, v)| (k, value_text(v)))
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}

fn value_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
