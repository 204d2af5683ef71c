//! Content elements: the ordered description of what goes into a document.
//!
//! Callers building documents in Rust construct [`ContentElement`]s directly. Content
//! arriving as data (job files) comes as [`ElementDescriptor`]s, a flat attribute bag
//! where only the attributes relevant to the declared content type are read, and is
//! converted with `ContentElement::try_from`.

use crate::error::{PDFError, Result};
use crate::page::ImageAlignment;
use crate::style::{FontStyle, ParagraphAlignment, TextFormat};
use crate::units::{Cm, Pt};
use crate::vocab::{self, Vocabulary};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ElementKind {
    #[default]
    Paragraph,
    Image,
    PageBreak,
    Header,
    Footer,
    Table,
}

/// Column layouts available to headers and footers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HeaderFooterStyle {
    #[default]
    TextOnly,
    TextAndPageNumber,
    LogoAndText,
    LogoTextAndPageNumber,
}

impl HeaderFooterStyle {
    pub fn has_logo(self) -> bool {
        matches!(
            self,
            HeaderFooterStyle::LogoAndText | HeaderFooterStyle::LogoTextAndPageNumber
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooter {
    pub text: String,
    pub format: TextFormat,
    pub style: HeaderFooterStyle,
    /// Logo shown by the logo variants
    pub image_path: Option<PathBuf>,
    pub image_height: Pt,
    /// Width of the rule separating the header (or footer) from the body; zero
    /// draws no rule
    pub border_width: Pt,
}

/// Where a table element's schema comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    Paragraph {
        text: String,
        format: TextFormat,
    },
    Image {
        path: PathBuf,
        alignment: ImageAlignment,
    },
    PageBreak,
    Header(HeaderFooter),
    Footer(HeaderFooter),
    Table(TableSource),
}

impl ContentElement {
    pub fn paragraph<S: ToString>(text: S, format: TextFormat) -> ContentElement {
        ContentElement::Paragraph {
            text: text.to_string(),
            format,
        }
    }

    pub fn image<P: Into<PathBuf>>(path: P, alignment: ImageAlignment) -> ContentElement {
        ContentElement::Image {
            path: path.into(),
            alignment,
        }
    }

    pub fn table<S: ToString>(schema: S) -> ContentElement {
        ContentElement::Table(TableSource::Inline(schema.to_string()))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ContentElement::Paragraph { .. } => ElementKind::Paragraph,
            ContentElement::Image { .. } => ElementKind::Image,
            ContentElement::PageBreak => ElementKind::PageBreak,
            ContentElement::Header(_) => ElementKind::Header,
            ContentElement::Footer(_) => ElementKind::Footer,
            ContentElement::Table(_) => ElementKind::Table,
        }
    }
}

/// A content element as it appears in a job file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ElementDescriptor {
    #[serde(deserialize_with = "vocab::deserialize")]
    pub content_type: ElementKind,
    pub text: Option<String>,
    pub font_family: String,
    pub font_size: f32,
    #[serde(deserialize_with = "vocab::deserialize")]
    pub font_style: FontStyle,
    pub line_spacing_in_pt: f32,
    #[serde(deserialize_with = "vocab::deserialize")]
    pub paragraph_alignment: ParagraphAlignment,
    #[serde(deserialize_with = "vocab::deserialize")]
    pub image_alignment: ImageAlignment,
    pub spacing_before_in_pt: f32,
    pub spacing_after_in_pt: f32,
    pub image_path: Option<String>,
    /// Kept as a word until conversion so that an unknown style is reported as an
    /// unsupported element rather than a malformed file
    pub header_footer_style: Option<String>,
    pub image_height_in_cm: f32,
    pub border_width_in_pt: f32,
    pub table: Option<String>,
    pub table_path: Option<String>,
}

impl Default for ElementDescriptor {
    fn default() -> Self {
        let format = TextFormat::default();
        ElementDescriptor {
            content_type: ElementKind::Paragraph,
            text: None,
            font_family: format.font_family,
            font_size: format.font_size.0,
            font_style: format.font_style,
            line_spacing_in_pt: format.line_spacing.0,
            paragraph_alignment: format.alignment,
            image_alignment: ImageAlignment::Left,
            spacing_before_in_pt: format.spacing_before.0,
            spacing_after_in_pt: format.spacing_after.0,
            image_path: None,
            header_footer_style: None,
            image_height_in_cm: 0.0,
            border_width_in_pt: 0.0,
            table: None,
            table_path: None,
        }
    }
}

impl ElementDescriptor {
    fn format(&self) -> TextFormat {
        TextFormat {
            font_family: self.font_family.clone(),
            font_size: Pt(self.font_size),
            font_style: self.font_style,
            line_spacing: Pt(self.line_spacing_in_pt),
            alignment: self.paragraph_alignment,
            spacing_before: Pt(self.spacing_before_in_pt),
            spacing_after: Pt(self.spacing_after_in_pt),
        }
    }

    fn header_footer(self) -> Result<HeaderFooter> {
        let style = match self.header_footer_style.as_deref() {
            Some(word) => HeaderFooterStyle::parse(word)?,
            None => HeaderFooterStyle::default(),
        };
        Ok(HeaderFooter {
            format: self.format(),
            text: self.text.unwrap_or_default(),
            style,
            image_path: self
                .image_path
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            image_height: Cm(self.image_height_in_cm).into(),
            border_width: Pt(self.border_width_in_pt),
        })
    }
}

impl TryFrom<ElementDescriptor> for ContentElement {
    type Error = PDFError;

    fn try_from(d: ElementDescriptor) -> Result<ContentElement> {
        Ok(match d.content_type {
            ElementKind::Paragraph => ContentElement::Paragraph {
                format: d.format(),
                text: d.text.unwrap_or_default(),
            },
            ElementKind::Image => ContentElement::Image {
                path: PathBuf::from(d.image_path.unwrap_or_default()),
                alignment: d.image_alignment,
            },
            ElementKind::PageBreak => ContentElement::PageBreak,
            ElementKind::Header => ContentElement::Header(d.header_footer()?),
            ElementKind::Footer => ContentElement::Footer(d.header_footer()?),
            ElementKind::Table => match (d.table, d.table_path) {
                (Some(schema), _) if !schema.trim().is_empty() => {
                    ContentElement::Table(TableSource::Inline(schema))
                }
                (_, Some(path)) if !path.trim().is_empty() => {
                    ContentElement::Table(TableSource::File(PathBuf::from(path)))
                }
                _ => {
                    return Err(PDFError::SchemaInvalid(
                        "table element carries no schema".to_string(),
                    ))
                }
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(json: &str) -> Result<ContentElement> {
        let d: ElementDescriptor = serde_json::from_str(json)?;
        ContentElement::try_from(d)
    }

    #[test]
    fn paragraph_defaults_follow_element_defaults() {
        let el = parse(r#"{ "ContentType": "Paragraph", "Text": "hi" }"#).unwrap();
        match el {
            ContentElement::Paragraph { text, format } => {
                assert_eq!(text, "hi");
                assert_eq!(format, TextFormat::default());
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn irrelevant_attributes_are_ignored() {
        let el = parse(
            r#"{ "ContentType": "PageBreak", "Text": "ignored", "ImagePath": "x.png", "HeaderFooterStyle": "Bogus" }"#,
        )
        .unwrap();
        assert_eq!(el, ContentElement::PageBreak);
    }

    #[test]
    fn header_uses_original_style_names() {
        let el = parse(
            r#"{ "ContentType": "Header", "Text": "Doc", "HeaderFooterStyle": "LogoText",
                 "ImagePath": "logo.png", "ImageHeightInCm": 2.54, "BorderWidthInPt": 0.5 }"#,
        )
        .unwrap();
        let ContentElement::Header(h) = el else {
            panic!("expected header")
        };
        assert_eq!(h.style, HeaderFooterStyle::LogoAndText);
        assert!((h.image_height.0 - 72.0).abs() < 1e-3);
        assert_eq!(h.border_width, Pt(0.5));
    }

    #[test]
    fn unknown_header_style_is_unsupported() {
        let err = parse(r#"{ "ContentType": "Footer", "HeaderFooterStyle": "Watermark" }"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ElementUnsupported);
    }

    #[test]
    fn unknown_content_type_is_invalid() {
        let err = parse(r#"{ "ContentType": "Chart" }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
    }

    #[test]
    fn table_without_schema_is_invalid() {
        let err = parse(r#"{ "ContentType": "Table" }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
    }
}
