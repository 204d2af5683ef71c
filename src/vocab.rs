//! Mapping tables between the words used in settings, content descriptors and
//! table schemas, and the enums they stand for. Lookups ignore case. Unknown words
//! fail closed.

use crate::element::{ElementKind, HeaderFooterStyle};
use crate::error::{PDFError, Result};
use crate::output::ConflictPolicy;
use crate::page::{ImageAlignment, TablePlacement};
use crate::pagesize::{Orientation, PaperSize};
use crate::schema::{BorderPlacement, CellType};
use crate::style::{FontStyle, ParagraphAlignment};
use serde::{Deserialize, Deserializer};

pub trait Vocabulary: Sized + Copy + 'static {
    /// What the word describes, for error messages
    const WHAT: &'static str;
    const TABLE: &'static [(&'static str, Self)];

    fn parse(word: &str) -> Result<Self> {
        lookup(word).ok_or_else(|| {
            PDFError::SchemaInvalid(format!("unknown {} '{}'", Self::WHAT, word))
        })
    }
}

pub(crate) fn lookup<T: Vocabulary>(word: &str) -> Option<T> {
    let word = word.trim();
    T::TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|(_, value)| *value)
}

/// `deserialize_with` adapter for fields holding a vocabulary word
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Vocabulary,
{
    let word = String::deserialize(deserializer)?;
    T::parse(&word).map_err(serde::de::Error::custom)
}

impl Vocabulary for PaperSize {
    const WHAT: &'static str = "page size";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("A0", PaperSize::A0),
        ("A1", PaperSize::A1),
        ("A2", PaperSize::A2),
        ("A3", PaperSize::A3),
        ("A4", PaperSize::A4),
        ("A5", PaperSize::A5),
        ("A6", PaperSize::A6),
        ("B5", PaperSize::B5),
        ("Ledger", PaperSize::Ledger),
        ("Legal", PaperSize::Legal),
        ("Letter", PaperSize::Letter),
    ];
}

impl Vocabulary for Orientation {
    const WHAT: &'static str = "page orientation";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Portrait", Orientation::Portrait),
        ("Landscape", Orientation::Landscape),
    ];
}

impl Vocabulary for ConflictPolicy {
    const WHAT: &'static str = "file exists action";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Error", ConflictPolicy::Error),
        ("Overwrite", ConflictPolicy::Overwrite),
        ("Rename", ConflictPolicy::Rename),
    ];
}

impl Vocabulary for FontStyle {
    const WHAT: &'static str = "font style";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Regular", FontStyle::Regular),
        ("Bold", FontStyle::Bold),
        ("Italic", FontStyle::Italic),
        ("BoldItalic", FontStyle::BoldItalic),
        ("Underline", FontStyle::Underline),
    ];
}

impl Vocabulary for ParagraphAlignment {
    const WHAT: &'static str = "paragraph alignment";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Left", ParagraphAlignment::Left),
        ("Center", ParagraphAlignment::Center),
        ("Justify", ParagraphAlignment::Justify),
        ("Right", ParagraphAlignment::Right),
    ];
}

impl Vocabulary for ImageAlignment {
    const WHAT: &'static str = "image alignment";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Left", ImageAlignment::Left),
        ("Center", ImageAlignment::Center),
        ("Right", ImageAlignment::Right),
    ];
}

impl Vocabulary for ElementKind {
    const WHAT: &'static str = "content type";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Paragraph", ElementKind::Paragraph),
        ("Image", ElementKind::Image),
        ("PageBreak", ElementKind::PageBreak),
        ("Header", ElementKind::Header),
        ("Footer", ElementKind::Footer),
        ("Table", ElementKind::Table),
    ];
}

impl Vocabulary for HeaderFooterStyle {
    const WHAT: &'static str = "header/footer style";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("TextOnly", HeaderFooterStyle::TextOnly),
        ("Text", HeaderFooterStyle::TextOnly),
        ("TextAndPageNumber", HeaderFooterStyle::TextAndPageNumber),
        ("TextPagenum", HeaderFooterStyle::TextAndPageNumber),
        ("LogoAndText", HeaderFooterStyle::LogoAndText),
        ("LogoText", HeaderFooterStyle::LogoAndText),
        ("LogoTextAndPageNumber", HeaderFooterStyle::LogoTextAndPageNumber),
        ("LogoTextPagenum", HeaderFooterStyle::LogoTextAndPageNumber),
    ];

    fn parse(word: &str) -> Result<Self> {
        lookup(word).ok_or_else(|| {
            PDFError::ElementUnsupported(format!("unknown {} '{}'", Self::WHAT, word))
        })
    }
}

impl Vocabulary for TablePlacement {
    const WHAT: &'static str = "table type";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("BodyTable", TablePlacement::Body),
        ("Table", TablePlacement::Body),
        ("HeaderTable", TablePlacement::Header),
        ("FooterTable", TablePlacement::Footer),
    ];
}

impl Vocabulary for CellType {
    const WHAT: &'static str = "column type";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Text", CellType::Text),
        ("Image", CellType::Image),
        ("PageNumber", CellType::PageNumber),
        ("PageNum", CellType::PageNumber),
    ];
}

impl Vocabulary for BorderPlacement {
    const WHAT: &'static str = "border style";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("None", BorderPlacement::None),
        ("Top", BorderPlacement::Top),
        ("Bottom", BorderPlacement::Bottom),
        ("All", BorderPlacement::All),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(PaperSize::parse(" letter ").unwrap(), PaperSize::Letter);
        assert_eq!(FontStyle::parse("bolditalic").unwrap(), FontStyle::BoldItalic);
    }

    #[test]
    fn unknown_words_fail_closed() {
        assert_eq!(
            PaperSize::parse("A7").unwrap_err().kind(),
            ErrorKind::SchemaInvalid
        );
        assert_eq!(
            CellType::parse("Chart").unwrap_err().kind(),
            ErrorKind::SchemaInvalid
        );
    }

    #[test]
    fn unknown_header_style_is_unsupported_element() {
        assert_eq!(
            HeaderFooterStyle::parse("LogoOnly").unwrap_err().kind(),
            ErrorKind::ElementUnsupported
        );
        assert_eq!(
            HeaderFooterStyle::parse("TextPagenum").unwrap(),
            HeaderFooterStyle::TextAndPageNumber
        );
    }
}
