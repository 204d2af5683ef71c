//! Element formatting resolved into named, reusable paragraph styles.
//!
//! Styles are never shared: every content element gets a fresh style even when its
//! formatting is identical to an earlier element's. Blocks refer to their style by
//! [`id_arena::Id`] into [`Document::styles`](crate::Document::styles).

use crate::units::Pt;

/// Font style as element settings express it. Underline is a style of its own, it
/// does not combine with bold or italic.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Underline,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Justify,
    Right,
}

/// The formatting attributes shared by paragraphs, headers, footers and table cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    pub font_family: String,
    pub font_size: Pt,
    pub font_style: FontStyle,
    pub line_spacing: Pt,
    pub alignment: ParagraphAlignment,
    pub spacing_before: Pt,
    pub spacing_after: Pt,
}

impl Default for TextFormat {
    fn default() -> Self {
        TextFormat {
            font_family: "Times New Roman".to_string(),
            font_size: Pt(11.0),
            font_style: FontStyle::Regular,
            line_spacing: Pt(14.0),
            alignment: ParagraphAlignment::Left,
            spacing_before: Pt(8.0),
            spacing_after: Pt(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: Pt,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Distance between baselines. Only exact spacing is produced; a line is always
/// exactly this tall regardless of the font size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineSpacing {
    Exactly(Pt),
}

impl LineSpacing {
    pub fn height(&self) -> Pt {
        match self {
            LineSpacing::Exactly(h) => *h,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub name: String,
    pub font: FontSpec,
    pub alignment: ParagraphAlignment,
    pub line_spacing: LineSpacing,
    pub space_before: Pt,
    pub space_after: Pt,
}

impl Style {
    /// Resolve an element's formatting attributes into a style called `name`
    pub fn resolve<S: ToString>(name: S, format: &TextFormat) -> Style {
        let (bold, italic, underline) = match format.font_style {
            FontStyle::Regular => (false, false, false),
            FontStyle::Bold => (true, false, false),
            FontStyle::Italic => (false, true, false),
            FontStyle::BoldItalic => (true, true, false),
            FontStyle::Underline => (false, false, true),
        };

        Style {
            name: name.to_string(),
            font: FontSpec {
                family: format.font_family.clone(),
                size: format.font_size,
                bold,
                italic,
                underline,
            },
            alignment: format.alignment,
            line_spacing: LineSpacing::Exactly(format.line_spacing),
            space_before: format.spacing_before,
            space_after: format.spacing_after,
        }
    }

    /// A style carrying only default formatting, registered for elements that have
    /// no text of their own
    pub fn normal<S: ToString>(name: S) -> Style {
        Style::resolve(name, &TextFormat::default())
    }

    /// The same formatting, aligned differently
    pub fn aligned(&self, alignment: ParagraphAlignment) -> Style {
        Style {
            alignment,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_italic_sets_both_flags() {
        let format = TextFormat {
            font_style: FontStyle::BoldItalic,
            ..Default::default()
        };
        let style = Style::resolve("style_0", &format);
        assert!(style.font.bold);
        assert!(style.font.italic);
        assert!(!style.font.underline);
    }

    #[test]
    fn underline_stands_alone() {
        let format = TextFormat {
            font_style: FontStyle::Underline,
            ..Default::default()
        };
        let style = Style::resolve("s", &format);
        assert!(style.font.underline);
        assert!(!style.font.bold && !style.font.italic);
    }

    #[test]
    fn line_spacing_is_exact() {
        let format = TextFormat {
            line_spacing: Pt(11.0),
            spacing_before: Pt(8.0),
            ..Default::default()
        };
        let style = Style::resolve("s", &format);
        assert_eq!(style.line_spacing, LineSpacing::Exactly(Pt(11.0)));
        assert_eq!(style.line_spacing.height(), Pt(11.0));
        assert_eq!(style.space_before, Pt(8.0));
    }
}
