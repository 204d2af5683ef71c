use crate::image::ImageDimensions;
use crate::layout::Margins;
use crate::pagesize::{Orientation, PageSize};
use crate::rect::Rect;
use crate::style::{ParagraphAlignment, Style};
use crate::units::Pt;
use id_arena::Id;
use std::path::PathBuf;

/// A value the renderer fills in once pagination is known.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Field {
    /// The 1-based index of the page being rendered
    PageNumber,
    /// The total number of pages in the document
    PageCount,
}

/// The primitives a paragraph is made of. Spaces and line breaks are explicit so
/// that the renderer never collapses whitespace or reflows source lines.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Char(char),
    Space,
    LineBreak,
    Field(Field),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Paragraph {
    pub style: Id<Style>,
    /// Overrides the style's alignment for this paragraph only
    pub alignment: Option<ParagraphAlignment>,
    pub tokens: Vec<Token>,
}

impl Paragraph {
    pub fn new(style: Id<Style>, tokens: Vec<Token>) -> Paragraph {
        Paragraph {
            style,
            alignment: None,
            tokens,
        }
    }

    /// The paragraph's text with spaces and line breaks spelled out and fields
    /// shown as placeholders. Mostly useful for debugging and tests.
    pub fn plain_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| match t {
                Token::Char(c) => c.to_string(),
                Token::Space => " ".to_string(),
                Token::LineBreak => "\n".to_string(),
                Token::Field(Field::PageNumber) => "{page}".to_string(),
                Token::Field(Field::PageCount) => "{pages}".to_string(),
            })
            .collect()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ImageAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The one dimension a placed image is fixed by. The aspect ratio is always locked,
/// the renderer derives the other dimension from the image's pixel size.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ImageSize {
    Width(Pt),
    Height(Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub struct PlacedImage {
    pub path: PathBuf,
    pub dimensions: ImageDimensions,
    pub size: ImageSize,
    pub alignment: ImageAlignment,
}

impl PlacedImage {
    /// The (width, height) the image occupies once its locked aspect ratio is applied
    pub fn extent(&self) -> (Pt, Pt) {
        let ratio = self.dimensions.aspect_ratio();
        match self.size {
            ImageSize::Width(w) => (w, w / ratio),
            ImageSize::Height(h) => (h * ratio, h),
        }
    }
}

/// Where a table is attached within its section.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TablePlacement {
    #[default]
    Body,
    Header,
    Footer,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Column {
    pub width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Cell {
    Paragraph(Paragraph),
    Image(PlacedImage),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Which edges of a table a rule is drawn on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Edges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Edges {
    pub fn all() -> Edges {
        Edges {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn top() -> Edges {
        Edges {
            top: true,
            ..Default::default()
        }
    }

    pub fn bottom() -> Edges {
        Edges {
            bottom: true,
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Border {
    pub width: Pt,
    pub edges: Edges,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// `All` draws the rule around every cell, the other placements only on
    /// the outer edge of the table
    pub border: Option<Border>,
}

impl Table {
    pub fn width(&self) -> Pt {
        self.columns.iter().map(|c| c.width).sum()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Block {
    Paragraph(Paragraph),
    Image(PlacedImage),
    Table(Table),
}

/// Page setup shared by every page of a section.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PageGeometry {
    /// Width and height with the orientation already applied
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.width() - self.margins.horizontal()
    }

    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.width(),
            y2: self.height(),
        }
    }

    /// Where content can live, i.e. within the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margins.left,
            y1: self.margins.bottom,
            x2: self.width() - self.margins.right,
            y2: self.height() - self.margins.top,
        }
    }
}

/// A run of pages sharing one page geometry. Headers and footers hold the tables
/// that repeat at the top and bottom of every page of the section.
#[derive(Clone, PartialEq, Debug)]
pub struct Section {
    pub geometry: PageGeometry,
    pub blocks: Vec<Block>,
    pub header: Vec<Table>,
    pub footer: Vec<Table>,
}

impl Section {
    pub fn new(geometry: PageGeometry) -> Section {
        Section {
            geometry,
            blocks: Vec::new(),
            header: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Attach a table to the body, header or footer of this section
    pub fn attach_table(&mut self, placement: TablePlacement, table: Table) {
        match placement {
            TablePlacement::Body => self.blocks.push(Block::Table(table)),
            TablePlacement::Header => self.header.push(table),
            TablePlacement::Footer => self.footer.push(table),
        }
    }
}
