//! Breaking sections into pages of positioned drawing operations.
//!
//! Every section starts on a new page. Its header and footer tables are drawn on
//! each of its pages at a fixed distance from the paper edge, and the body flows
//! between them within the margins. Page-number fields stay symbolic here; they are
//! only resolved when the pages are written out and the page count is known.

use super::fonts::{encode_char, StandardFont};
use crate::document::Document;
use crate::page::{
    Block, Border, Cell, Column, Edges, Field, ImageAlignment, Paragraph, PlacedImage, Row,
    Section, Table, Token,
};
use crate::rect::Rect;
use crate::style::{ParagraphAlignment, Style};
use crate::units::{Cm, Pt};
use std::path::PathBuf;

/// Distance of a header's top edge from the top of the paper, and of a footer's
/// bottom edge from the bottom
pub(crate) const HEADER_DISTANCE: Cm = Cm(1.25);
/// Space kept between a header or footer and the body
const BODY_GAP: Pt = Pt(4.0);
const CELL_PADDING_X: Pt = Pt(3.4);
const CELL_PADDING_Y: Pt = Pt(1.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Glyph {
    Char(char),
    Space,
    Field(Field),
}

/// One line of text, positioned within a box of `width` starting at `left`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextLine {
    pub font: StandardFont,
    pub size: Pt,
    pub left: Pt,
    pub width: Pt,
    pub baseline: Pt,
    pub alignment: ParagraphAlignment,
    /// The line was broken because it ran out of room rather than at a line break
    pub wrapped: bool,
    pub underline: bool,
    pub glyphs: Vec<Glyph>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Text(TextLine),
    Image { index: usize, area: Rect },
    Rule { from: (Pt, Pt), to: (Pt, Pt), width: Pt },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    pub media_box: Rect,
    pub content_box: Rect,
    pub ops: Vec<Op>,
}

#[derive(Debug, Default)]
pub(crate) struct Layout {
    pub pages: Vec<PageLayout>,
    /// Distinct image files in order of first use; [`Op::Image`] indexes this
    pub images: Vec<PathBuf>,
}

/// Encode glyphs for showing. Fields are given as the text they resolve to.
pub(crate) fn encode_glyphs(
    glyphs: &[Glyph],
    wide: bool,
    mut field: impl FnMut(Field) -> String,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        match glyph {
            Glyph::Char(c) => bytes.push(encode_char(*c, wide)),
            Glyph::Space => bytes.push(b' '),
            Glyph::Field(f) => bytes.extend(field(*f).bytes()),
        }
    }
    bytes
}

/// Fields are measured as two digits until the page count is known
fn placeholder(_: Field) -> String {
    "00".to_string()
}

struct Line {
    glyphs: Vec<Glyph>,
    wrapped: bool,
}

struct Paginator<'a> {
    doc: &'a Document,
    wide: bool,
    layout: Layout,
    header: &'a [Table],
    footer: &'a [Table],
    /// Top and bottom of the body area of the current section's pages
    frame: (Pt, Pt),
    cursor: Pt,
    /// Whether anything has been placed in the body of the current page
    started: bool,
}

/// Lay out every section of `doc` onto pages.
pub(crate) fn paginate(doc: &Document, wide: bool) -> Layout {
    let mut paginator = Paginator {
        doc,
        wide,
        layout: Layout::default(),
        header: &[],
        footer: &[],
        frame: (Pt(0.0), Pt(0.0)),
        cursor: Pt(0.0),
        started: false,
    };
    for section in &doc.sections {
        paginator.section(section);
    }
    log::debug!(
        "paginated {} sections into {} pages",
        doc.sections.len(),
        paginator.layout.pages.len()
    );
    paginator.layout
}

impl<'a> Paginator<'a> {
    fn style(&self, paragraph: &Paragraph) -> &'a Style {
        &self.doc.styles[paragraph.style]
    }

    fn section(&mut self, section: &'a Section) {
        // sections without their own decorations carry on with the previous ones
        if !section.header.is_empty() {
            self.header = &section.header;
        }
        if !section.footer.is_empty() {
            self.footer = &section.footer;
        }

        let geometry = section.geometry;
        let content = geometry.content_box();
        let distance: Pt = HEADER_DISTANCE.into();
        let header_height: Pt = self.header.iter().map(|t| self.table_height(t)).sum();
        let footer_height: Pt = self.footer.iter().map(|t| self.table_height(t)).sum();

        let mut top = content.y2;
        if header_height > Pt(0.0) {
            top = top.min(geometry.height() - distance - header_height - BODY_GAP);
        }
        let mut bottom = content.y1;
        if footer_height > Pt(0.0) {
            bottom = bottom.max(distance + footer_height + BODY_GAP);
        }
        self.frame = (top, bottom);

        self.new_page(section);
        for block in &section.blocks {
            match block {
                Block::Paragraph(p) => self.body_paragraph(section, p),
                Block::Image(image) => self.body_image(section, image),
                Block::Table(table) => self.body_table(section, table),
            }
        }
    }

    fn new_page(&mut self, section: &Section) {
        let geometry = section.geometry;
        let left = geometry.margins.left;
        let distance: Pt = HEADER_DISTANCE.into();
        let mut ops = Vec::new();

        let (header, footer) = (self.header, self.footer);
        let mut top = geometry.height() - distance;
        for table in header {
            top = top - self.fixed_table(table, left, top, &mut ops);
        }
        let footer_height: Pt = footer.iter().map(|t| self.table_height(t)).sum();
        let mut top = distance + footer_height;
        for table in footer {
            top = top - self.fixed_table(table, left, top, &mut ops);
        }

        self.layout.pages.push(PageLayout {
            media_box: geometry.media_box(),
            content_box: geometry.content_box(),
            ops,
        });
        self.cursor = self.frame.0;
        self.started = false;
    }

    fn push(&mut self, op: Op) {
        if let Some(page) = self.layout.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Start a new page unless `height` still fits on this one. Something that does
    /// not fit on an empty page is placed anyway.
    fn ensure_room(&mut self, section: &Section, height: Pt) {
        if self.started && self.cursor - height < self.frame.1 {
            self.new_page(section);
        }
    }

    fn image_index(&mut self, image: &PlacedImage) -> usize {
        match self.layout.images.iter().position(|p| *p == image.path) {
            Some(index) => index,
            None => {
                self.layout.images.push(image.path.clone());
                self.layout.images.len() - 1
            }
        }
    }

    fn break_lines(&self, paragraph: &Paragraph, width: Pt) -> Vec<Line> {
        let style = self.style(paragraph);
        let font = StandardFont::for_spec(&style.font);
        let size = style.font.size;

        let mut lines = Vec::new();
        let mut current = Vec::new();
        let mut used = Pt(0.0);
        for token in &paragraph.tokens {
            let glyph = match token {
                Token::LineBreak => {
                    lines.push(Line {
                        glyphs: std::mem::take(&mut current),
                        wrapped: false,
                    });
                    used = Pt(0.0);
                    continue;
                }
                Token::Char(c) => Glyph::Char(*c),
                Token::Space => Glyph::Space,
                Token::Field(f) => Glyph::Field(*f),
            };
            let advance = font.measure(&encode_glyphs(&[glyph], self.wide, placeholder), size);
            if used + advance > width && !current.is_empty() {
                lines.push(Line {
                    glyphs: std::mem::take(&mut current),
                    wrapped: true,
                });
                used = Pt(0.0);
            }
            current.push(glyph);
            used += advance;
        }
        if !current.is_empty() {
            lines.push(Line {
                glyphs: current,
                wrapped: false,
            });
        }
        lines
    }

    fn text_line(&self, paragraph: &Paragraph, line: Line, left: Pt, width: Pt, top: Pt) -> Op {
        let style = self.style(paragraph);
        let size = style.font.size;
        let height = style.line_spacing.height();
        Op::Text(TextLine {
            font: StandardFont::for_spec(&style.font),
            size,
            left,
            width,
            baseline: top - height + size * 0.2,
            alignment: paragraph.alignment.unwrap_or(style.alignment),
            wrapped: line.wrapped,
            underline: style.font.underline,
            glyphs: line.glyphs,
        })
    }

    fn body_paragraph(&mut self, section: &Section, paragraph: &Paragraph) {
        let style = self.style(paragraph);
        let line_height = style.line_spacing.height();
        let left = section.geometry.margins.left;
        let width = section.geometry.content_width();

        if self.started {
            self.cursor = self.cursor - style.space_before;
        }
        for line in self.break_lines(paragraph, width) {
            self.ensure_room(section, line_height);
            let op = self.text_line(paragraph, line, left, width, self.cursor);
            self.push(op);
            self.cursor = self.cursor - line_height;
            self.started = true;
        }
        self.cursor = self.cursor - style.space_after;
    }

    fn body_image(&mut self, section: &Section, image: &PlacedImage) {
        let (width, height) = image.extent();
        self.ensure_room(section, height);

        let margins = section.geometry.margins;
        let available = section.geometry.content_width();
        let x = match image.alignment {
            ImageAlignment::Left => margins.left,
            ImageAlignment::Center => margins.left + (available - width) * 0.5,
            ImageAlignment::Right => margins.left + available - width,
        };
        let index = self.image_index(image);
        let top = self.cursor;
        self.push(Op::Image {
            index,
            area: Rect::below(x, top, width, height),
        });
        self.cursor = top - height;
        self.started = true;
    }

    fn body_table(&mut self, section: &Section, table: &Table) {
        let left = section.geometry.margins.left;
        let last = table.rows.len().saturating_sub(1);
        for (i, row) in table.rows.iter().enumerate() {
            let height = self.row_height(row, &table.columns);
            self.ensure_room(section, height);
            let top = self.cursor;
            let mut ops = Vec::new();
            self.row_ops(row, &table.columns, left, top, &mut ops);
            if let Some(border) = table.border {
                row_borders(border, &table.columns, left, top, height, i == 0, i == last, &mut ops);
            }
            for op in ops {
                self.push(op);
            }
            self.cursor = top - height;
            self.started = true;
        }
    }

    fn paragraph_height(&self, paragraph: &Paragraph, width: Pt) -> Pt {
        let style = self.style(paragraph);
        let lines = self.break_lines(paragraph, width).len() as f32;
        style.space_before + style.line_spacing.height() * lines + style.space_after
    }

    fn cell_height(&self, cell: &Cell, column: &Column) -> Pt {
        let inner = match cell {
            Cell::Paragraph(p) => self.paragraph_height(p, column.width - CELL_PADDING_X * 2.0),
            Cell::Image(image) => image.extent().1,
        };
        inner + CELL_PADDING_Y * 2.0
    }

    fn row_height(&self, row: &Row, columns: &[Column]) -> Pt {
        row.cells
            .iter()
            .zip(columns)
            .map(|(cell, column)| self.cell_height(cell, column))
            .fold(CELL_PADDING_Y * 2.0, Pt::max)
    }

    fn table_height(&self, table: &Table) -> Pt {
        table
            .rows
            .iter()
            .map(|row| self.row_height(row, &table.columns))
            .sum()
    }

    fn row_ops(
        &mut self,
        row: &Row,
        columns: &[Column],
        left: Pt,
        top: Pt,
        ops: &mut Vec<Op>,
    ) {
        let mut x = left;
        for (cell, column) in row.cells.iter().zip(columns) {
            let inner_left = x + CELL_PADDING_X;
            let inner_width = column.width - CELL_PADDING_X * 2.0;
            let mut y = top - CELL_PADDING_Y;
            match cell {
                Cell::Paragraph(p) => {
                    let style = self.style(p);
                    y = y - style.space_before;
                    for line in self.break_lines(p, inner_width) {
                        ops.push(self.text_line(p, line, inner_left, inner_width, y));
                        y = y - style.line_spacing.height();
                    }
                }
                Cell::Image(image) => {
                    let (w, h) = image.extent();
                    let index = self.image_index(image);
                    ops.push(Op::Image {
                        index,
                        area: Rect::below(inner_left, y, w, h),
                    });
                }
            }
            x += column.width;
        }
    }

    /// Draw a header or footer table with its top edge at `top`, returning its height
    fn fixed_table(&mut self, table: &Table, left: Pt, top: Pt, ops: &mut Vec<Op>) -> Pt {
        let mut y = top;
        let last = table.rows.len().saturating_sub(1);
        for (i, row) in table.rows.iter().enumerate() {
            let height = self.row_height(row, &table.columns);
            self.row_ops(row, &table.columns, left, y, ops);
            if let Some(border) = table.border {
                row_borders(border, &table.columns, left, y, height, i == 0, i == last, ops);
            }
            y = y - height;
        }
        top - y
    }
}

/// Rules for one row. A border on every edge outlines each cell, otherwise the
/// requested edges of the table as a whole are drawn.
#[allow(clippy::too_many_arguments)]
fn row_borders(
    border: Border,
    columns: &[Column],
    left: Pt,
    top: Pt,
    height: Pt,
    first: bool,
    last: bool,
    ops: &mut Vec<Op>,
) {
    let right = left + columns.iter().map(|c| c.width).sum::<Pt>();
    let bottom = top - height;
    let rule = |from: (Pt, Pt), to: (Pt, Pt)| Op::Rule {
        from,
        to,
        width: border.width,
    };

    if border.edges == Edges::all() {
        ops.push(rule((left, top), (right, top)));
        ops.push(rule((left, bottom), (right, bottom)));
        let mut x = left;
        ops.push(rule((x, top), (x, bottom)));
        for column in columns {
            x += column.width;
            ops.push(rule((x, top), (x, bottom)));
        }
        return;
    }

    if border.edges.top && first {
        ops.push(rule((left, top), (right, top)));
    }
    if border.edges.bottom && last {
        ops.push(rule((left, bottom), (right, bottom)));
    }
    if border.edges.left {
        ops.push(rule((left, top), (left, bottom)));
    }
    if border.edges.right {
        ops.push(rule((right, top), (right, bottom)));
    }
}
