use super::fonts::StandardFont;
use super::paginate::{encode_glyphs, paginate, Layout, Op, PageLayout, TextLine};
use super::{RenderOptions, Renderer};
use crate::document::Document;
use crate::error::Result;
use crate::image::encode_from_disk;
use crate::page::Field;
use crate::refs::{ObjectReferences, RefType};
use crate::style::ParagraphAlignment;
use crate::units::Pt;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Ref, Str};
use std::path::Path;

/// Writes documents as PDF using the standard Type 1 fonts.
#[derive(Debug, Default, Copy, Clone)]
pub struct PdfRenderer;

impl Renderer for PdfRenderer {
    fn render(&self, document: Document, options: &RenderOptions) -> Result<Vec<u8>> {
        let layout = paginate(&document, options.wide_characters);

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        document.info.write(&mut refs, &mut writer);

        let page_refs: Vec<Ref> = (0..layout.pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        let fonts = used_fonts(&layout);
        let font_refs: Vec<Ref> = fonts
            .iter()
            .enumerate()
            .map(|(i, font)| {
                let id = refs.gen(RefType::Font(i));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
                id
            })
            .collect();

        let image_refs = layout
            .images
            .iter()
            .enumerate()
            .map(|(i, path)| write_image(&mut refs, i, path, &mut writer))
            .collect::<Result<Vec<Ref>>>()?;

        let total = layout.pages.len();
        for (i, page) in layout.pages.iter().enumerate() {
            let rendered = page_content(page, i + 1, total, &fonts, options.wide_characters);
            let content_id = refs.gen(RefType::ContentForPage(i));

            let mut pdf_page = writer.page(page_refs[i]);
            pdf_page.media_box(page.media_box.into());
            pdf_page.art_box(page.content_box.into());
            pdf_page.parent(page_tree_id);
            pdf_page.contents(content_id);

            let mut resources = pdf_page.resources();
            let mut resource_fonts = resources.fonts();
            for (f, id) in font_refs.iter().enumerate() {
                resource_fonts.pair(Name(format!("F{f}").as_bytes()), *id);
            }
            resource_fonts.finish();
            let mut resource_xobjects = resources.x_objects();
            for (n, id) in image_refs.iter().enumerate() {
                resource_xobjects.pair(Name(format!("I{n}").as_bytes()), *id);
            }
            resource_xobjects.finish();
            resources.finish();
            pdf_page.finish();

            writer.stream(content_id, rendered.as_slice());
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        log::debug!(
            "rendered {} pages with {} fonts and {} images",
            total,
            fonts.len(),
            image_refs.len()
        );
        Ok(writer.finish())
    }
}

/// Every font some line is shown in, in a stable order
fn used_fonts(layout: &Layout) -> Vec<StandardFont> {
    let mut fonts: Vec<StandardFont> = layout
        .pages
        .iter()
        .flat_map(|page| page.ops.iter())
        .filter_map(|op| match op {
            Op::Text(line) => Some(line.font),
            _ => None,
        })
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

fn write_image(
    refs: &mut ObjectReferences,
    index: usize,
    path: &Path,
    writer: &mut Pdf,
) -> Result<Ref> {
    let encoded = encode_from_disk(path)?;
    let id = refs.gen(RefType::Image(index));

    let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
    image.filter(encoded.filter);
    image.width(encoded.width as i32);
    image.height(encoded.height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);

    if encoded.mask.is_some() {
        image.s_mask(refs.gen(RefType::ImageMask(index)));
    }
    image.finish();

    // add a transparency mask if we have one
    if let (Some(mask_id), Some(mask)) = (refs.get(RefType::ImageMask(index)), &encoded.mask) {
        let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
        s_mask.filter(Filter::FlateDecode);
        s_mask.width(encoded.width as i32);
        s_mask.height(encoded.height as i32);
        s_mask.color_space().device_gray();
        s_mask.bits_per_component(8);
    }

    Ok(id)
}

fn page_content(
    page: &PageLayout,
    number: usize,
    total: usize,
    fonts: &[StandardFont],
    wide: bool,
) -> Vec<u8> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            Op::Text(line) => show_line(&mut content, line, number, total, fonts, wide),
            Op::Image { index, area } => {
                content.save_state();
                content.transform([
                    area.width().0,
                    0.0,
                    0.0,
                    area.height().0,
                    area.x1.0,
                    area.y1.0,
                ]);
                content.x_object(Name(format!("I{index}").as_bytes()));
                content.restore_state();
            }
            Op::Rule { from, to, width } => {
                content.save_state();
                content.set_line_width(width.0);
                content.move_to(from.0 .0, from.1 .0);
                content.line_to(to.0 .0, to.1 .0);
                content.stroke();
                content.restore_state();
            }
        }
    }
    content.finish()
}

fn show_line(
    content: &mut Content,
    line: &TextLine,
    number: usize,
    total: usize,
    fonts: &[StandardFont],
    wide: bool,
) {
    let bytes = encode_glyphs(&line.glyphs, wide, |field| match field {
        Field::PageNumber => number.to_string(),
        Field::PageCount => total.to_string(),
    });
    if bytes.is_empty() {
        return;
    }

    let width = line.font.measure(&bytes, line.size);
    let slack = line.width - width;
    let spaces = bytes.iter().filter(|b| **b == b' ').count();
    let (x, word_spacing) = match line.alignment {
        ParagraphAlignment::Left => (line.left, 0.0),
        ParagraphAlignment::Center => (line.left + slack * 0.5, 0.0),
        ParagraphAlignment::Right => (line.left + slack, 0.0),
        // the last line of a paragraph stays ragged
        ParagraphAlignment::Justify if line.wrapped && spaces > 0 && slack > Pt(0.0) => {
            (line.left, slack.0 / spaces as f32)
        }
        ParagraphAlignment::Justify => (line.left, 0.0),
    };
    let font = fonts.iter().position(|f| *f == line.font).unwrap_or(0);

    content
        .begin_text()
        .set_font(Name(format!("F{font}").as_bytes()), line.size.0)
        .set_word_spacing(word_spacing)
        .next_line(x.0, line.baseline.0)
        .show(Str(&bytes))
        .end_text();

    if line.underline {
        let thick = (line.size.0 * 0.05).max(0.5);
        let y = line.baseline.0 - line.size.0 * 0.12;
        let length = width.0 + word_spacing * spaces as f32;
        content.rect(x.0, y - thick, length, thick).fill_nonzero();
    }
}
