use crate::{
    info::Info,
    page::{PageGeometry, Section},
    style::Style,
};
use id_arena::{Arena, Id};

/// The laid-out document: every section in order, the styles their blocks refer
/// to, and the metadata. A `Document` is built once per [`create_document`] call
/// and handed by value to a [`Renderer`].
///
/// [`create_document`]: crate::create_document
/// [`Renderer`]: crate::render::Renderer
#[derive(Debug)]
pub struct Document {
    pub info: Info,
    pub styles: Arena<Style>,
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document with a single, empty section set up with `geometry`
    pub fn new(info: Info, geometry: PageGeometry) -> Document {
        Document {
            info,
            styles: Arena::new(),
            sections: vec![Section::new(geometry)],
        }
    }

    /// Register a style. Styles are stored "globally" within the document so that
    /// blocks in any section can refer to them by id.
    pub fn add_style(&mut self, style: Style) -> Id<Style> {
        self.styles.alloc(style)
    }

    /// Look up a style by name. Names are unique per document as long as they are
    /// only created by the assembler.
    pub fn style_named(&self, name: &str) -> Option<&Style> {
        self.styles
            .iter()
            .map(|(_, s)| s)
            .find(|s| s.name == name)
    }

    /// The section content is currently appended to: always the last one.
    pub fn current_section(&self) -> &Section {
        // a document always has at least its initial section
        &self.sections[self.sections.len() - 1]
    }

    pub fn current_section_mut(&mut self) -> &mut Section {
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Start a new section with the same page geometry as the current one and make
    /// it current
    pub fn start_section(&mut self) -> &mut Section {
        let geometry = self.current_section().geometry;
        self.sections.push(Section::new(geometry));
        self.current_section_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize::{resolve, Orientation, PaperSize};
    use crate::units::Pt;

    fn geometry() -> PageGeometry {
        PageGeometry {
            size: resolve(PaperSize::A5, Orientation::Landscape),
            orientation: Orientation::Landscape,
            margins: Margins::all(Pt(36.0)),
        }
    }

    #[test]
    fn new_section_copies_geometry() {
        let mut doc = Document::new(Info::new(), geometry());
        doc.start_section();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].geometry, doc.sections[1].geometry);
    }

    #[test]
    fn identical_styles_are_not_interned() {
        let mut doc = Document::new(Info::new(), geometry());
        let a = doc.add_style(Style::normal("style_0"));
        let b = doc.add_style(Style::normal("style_1"));
        assert_ne!(a, b);
        assert_eq!(doc.styles.len(), 2);
        assert!(doc.style_named("style_1").is_some());
    }
}
