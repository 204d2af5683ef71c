//! The standard Type 1 fonts every PDF viewer provides, their widths, and the
//! single-byte encoding text is shown in.

use crate::style::FontSpec;
use crate::units::Pt;

/// One of the twelve Latin standard fonts. Nothing is embedded; viewers supply the
/// glyphs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Family {
    Serif,
    Sans,
    Mono,
}

impl Family {
    fn of(name: &str) -> Family {
        let name = name.to_ascii_lowercase();
        const MONO: &[&str] = &["courier", "mono", "consolas", "lucida console"];
        const SANS: &[&str] = &[
            "arial", "helvetica", "sans", "verdana", "calibri", "segoe", "tahoma", "trebuchet",
        ];
        if MONO.iter().any(|m| name.contains(m)) {
            Family::Mono
        } else if SANS.iter().any(|s| name.contains(s)) {
            Family::Sans
        } else {
            Family::Serif
        }
    }
}

impl StandardFont {
    /// The closest standard font to what a style asks for
    pub fn for_spec(spec: &FontSpec) -> StandardFont {
        use StandardFont::*;
        match (Family::of(&spec.family), spec.bold, spec.italic) {
            (Family::Serif, false, false) => TimesRoman,
            (Family::Serif, true, false) => TimesBold,
            (Family::Serif, false, true) => TimesItalic,
            (Family::Serif, true, true) => TimesBoldItalic,
            (Family::Sans, false, false) => Helvetica,
            (Family::Sans, true, false) => HelveticaBold,
            (Family::Sans, false, true) => HelveticaOblique,
            (Family::Sans, true, true) => HelveticaBoldOblique,
            (Family::Mono, false, false) => Courier,
            (Family::Mono, true, false) => CourierBold,
            (Family::Mono, false, true) => CourierOblique,
            (Family::Mono, true, true) => CourierBoldOblique,
        }
    }

    pub fn base_name(self) -> &'static str {
        use StandardFont::*;
        match self {
            TimesRoman => "Times-Roman",
            TimesBold => "Times-Bold",
            TimesItalic => "Times-Italic",
            TimesBoldItalic => "Times-BoldItalic",
            Helvetica => "Helvetica",
            HelveticaBold => "Helvetica-Bold",
            HelveticaOblique => "Helvetica-Oblique",
            HelveticaBoldOblique => "Helvetica-BoldOblique",
            Courier => "Courier",
            CourierBold => "Courier-Bold",
            CourierOblique => "Courier-Oblique",
            CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    fn is_bold(self) -> bool {
        use StandardFont::*;
        matches!(
            self,
            TimesBold | TimesBoldItalic | HelveticaBold | HelveticaBoldOblique | CourierBold | CourierBoldOblique
        )
    }

    fn family(self) -> Family {
        use StandardFont::*;
        match self {
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => Family::Serif,
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => Family::Sans,
            Courier | CourierBold | CourierOblique | CourierBoldOblique => Family::Mono,
        }
    }

    /// Advance width of an encoded byte in 1/1000 em. Exact for Courier and for the
    /// printable ASCII range of the upright Times and Helvetica faces, regular and
    /// bold. Italic faces use the upright widths, and the upper half of the code
    /// page is approximated.
    pub fn width_1000(self, byte: u8) -> f32 {
        match self.family() {
            Family::Mono => 600.0,
            Family::Sans if self.is_bold() => ascii_width(&HELVETICA_BOLD, byte).unwrap_or(611.0),
            Family::Sans => ascii_width(&HELVETICA, byte).unwrap_or(556.0),
            Family::Serif if self.is_bold() => ascii_width(&TIMES_BOLD, byte).unwrap_or(556.0),
            Family::Serif => ascii_width(&TIMES, byte).unwrap_or(500.0),
        }
    }

    /// Width of already encoded text at `size`
    pub fn measure(self, bytes: &[u8], size: Pt) -> Pt {
        let units: f32 = bytes.iter().map(|b| self.width_1000(*b)).sum();
        size * (units / 1000.0)
    }
}

fn ascii_width(table: &[u16; 95], byte: u8) -> Option<f32> {
    (32..=126)
        .contains(&byte)
        .then(|| table[(byte - 32) as usize] as f32)
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const TIMES: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

/// Encode a character for showing with a standard font. With `wide` the whole
/// WinAnsi code page is available, otherwise only printable ASCII. Anything that
/// cannot be encoded shows as `?`.
pub fn encode_char(ch: char, wide: bool) -> u8 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        return code as u8;
    }
    if !wide {
        return b'?';
    }
    match code {
        0xA0..=0xFF => code as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(family: &str, bold: bool, italic: bool) -> FontSpec {
        FontSpec {
            family: family.to_string(),
            size: Pt(10.0),
            bold,
            italic,
            underline: false,
        }
    }

    #[test]
    fn families_map_to_standard_fonts() {
        assert_eq!(
            StandardFont::for_spec(&spec("Times New Roman", false, false)),
            StandardFont::TimesRoman
        );
        assert_eq!(
            StandardFont::for_spec(&spec("Arial", true, false)),
            StandardFont::HelveticaBold
        );
        assert_eq!(
            StandardFont::for_spec(&spec("Courier New", true, true)),
            StandardFont::CourierBoldOblique
        );
        assert_eq!(
            StandardFont::for_spec(&spec("Garamond", false, true)),
            StandardFont::TimesItalic
        );
    }

    #[test]
    fn courier_is_monospaced() {
        let w = StandardFont::Courier.measure(b"iiMM", Pt(10.0));
        assert!((w.0 - 24.0).abs() < 1e-4);
    }

    #[test]
    fn helvetica_widths_come_from_the_table() {
        assert_eq!(StandardFont::Helvetica.width_1000(b' '), 278.0);
        assert_eq!(StandardFont::Helvetica.width_1000(b'W'), 944.0);
        assert_eq!(StandardFont::TimesRoman.width_1000(b'~'), 541.0);
    }

    #[test]
    fn bold_faces_measure_wider() {
        assert_eq!(StandardFont::HelveticaBold.width_1000(b'b'), 611.0);
        assert_eq!(StandardFont::Helvetica.width_1000(b'b'), 556.0);
        assert_eq!(StandardFont::TimesBold.width_1000(b'b'), 556.0);
        assert_eq!(StandardFont::TimesBoldItalic.width_1000(b'b'), 556.0);
        assert_eq!(StandardFont::TimesRoman.width_1000(b'b'), 500.0);

        let regular = StandardFont::Helvetica.measure(b"Bold heading", Pt(12.0));
        let bold = StandardFont::HelveticaBoldOblique.measure(b"Bold heading", Pt(12.0));
        assert!(bold.0 > regular.0);
    }

    #[test]
    fn narrow_encoding_is_ascii_only() {
        assert_eq!(encode_char('a', false), b'a');
        assert_eq!(encode_char('ä', false), b'?');
        assert_eq!(encode_char('ä', true), 0xE4);
        assert_eq!(encode_char('€', true), 0x80);
        assert_eq!(encode_char('к', true), b'?');
    }
}
