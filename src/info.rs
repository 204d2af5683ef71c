use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata. Only populated fields are written to the PDF.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Build the info block from optional settings values. Blank values are
    /// treated the same as missing ones.
    pub fn from_settings(title: Option<&str>, author: Option<&str>) -> Info {
        let mut info = Info::new();
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            info.title(title);
        }
        if let Some(author) = author.filter(|a| !a.trim().is_empty()) {
            info.author(author);
        }
        info
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Write the document information dictionary, stamped with the current local time
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut dict = writer.document_info(refs.gen(RefType::Info));
        if let Some(title) = &self.title {
            dict.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            dict.author(TextStr(author));
        }
        dict.producer(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        dict.creation_date(pdf_date(&Local::now().fixed_offset()));
    }
}

fn pdf_date(when: &DateTime<FixedOffset>) -> PDate {
    let offset_minutes = when.offset().local_minus_utc() / 60;
    PDate::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_settings_leave_info_empty() {
        let info = Info::from_settings(Some("   "), None);
        assert_eq!(info, Info::default());
    }

    #[test]
    fn populated_settings_are_kept() {
        let info = Info::from_settings(Some("Report"), Some("Finance"));
        assert_eq!(info.title.as_deref(), Some("Report"));
        assert_eq!(info.author.as_deref(), Some("Finance"));
    }

    #[test]
    fn dates_carry_the_utc_offset() {
        let when = DateTime::parse_from_rfc3339("2024-03-09T17:05:00-03:30").unwrap();
        let mut pdf = Pdf::new();
        let mut refs = ObjectReferences::new();
        pdf.document_info(refs.gen(RefType::Info))
            .creation_date(pdf_date(&when));
        let bytes = pdf.finish();
        let needle = b"D:20240309170500-03";
        assert!(bytes.windows(needle.len()).any(|w| w == needle));
    }
}
