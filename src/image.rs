//! Reading images from disk: their pixel size and density for placement, and their
//! pixels for embedding.

use crate::error::{PDFError, Result};
use crate::units::{In, Pt};
use image::{ColorType, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::Filter;
use std::io::Cursor;
use std::path::Path;

/// Density assumed when an image does not record one.
pub const DEFAULT_DPI: f32 = 96.0;

/// Pixel size of an image along with the vertical density it was saved with.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ImageDimensions {
    pub width_px: u32,
    pub height_px: u32,
    /// Dots per inch along the vertical axis
    pub vertical_dpi: f32,
}

impl ImageDimensions {
    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        self.width_px as f32 / self.height_px.max(1) as f32
    }

    /// The width the image has when printed at its recorded density. The vertical
    /// density is used for both axes.
    pub fn natural_width(&self) -> Pt {
        In(self.width_px as f32 / self.vertical_dpi).into()
    }

    /// Read the dimensions of an encoded PNG or JPEG image.
    pub fn from_bytes(data: &[u8]) -> std::result::Result<ImageDimensions, image::ImageError> {
        let (width_px, height_px) = image::io::Reader::new(Cursor::new(data))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(ImageDimensions {
            width_px,
            height_px,
            vertical_dpi: vertical_density(data).unwrap_or(DEFAULT_DPI),
        })
    }
}

/// Read an image's dimensions from disk. Anything that is not a readable image,
/// missing files and undecodable files alike, is reported as not found.
pub fn probe<P: AsRef<Path>>(path: P) -> Result<ImageDimensions> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|_| PDFError::not_found("image", path))?;
    ImageDimensions::from_bytes(&data).map_err(|e| {
        log::debug!("{} is not a readable image: {e}", path.display());
        PDFError::not_found("image", path)
    })
}

/// The vertical density recorded in the image, if any.
fn vertical_density(data: &[u8]) -> Option<f32> {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        png_density(data)
    } else if data.starts_with(&[0xFF, 0xD8]) {
        jfif_density(data)
    } else {
        None
    }
}

/// Walk the PNG chunks looking for `pHYs`. Only densities given per metre are
/// usable, a unit of 0 only records the aspect ratio.
fn png_density(data: &[u8]) -> Option<f32> {
    let mut i = 8; // signature
    while i + 8 <= data.len() {
        let len = u32::from_be_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]) as usize;
        let kind = &data[i + 4..i + 8];
        let body = data.get(i + 8..i + 8 + len)?;
        match kind {
            b"pHYs" if len >= 9 => {
                let per_metre_y = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
                return (body[8] == 1 && per_metre_y > 0).then(|| per_metre_y as f32 * 0.0254);
            }
            b"IDAT" | b"IEND" => return None,
            _ => {}
        }
        i += 12 + len;
    }
    None
}

/// Scan the JPEG markers for a JFIF APP0 segment.
fn jfif_density(data: &[u8]) -> Option<f32> {
    let mut i = 2; // skip SOI marker (FF D8)
    while i + 3 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];
        let seg_len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if marker == 0xE0 {
            // length(2) "JFIF\0"(5) version(2) units(1) x density(2) y density(2)
            let seg = data.get(i + 4..i + 2 + seg_len)?;
            if seg.len() >= 12 && seg.starts_with(b"JFIF\0") {
                let units = seg[7];
                let y = u16::from_be_bytes([seg[10], seg[11]]) as f32;
                return match units {
                    1 if y > 0.0 => Some(y),
                    2 if y > 0.0 => Some(y * 2.54),
                    _ => None,
                };
            }
        }
        if marker == 0xDA {
            // image data starts, no more metadata
            return None;
        }
        i += 2 + seg_len;
    }
    None
}

/// Image data encoded for embedding as a PDF image XObject.
pub(crate) struct EncodedImage {
    pub filter: Filter,
    pub bytes: Vec<u8>,
    pub mask: Option<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

/// Load an image from disk and encode it. RGB JPEGs are embedded as they are,
/// everything else is decoded and deflated with an optional alpha mask.
pub(crate) fn encode_from_disk(path: &Path) -> Result<EncodedImage> {
    let data = std::fs::read(path).map_err(|_| PDFError::not_found("image", path))?;
    let format = image::guess_format(&data)?;
    let image = image::load_from_memory_with_format(&data, format)?;
    let (width, height) = image.dimensions();

    if let (image::ImageFormat::Jpeg, ColorType::Rgb8) = (format, image.color()) {
        return Ok(EncodedImage {
            filter: Filter::DctDecode,
            bytes: data,
            mask: None,
            width,
            height,
        });
    }

    let level = CompressionLevel::DefaultLevel as u8;
    let mask = image.color().has_alpha().then(|| {
        let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
        compress_to_vec_zlib(&alphas, level)
    });
    let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

    Ok(EncodedImage {
        filter: Filter::FlateDecode,
        bytes,
        mask,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |_, _| image::Rgb([10, 20, 30]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    fn crc32(data: &[u8]) -> u32 {
        let mut crc = 0xFFFF_FFFFu32;
        for byte in data {
            crc ^= *byte as u32;
            for _ in 0..8 {
                crc = if crc & 1 == 1 {
                    (crc >> 1) ^ 0xEDB8_8320
                } else {
                    crc >> 1
                };
            }
        }
        !crc
    }

    /// Insert a pHYs chunk right after IHDR (signature 8 + IHDR 25 bytes)
    fn with_phys(png: Vec<u8>, per_metre: u32) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(&per_metre.to_be_bytes());
        body.extend_from_slice(&per_metre.to_be_bytes());
        body.push(1);
        let mut chunk = Vec::new();
        chunk.extend_from_slice(&(body.len() as u32).to_be_bytes());
        chunk.extend_from_slice(b"pHYs");
        chunk.extend_from_slice(&body);
        chunk.extend_from_slice(&crc32(&chunk[4..]).to_be_bytes());
        let mut out = png[..33].to_vec();
        out.extend_from_slice(&chunk);
        out.extend_from_slice(&png[33..]);
        out
    }

    /// SOI, a JFIF APP0 segment with the given density, then SOS
    fn jfif(units: u8, density: u16) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        data.extend_from_slice(b"JFIF\0");
        data.extend_from_slice(&[1, 1, units]);
        data.extend_from_slice(&density.to_be_bytes());
        data.extend_from_slice(&density.to_be_bytes());
        data.extend_from_slice(&[0, 0]);
        data.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02]);
        data
    }

    #[test]
    fn jfif_density_is_read_per_inch_and_per_cm() {
        assert_eq!(vertical_density(&jfif(1, 300)), Some(300.0));
        let per_cm = vertical_density(&jfif(2, 118)).unwrap();
        assert!((per_cm - 299.72).abs() < 0.01);
        assert_eq!(vertical_density(&jfif(0, 1)), None);

        let dims = ImageDimensions {
            width_px: 300,
            height_px: 10,
            vertical_dpi: vertical_density(&jfif(1, 300)).unwrap_or(DEFAULT_DPI),
        };
        assert!((dims.natural_width().0 - 72.0).abs() < 1e-3);
    }

    #[test]
    fn jfif_scan_skips_other_segments() {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x04, 0xAB, 0xCD];
        data.extend_from_slice(&jfif(1, 150)[2..]);
        assert_eq!(jfif_density(&data), Some(150.0));
        // no APP0 before the scan starts
        assert_eq!(jfif_density(&[0xFF, 0xD8, 0xFF, 0xDA, 0x00, 0x02]), None);
    }

    #[test]
    fn missing_density_defaults_to_96_dpi() {
        let dims = ImageDimensions::from_bytes(&png(96, 48)).unwrap();
        assert_eq!((dims.width_px, dims.height_px), (96, 48));
        assert_eq!(dims.vertical_dpi, DEFAULT_DPI);
        assert!((dims.natural_width().0 - 72.0).abs() < 1e-3);
        assert_eq!(dims.aspect_ratio(), 2.0);
    }

    #[test]
    fn phys_chunk_sets_density() {
        // 11811 px/m is 300 dpi (rounded)
        let data = with_phys(png(300, 10), 11811);
        assert!((png_density(&data).unwrap() - 300.0).abs() < 0.1);
    }

    #[test]
    fn probing_a_missing_file_is_not_found() {
        let err = probe("/definitely/not/here.png").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::NotFound);
    }
}
