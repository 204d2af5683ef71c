use crate::error::{PDFError, Result};
use crate::output::FileSystem;
use crate::page::{ImageAlignment, ImageSize, PlacedImage};
use crate::units::Pt;
use std::path::Path;

/// Width an image is placed at: its natural width, clamped to what is available.
/// Images are never scaled up.
pub fn fit_width(natural: Pt, available: Pt) -> Pt {
    if natural > available {
        available
    } else {
        natural
    }
}

/// Place an image in the body of a section whose content box is `available` wide.
///
/// The image keeps the width it has at its recorded density unless that is wider
/// than the content box, in which case it shrinks to exactly the content box width.
/// Only the width is fixed, the aspect ratio is locked.
pub fn place_image<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    available: Pt,
    alignment: ImageAlignment,
) -> Result<PlacedImage> {
    let dimensions = fs.image_dimensions(path)?;
    let natural = dimensions.natural_width();
    let width = fit_width(natural, available);
    if width < natural {
        log::debug!(
            "scaling {} from {} down to {}",
            path.display(),
            natural,
            width
        );
    }

    Ok(PlacedImage {
        path: path.to_owned(),
        dimensions,
        size: ImageSize::Width(width),
        alignment,
    })
}

/// Place an image at a fixed height, aspect locked and anchored top left. Used for
/// logos and table cells, where an empty path is as missing as a wrong one.
pub fn place_image_at_height<F: FileSystem + ?Sized>(
    fs: &F,
    what: &'static str,
    path: &Path,
    height: Pt,
) -> Result<PlacedImage> {
    if path.as_os_str().is_empty() {
        return Err(PDFError::not_found(what, path));
    }
    let dimensions = fs
        .image_dimensions(path)
        .map_err(|_| PDFError::not_found(what, path))?;

    Ok(PlacedImage {
        path: path.to_owned(),
        dimensions,
        size: ImageSize::Height(height),
        alignment: ImageAlignment::Left,
    })
}
