use std::path::Path;

use egui::Color32;
use image::{ImageFormat, RgbImage};

use crate::document::Document;
use crate::error::{ExportError, ExportResult};
use crate::raster::RasterSurface;

/// Rasterize the document onto an opaque canvas of the given size.
pub fn render_to_image(
    document: &Document,
    width: u32,
    height: u32,
    background: Color32,
) -> ExportResult<RgbImage> {
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas { width, height });
    }

    let mut surface = RasterSurface::new(width, height, background);
    document.render(&mut surface);
    Ok(surface.into_image())
}

/// Write the image as PNG, whatever extension `path` carries.
pub fn save_png(image: &RgbImage, path: &Path) -> ExportResult<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

pub fn export_png(
    document: &Document,
    width: u32,
    height: u32,
    background: Color32,
    path: &Path,
) -> ExportResult<()> {
    let image = render_to_image(document, width, height, background)?;
    save_png(&image, path)
}
