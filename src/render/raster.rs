use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::symbology::{BarPattern, CollaboratorError};

// Rasterizer
//------------------------------------------------------------------------------

pub trait Rasterizer {
    /// Draws `pattern` onto a `width` x `height` canvas.
    fn scale(
        &self,
        pattern: &BarPattern,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, CollaboratorError>;
}

/// Light modules Code128 needs on each side of the symbol to scan reliably.
pub const CODE128_QUIET_ZONE: u32 = 10;

/// Stretches every module to the widest whole number of pixels that fits, centers the
/// symbol horizontally and pads the sides with light pixels. Bars span the full height.
///
/// The canvas must leave room for `quiet_zone` light modules on each side, otherwise
/// scaling fails rather than drawing the symbol edge to edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarRasterizer {
    quiet_zone: u32,
}

impl BarRasterizer {
    pub fn with_quiet_zone(quiet_zone: u32) -> Self {
        Self { quiet_zone }
    }

    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }
}

impl Rasterizer for BarRasterizer {
    fn scale(
        &self,
        pattern: &BarPattern,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, CollaboratorError> {
        let modules = u32::try_from(pattern.width())?;
        if modules == 0 {
            return Err("empty bar pattern".into());
        }
        let total = modules + 2 * self.quiet_zone;
        if width < total || height == 0 {
            return Err(format!(
                "cannot fit {modules} modules and a {} module quiet zone into a {width}x{height} image",
                self.quiet_zone
            )
            .into());
        }

        let module_sz = width / total;
        let margin = (width - modules * module_sz) / 2;

        let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));
        for (start, len) in pattern.dark_runs() {
            let x = margin + start as u32 * module_sz;
            let rect = Rect::at(x as i32, 0).of_size(len as u32 * module_sz, height);
            draw_filled_rect_mut(&mut canvas, rect, Luma([0]));
        }
        Ok(canvas)
    }
}


// Image encoder
//------------------------------------------------------------------------------

pub trait ImageEncoder {
    fn encode_image(&self, img: &GrayImage, format: ImageFormat)
        -> Result<Vec<u8>, CollaboratorError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BufferEncoder;

impl ImageEncoder for BufferEncoder {
    fn encode_image(
        &self,
        img: &GrayImage,
        format: ImageFormat,
    ) -> Result<Vec<u8>, CollaboratorError> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format)?;
        Ok(buf.into_inner())
    }
}
