mod raster;
mod symbology;

pub use raster::{BarRasterizer, BufferEncoder, ImageEncoder, Rasterizer, CODE128_QUIET_ZONE};
pub use symbology::{BarPattern, Code128Symbology, CollaboratorError, Symbology};

use image::ImageFormat;
use tracing::debug;

use crate::codec::{validate, Barcode};
use crate::common::{BarcodeError, BarcodeResult};

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 100;

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, format: ImageFormat::Png }
    }
}

// Renderer
//------------------------------------------------------------------------------

/// Turns a valid code into image bytes through three collaborators: a [`Symbology`] for
/// the bar pattern, a [`Rasterizer`] for the fixed-size canvas and an [`ImageEncoder`] for
/// the byte stream. Holds no state besides its options, so one renderer can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Renderer<S = Code128Symbology, R = BarRasterizer, E = BufferEncoder> {
    symbology: S,
    rasterizer: R,
    encoder: E,
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_collaborators(
            Code128Symbology,
            BarRasterizer::with_quiet_zone(CODE128_QUIET_ZONE),
            BufferEncoder,
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R, E> Renderer<S, R, E> {
    pub fn with_collaborators(symbology: S, rasterizer: R, encoder: E) -> Self {
        Self { symbology, rasterizer, encoder, options: RenderOptions::default() }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    pub fn format(&mut self, format: ImageFormat) -> &mut Self {
        self.options.format = format;
        self
    }
}

impl<S: Symbology, R: Rasterizer, E: ImageEncoder> Renderer<S, R, E> {
    /// Renders `code` into an image of the configured size and format.
    ///
    /// # Errors
    ///
    /// - [`BarcodeError::InvalidBarcode`] if `code` does not [`validate`]
    /// - [`BarcodeError::EncodingFailed`] if the symbology rejects `code` or the pattern does
    ///   not fit the configured size
    /// - [`BarcodeError::SerializationFailed`] if the image cannot be encoded
    pub fn render(&self, code: &str) -> BarcodeResult<Vec<u8>> {
        if !validate(code) {
            return Err(BarcodeError::InvalidBarcode(code.to_string()));
        }

        let RenderOptions { width, height, format } = self.options;

        debug!(code, "Encoding bars...");
        let pattern = self
            .symbology
            .encode_to_bars(code)
            .map_err(|e| BarcodeError::EncodingFailed(e.to_string()))?;

        debug!(modules = pattern.width(), width, height, "Scaling bars...");
        let img = self
            .rasterizer
            .scale(&pattern, width, height)
            .map_err(|e| BarcodeError::EncodingFailed(format!("failed to scale barcode: {e}")))?;

        debug!(?format, "Serializing image...");
        let bytes = self
            .encoder
            .encode_image(&img, format)
            .map_err(|e| BarcodeError::SerializationFailed(e.to_string()))?;

        debug!(code, bytes = bytes.len(), "Barcode rendered");
        Ok(bytes)
    }

    pub fn render_barcode(&self, code: &Barcode) -> BarcodeResult<Vec<u8>> {
        self.render(code.as_str())
    }
}
