//! Vector-to-raster conversion for export.
//!
//! A [`Rasterizer`] takes a self-contained SVG encoded as a `data:` URI and
//! decodes it onto an opaque white square surface, yielding a PNG data URI.
//! Decoding can fail (malformed markup, unsupported content, a restricted
//! environment); that outcome is `None`, never an error, and callers fall back
//! to a text-only caption.
//!
//! [`ResvgRasterizer`] does the work in-process with `usvg`/`resvg`/`tiny-skia`.
//! The browser build also has [`crate::dom::CanvasRasterizer`], which goes
//! through an `<img>` element and an offscreen canvas.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::future::Future;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::consts::EXPORT_SIZE_PX;

const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// An encoded raster ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    data_uri: String,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Wrap raw PNG bytes.
    #[must_use]
    pub fn from_png(png: &[u8], width: u32, height: u32) -> Self {
        Self {
            data_uri: format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)),
            width,
            height,
        }
    }

    /// Wrap an already-encoded `data:image/png` URI (as produced by a canvas).
    #[must_use]
    pub fn from_data_uri(data_uri: String, width: u32, height: u32) -> Self {
        Self { data_uri, width, height }
    }

    /// The image as a `data:` URI, suitable for an `<img src>`.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Decodes an SVG data URI into a raster image.
pub trait Rasterizer {
    /// Resolve to the rendered image, or `None` if decoding failed.
    fn rasterize(&self, svg_data_uri: &str) -> impl Future<Output = Option<RasterImage>>;
}

/// Why an in-process rasterization failed. Logged, then collapsed to `None`.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("not an SVG data URI")]
    NotSvgDataUri,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),
    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// In-process rasterizer backed by `resvg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResvgRasterizer {
    /// Output width and height in pixels.
    pub size: u32,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self { size: EXPORT_SIZE_PX }
    }
}

impl ResvgRasterizer {
    /// Decode `svg_data_uri` and render it to PNG bytes on a white background.
    ///
    /// # Errors
    ///
    /// Returns a [`RasterError`] describing the failed stage.
    pub fn render_png(&self, svg_data_uri: &str) -> Result<Vec<u8>, RasterError> {
        let payload = svg_data_uri
            .strip_prefix(SVG_DATA_URI_PREFIX)
            .ok_or(RasterError::NotSvgDataUri)?;
        let svg = STANDARD.decode(payload.trim())?;

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = usvg::Tree::from_data(&svg, &options)?;

        let mut pixmap = tiny_skia::Pixmap::new(self.size, self.size)
            .ok_or(RasterError::Surface { width: self.size, height: self.size })?;
        // The chart itself is transparent; the document gets an opaque square.
        pixmap.fill(tiny_skia::Color::WHITE);

        #[allow(clippy::cast_precision_loss)]
        let target = self.size as f32;
        let tree_size = tree.size();
        let transform =
            tiny_skia::Transform::from_scale(target / tree_size.width(), target / tree_size.height());
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|err| RasterError::Encode(err.to_string()))
    }
}

impl Rasterizer for ResvgRasterizer {
    async fn rasterize(&self, svg_data_uri: &str) -> Option<RasterImage> {
        match self.render_png(svg_data_uri) {
            Ok(png) => Some(RasterImage::from_png(&png, self.size, self.size)),
            Err(err) => {
                log::warn!("radar: raster export unavailable: {err}");
                None
            }
        }
    }
}
