//! Progress ring icon rendering.
//!
//! Draws a clockwise pie sector from 12 o'clock and a thin circular outline
//! on a transparent canvas, then encodes the result as PNG.

use crate::{ClockError, CoreResult, ProgressIconStyle, icon::wedge};

use std::{f32::consts::TAU, panic::Location};

use error_location::ErrorLocation;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, codecs::png::PngEncoder};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{instrument, trace};

/// Renders progress icons for a fixed [`ProgressIconStyle`].
#[derive(Debug, Clone, Default)]
pub struct ProgressIconRenderer {
    style: ProgressIconStyle,
}

impl ProgressIconRenderer {
    /// Create a renderer for `style`.
    pub fn new(style: ProgressIconStyle) -> Self {
        Self { style }
    }

    /// The style this renderer draws with.
    pub fn style(&self) -> &ProgressIconStyle {
        &self.style
    }

    /// Render the icon for `fraction` as straight-alpha RGBA pixels.
    ///
    /// `fraction` is clamped to `[0, 1]`; NaN renders as 0.
    #[track_caller]
    #[instrument(skip(self), level = "trace")]
    pub fn render_rgba(&self, fraction: f64) -> CoreResult<RgbaImage> {
        let size = self.style.size;
        let fraction = clamp_fraction(fraction);

        let mut pixmap = Pixmap::new(size, size).ok_or_else(|| ClockError::CanvasAllocation {
            width: size,
            height: size,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let [r, g, b, a] = self.style.color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let center = self.style.center();
        let radius = self.style.radius();
        let sweep = TAU * fraction as f32;

        if let Some(sector) = wedge::wedge_path(center, center, radius, sweep)? {
            pixmap.fill_path(
                &sector,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }

        let outline = PathBuilder::from_circle(center, center, radius).ok_or_else(|| {
            ClockError::PathConstruction {
                reason: format!("Invalid outline radius: {}", radius),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let stroke = Stroke {
            width: self.style.stroke_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&outline, &paint, &stroke, Transform::identity(), None);

        // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        trace!(fraction = fraction, size = size, "Progress icon rasterized");

        RgbaImage::from_raw(size, size, rgba).ok_or_else(|| ClockError::CanvasAllocation {
            width: size,
            height: size,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Render the icon for `fraction` and encode it as PNG.
    #[track_caller]
    pub fn render_png(&self, fraction: f64) -> CoreResult<Vec<u8>> {
        let image = self.render_rgba(fraction)?;

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| ClockError::ImageEncoding {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(bytes)
    }
}

/// Render a PNG progress icon for `fraction` with the default style.
#[track_caller]
pub fn render_progress_icon(fraction: f64) -> CoreResult<Vec<u8>> {
    ProgressIconRenderer::default().render_png(fraction)
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
