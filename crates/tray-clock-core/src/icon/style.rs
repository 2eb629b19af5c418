/// Geometry and color of the progress icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIconStyle {
    /// Width and height of the square canvas in pixels.
    pub size: u32,
    /// Distance between the canvas edge and the circle.
    pub inset: f32,
    /// Width of the circular outline.
    pub stroke_width: f32,
    /// Accent color as straight (non-premultiplied) RGBA.
    pub color: [u8; 4],
}

impl ProgressIconStyle {
    /// Canvas size of the default style.
    pub const DEFAULT_SIZE: u32 = 64;
    const DEFAULT_INSET: f32 = 4.0;
    const DEFAULT_STROKE_WIDTH: f32 = 4.0;
    const ACCENT_GREEN: [u8; 4] = [0, 255, 0, 255];

    /// Default style on a canvas of `size` pixels.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Center coordinate on both axes.
    pub fn center(&self) -> f32 {
        self.size as f32 / 2.0
    }

    /// Radius shared by the filled sector and the outline.
    pub fn radius(&self) -> f32 {
        self.center() - self.inset
    }
}

impl Default for ProgressIconStyle {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            inset: Self::DEFAULT_INSET,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            color: Self::ACCENT_GREEN,
        }
    }
}
