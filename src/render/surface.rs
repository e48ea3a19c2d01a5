use crate::error::{VisualError, VisualResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> VisualResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VisualError::Backend(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the draw x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Style applied to one text draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextStyle {
    pub fn validate(self) -> VisualResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VisualError::Backend(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// 2D affine transform applied to subsequent draw calls, in canvas order
/// `(a, b, c, d, e, f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl SurfaceTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Uniform scale with no translation.
    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self {
            a: factor,
            b: 0.0,
            c: 0.0,
            d: factor,
            e: 0.0,
            f: 0.0,
        }
    }
}

/// Contract implemented by any raster drawing surface.
///
/// The adapter needs only resizing in device pixels, a transform, a full
/// clear, and text fills; chart content is painted by the instance itself.
pub trait RasterSurface {
    /// Reallocates the surface at the given device-pixel dimensions.
    fn resize(&mut self, device_width: u32, device_height: u32) -> VisualResult<()>;

    fn device_width(&self) -> u32;

    fn device_height(&self) -> u32;

    fn set_transform(&mut self, transform: SurfaceTransform);

    /// Clears the given rectangle, in current user-space coordinates.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> VisualResult<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> VisualResult<()>;
}
