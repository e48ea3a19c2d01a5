use crate::error::VisualResult;
use crate::render::{RasterSurface, SurfaceTransform, TextStyle};

/// Recording surface used by tests and headless adapter usage.
///
/// It validates text styles so tests catch invalid draw calls before a real
/// backend is introduced.
#[derive(Debug, Default)]
pub struct NullSurface {
    device_width: u32,
    device_height: u32,
    pub resize_count: usize,
    pub clear_count: usize,
    pub last_transform: Option<SurfaceTransform>,
    pub last_clear: Option<(f64, f64, f64, f64)>,
    pub texts: Vec<(String, f64, f64)>,
}

impl RasterSurface for NullSurface {
    fn resize(&mut self, device_width: u32, device_height: u32) -> VisualResult<()> {
        self.device_width = device_width;
        self.device_height = device_height;
        self.resize_count += 1;
        Ok(())
    }

    fn device_width(&self) -> u32 {
        self.device_width
    }

    fn device_height(&self) -> u32 {
        self.device_height
    }

    fn set_transform(&mut self, transform: SurfaceTransform) {
        self.last_transform = Some(transform);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> VisualResult<()> {
        self.clear_count += 1;
        self.last_clear = Some((x, y, width, height));
        self.texts.clear();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> VisualResult<()> {
        style.validate()?;
        self.texts.push((text.to_owned(), x, y));
        Ok(())
    }
}
