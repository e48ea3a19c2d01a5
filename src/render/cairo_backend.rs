use cairo::{Context, Format, ImageSurface, Matrix, Operator};
use pango::FontDescription;

use crate::error::{VisualError, VisualResult};
use crate::render::{Color, RasterSurface, SurfaceTransform, TextHAlign, TextStyle};

/// Cairo + Pango + PangoCairo offscreen surface backend.
///
/// Draws into an ARGB image surface sized in device pixels; text runs
/// through Pango layouts so sizing and alignment match the layout engine.
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
}

impl CairoSurface {
    pub fn new(device_width: u32, device_height: u32) -> VisualResult<Self> {
        let (surface, context) = create_surface(device_width, device_height)?;
        Ok(Self { surface, context })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image_surface(&self) -> &ImageSurface {
        &self.surface
    }
}

fn create_surface(device_width: u32, device_height: u32) -> VisualResult<(ImageSurface, Context)> {
    if device_width == 0 || device_height == 0 {
        return Err(VisualError::Backend(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    let width = i32::try_from(device_width)
        .map_err(|err| map_backend_error("surface width exceeds cairo limits", err))?;
    let height = i32::try_from(device_height)
        .map_err(|err| map_backend_error("surface height exceeds cairo limits", err))?;

    let surface = ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
    let context = Context::new(&surface)
        .map_err(|err| map_backend_error("failed to create cairo context", err))?;
    Ok((surface, context))
}

fn map_backend_error(message: &str, err: impl std::fmt::Display) -> VisualError {
    VisualError::Backend(format!("{message}: {err}"))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

impl RasterSurface for CairoSurface {
    fn resize(&mut self, device_width: u32, device_height: u32) -> VisualResult<()> {
        let (surface, context) = create_surface(device_width, device_height)?;
        self.surface = surface;
        self.context = context;
        Ok(())
    }

    fn device_width(&self) -> u32 {
        self.surface.width().max(0) as u32
    }

    fn device_height(&self) -> u32 {
        self.surface.height().max(0) as u32
    }

    fn set_transform(&mut self, transform: SurfaceTransform) {
        self.context.set_matrix(Matrix::new(
            transform.a,
            transform.b,
            transform.c,
            transform.d,
            transform.e,
            transform.f,
        ));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> VisualResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context.set_operator(Operator::Clear);
        self.context.rectangle(x, y, width, height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> VisualResult<()> {
        style.validate()?;

        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", style.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match style.h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };

        apply_color(&self.context, style.color);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }
}
