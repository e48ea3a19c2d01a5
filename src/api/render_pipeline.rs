//! Stateless resize → clear → draw sequence, run once per update.

use tracing::trace;

use crate::engine::ChartInstance;
use crate::error::{VisualError, VisualResult};
use crate::host::Viewport;
use crate::render::{Color, RasterSurface, SurfaceTransform, TextHAlign, TextStyle};

/// Fixed device pixel ratio. Querying the real ratio throws inside the host
/// sandbox, so the surface is always scaled by this constant.
pub const DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Diagnostic painted when no usable chart instance exists.
pub const PLACEHOLDER_MESSAGE: &str = "Dataset incomplete. Please specify all data fields.";

const PLACEHOLDER_INSET_X: f64 = 20.0;
const PLACEHOLDER_INSET_Y: f64 = 20.0;
const PLACEHOLDER_FONT_SIZE_PX: f64 = 24.0;

/// Resizes `surface` to the viewport scaled by [`DEVICE_PIXEL_RATIO`],
/// clears it fully, then paints either the chart instance or the placeholder
/// diagnostic.
pub fn render<I: ChartInstance>(
    instance: Option<&mut I>,
    surface: &mut dyn RasterSurface,
    viewport: Viewport,
) -> VisualResult<()> {
    if !viewport.is_valid() {
        return Err(VisualError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let device_width = (viewport.width * DEVICE_PIXEL_RATIO).ceil() as u32;
    let device_height = (viewport.height * DEVICE_PIXEL_RATIO).ceil() as u32;
    surface.resize(device_width, device_height)?;
    surface.set_transform(SurfaceTransform::scale(DEVICE_PIXEL_RATIO));
    surface.clear_rect(
        0.0,
        0.0,
        f64::from(device_width),
        f64::from(device_height),
    )?;

    match instance {
        None => {
            trace!("no usable chart instance, painting placeholder diagnostic");
            let style = TextStyle {
                font_size_px: PLACEHOLDER_FONT_SIZE_PX,
                color: Color::rgb(0.0, 0.0, 0.0),
                h_align: TextHAlign::Left,
            };
            surface.fill_text(
                PLACEHOLDER_MESSAGE,
                PLACEHOLDER_INSET_X,
                PLACEHOLDER_INSET_Y,
                &style,
            )?;
        }
        Some(instance) => {
            instance.resize(viewport.width, viewport.height);
            instance.update()?;
            instance.render(surface)?;
        }
    }
    Ok(())
}
