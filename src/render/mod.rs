mod null_surface;
mod surface;

pub use null_surface::NullSurface;
pub use surface::{Color, RasterSurface, SurfaceTransform, TextHAlign, TextStyle};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
