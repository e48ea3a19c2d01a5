use visual_rs::api::{render, DEVICE_PIXEL_RATIO, PLACEHOLDER_MESSAGE};
use visual_rs::core::ObjectGraph;
use visual_rs::engine::NullChartInstance;
use visual_rs::host::Viewport;
use visual_rs::render::{NullSurface, RasterSurface, SurfaceTransform};

fn instance() -> NullChartInstance {
    NullChartInstance {
        serial: 1,
        graph: ObjectGraph::new(),
        row_count: 0,
        last_resize: None,
        update_count: 0,
        render_count: 0,
    }
}

#[test]
fn surface_is_resized_to_device_pixels_and_scaled() {
    let mut surface = NullSurface::default();
    render(None::<&mut NullChartInstance>, &mut surface, Viewport::new(300.0, 150.0))
        .expect("render");

    assert_eq!(surface.device_width(), 600);
    assert_eq!(surface.device_height(), 300);
    assert_eq!(
        surface.last_transform,
        Some(SurfaceTransform::scale(DEVICE_PIXEL_RATIO))
    );
}

#[test]
fn fractional_viewports_round_device_pixels_up() {
    let mut surface = NullSurface::default();
    render(None::<&mut NullChartInstance>, &mut surface, Viewport::new(300.25, 150.25))
        .expect("render");

    assert_eq!(surface.device_width(), 601);
    assert_eq!(surface.device_height(), 301);
}

#[test]
fn missing_instance_paints_the_placeholder_diagnostic() {
    let mut surface = NullSurface::default();
    render(None::<&mut NullChartInstance>, &mut surface, Viewport::new(400.0, 200.0))
        .expect("render");

    assert_eq!(surface.clear_count, 1);
    assert_eq!(surface.last_clear, Some((0.0, 0.0, 800.0, 400.0)));
    assert_eq!(surface.texts.len(), 1);
    assert_eq!(surface.texts[0].0, PLACEHOLDER_MESSAGE);
    assert_eq!((surface.texts[0].1, surface.texts[0].2), (20.0, 20.0));
}

#[test]
fn instance_receives_logical_dimensions_then_updates_and_paints() {
    let mut surface = NullSurface::default();
    let mut chart = instance();
    render(Some(&mut chart), &mut surface, Viewport::new(640.0, 480.0)).expect("render");

    assert_eq!(chart.last_resize, Some((640.0, 480.0)));
    assert_eq!(chart.update_count, 1);
    assert_eq!(chart.render_count, 1);
    assert!(surface.texts.is_empty(), "no placeholder with a usable instance");
}

#[test]
fn invalid_viewports_are_rejected() {
    let mut surface = NullSurface::default();
    for viewport in [
        Viewport::new(0.0, 100.0),
        Viewport::new(100.0, -1.0),
        Viewport::new(f64::NAN, 100.0),
    ] {
        assert!(render(None::<&mut NullChartInstance>, &mut surface, viewport).is_err());
    }
    assert_eq!(surface.resize_count, 0, "surface untouched on invalid viewport");
}
