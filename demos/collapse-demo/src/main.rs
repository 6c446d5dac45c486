use collapse_canvas::{DrawCommand, HeadlessHost, RecordingCanvas};
use collapse_core::*;
use collapse_text::CosmicTextBackend;
use collapse_title::*;

const HEADER_HEIGHT: f32 = 256.0;
const MIN_HEIGHT: f32 = 56.0;
const INSET_TOP: f32 = 24.0;

fn summarize(canvas: &RecordingCanvas) -> String {
    canvas
        .commands
        .iter()
        .map(|c| match c {
            DrawCommand::Text {
                text,
                origin,
                style,
                transform,
            } => format!(
                "text {text:?} @({:.1}, {:.1}) {}px x{:.3}",
                origin.x, origin.y, style.size_px, transform.scale_x
            ),
            DrawCommand::Raster {
                width,
                height,
                origin,
                transform,
                ..
            } => format!(
                "raster {width}x{height} @({:.1}, {:.1}) x{:.3}",
                origin.x, origin.y, transform.scale_x
            ),
            DrawCommand::Path { points, .. } => format!("arrow {} pts", points.len()),
            DrawCommand::Rect { bounds, .. } => format!(
                "rect ({:.0}, {:.0})-({:.0}, {:.0})",
                bounds.left, bounds.top, bounds.right, bounds.bottom
            ),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let use_texture = std::env::args().any(|a| a == "--texture");
    let backend = CosmicTextBackend::new();
    let typeface = Typeface::DEFAULT;
    backend.check_typeface(&typeface)?;

    let host = HeadlessHost::new(360.0, HEADER_HEIGHT);
    let config = TitleConfig {
        text: Some("Upcoming events this weekend".into()),
        expanded: TextStyle::new(32.0, Color::WHITE),
        collapsed: TextStyle::new(20.0, Color::from_hex("#E0E0E0")),
        arrow: ArrowSpec {
            width: 16,
            height: 8,
            padding: 10,
        },
        use_scaling_texture: use_texture,
        ..TitleConfig::default()
    };
    let mut title = CollapsingTitle::from_config(config, host.clone(), Box::new(backend));
    title.set_expanded_bounds(Bounds::new(16.0, 0.0, 344.0, HEADER_HEIGHT - 28.0));
    title.set_collapsed_bounds(Bounds::new(72.0, INSET_TOP, 300.0, INSET_TOP + MIN_HEIGHT));

    let mut canvas = RecordingCanvas::new(host.size());
    for step in 0..=10 {
        let offset = -(HEADER_HEIGHT - MIN_HEIGHT - INSET_TOP) * step as f32 / 10.0;
        let fraction =
            offset::expansion_fraction_for_offset(offset, HEADER_HEIGHT, MIN_HEIGHT, INSET_TOP);
        title.set_expansion_fraction(fraction);

        canvas.clear();
        title.draw(&mut canvas);

        let frame = title.frame();
        log::info!(
            "offset {offset:>7.1} f={fraction:.2} size={:.2} top={:.2} scrim={} | {}",
            frame.text_size,
            frame.top,
            offset::scrim_visible(HEADER_HEIGHT, offset, MIN_HEIGHT, INSET_TOP),
            summarize(&canvas)
        );
    }

    log::info!("{} redraws requested", host.redraws());
    title.teardown();
    Ok(())
}
