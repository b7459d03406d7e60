use fractal_view::{
    Engine, EngineCommand, FractalMode, GradientEdit, GradientPreview, InputEvent, PointerTracker, Rgb,
    SettingEdit, TracingUniformSink, write_ppm,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PREVIEW_WIDTH: u32 = 256;
const PREVIEW_HEIGHT: u32 = 32;
const SETTLED_FRAMES: usize = 8;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed when main runs under the test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut engine = Engine::default();
    let mut pointer = PointerTracker::default();
    let mut sink = TracingUniformSink::new();

    // A scripted session: drag, zoom in twice, click to recentre.
    let session = [
        InputEvent::Resized { width: 1024, height: 768 },
        InputEvent::PointerPressed { x: 512.0, y: 384.0 },
        InputEvent::PointerMoved { x: 480.0, y: 400.0 },
        InputEvent::PointerReleased { x: 480.0, y: 400.0 },
        InputEvent::Scrolled { y_offset: 1.0 },
        InputEvent::Scrolled { y_offset: 1.0 },
        InputEvent::PointerPressed { x: 300.0, y: 200.0 },
        InputEvent::PointerReleased { x: 300.0, y: 200.0 },
    ];
    engine.submit_all(session.into_iter().filter_map(|event| pointer.handle(event)));
    engine.submit(GradientEdit::Insert(Rgb::new(0.2, 0.4, 1.0)).into());
    engine.submit(SettingEdit::MaxIterations(512).into());

    for _ in 0..SETTLED_FRAMES {
        engine.render_frame(&mut sink);
    }
    let snapshot = engine.render_frame(&mut sink);
    info!(
        mode = %snapshot.mode,
        center_x = snapshot.center.x,
        center_y = snapshot.center.y,
        frames = snapshot.frame_count,
        temporal = snapshot.temporal,
        "session settled"
    );

    engine.submit(EngineCommand::SetMode(FractalMode::Julia));
    let snapshot = engine.render_frame(&mut sink);
    info!(
        mode = %snapshot.mode,
        temporal = snapshot.temporal,
        uniform_writes = sink.writes(),
        "switched mode"
    );

    let preview = GradientPreview::bake(engine.gradient(), PREVIEW_WIDTH)?;
    std::fs::create_dir_all("output")?;
    write_ppm(
        preview.width(),
        PREVIEW_HEIGHT,
        &preview.to_strip(PREVIEW_HEIGHT),
        "output/gradient.ppm",
    )?;
    info!(stops = engine.gradient().len(), "wrote output/gradient.ppm");

    Ok(())
}
