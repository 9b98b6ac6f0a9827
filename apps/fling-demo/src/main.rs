use anyhow::Context;
use anywindow::prelude::*;
use anywindow::WindowError;
use web_time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);
const DISPLAY: IntSize = IntSize::new(1080, 1920);

/// Host that only reports what a real window manager would be asked to do.
struct LoggingHost;

impl WindowHost for LoggingHost {
    fn add_view(&mut self, params: &WindowParams) -> Result<(), WindowError> {
        log::info!("add view at {:?} ({:?} x {:?})", params.location, params.width, params.height);
        Ok(())
    }

    fn update_view(&mut self, params: &WindowParams) -> Result<(), WindowError> {
        log::info!("move view to ({}, {})", params.location.x, params.location.y);
        Ok(())
    }

    fn remove_view(&mut self) -> Result<(), WindowError> {
        log::info!("remove view");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== AnyWindow fling demo ===");
    println!("Drags the overlay left and down, releases it and lets it settle.");
    println!("Set RUST_LOG=debug to see the fling plan and exit angle.");
    println!();

    let clock = SystemClock::new();
    let mut overlay =
        AnyWindow::new(LoggingHost, DISPLAY, clock).context("failed to create overlay")?;
    overlay
        .view_size(Dimension::Exact(160), Dimension::Exact(160))
        .context("invalid overlay size")?
        .inset_screen()
        .show();

    let (mut x, mut y) = (1000.0_f32, 1150.0_f32);
    overlay.on_pointer_event(&PointerEvent::down(x, y, clock.now_millis() as i64));
    for _ in 0..12 {
        std::thread::sleep(FRAME);
        x -= 30.0;
        y += 12.0;
        overlay.on_pointer_event(&PointerEvent::moved(x, y, clock.now_millis() as i64));
    }
    overlay.on_pointer_event(&PointerEvent::up(x, y, clock.now_millis() as i64));

    let mut frames = 0;
    while overlay.tick() {
        frames += 1;
        std::thread::sleep(FRAME);
    }

    println!();
    println!(
        "Settled at ({}, {}) after {frames} frames",
        overlay.position().x,
        overlay.position().y
    );
    overlay.dismiss();
    Ok(())
}
