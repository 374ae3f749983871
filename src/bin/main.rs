use dsfolio_core::{
    app::{FolioApp, NavConfig, TickResult},
    catalog::Catalog,
};
use dsfolio_render::{DsRenderer, ScreenPair, about_text_metrics, render_frame};
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use log::info;

use config::HostConfig;
use console::{ConsoleWindow, WindowState};
use keyboard::KeyboardInput;

#[path = "main/config.rs"]
mod config;
#[path = "main/console.rs"]
mod console;
#[path = "main/keyboard.rs"]
mod keyboard;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("boot: dsfolio starting");

    let config = HostConfig::from_env();
    info!(
        "config: scale={} frame_ms={}",
        config.scale, config.frame_ms
    );

    let catalog = Catalog::PORTFOLIO;
    let mut app = FolioApp::new(catalog, NavConfig::default(), about_text_metrics());
    let mut renderer = DsRenderer::default();
    let mut input = KeyboardInput::new();
    if let Some(script) = config.script.as_deref() {
        info!("input: replaying startup script {:?}", script);
        input.queue_script(script);
    }

    let mut console = ConsoleWindow::open(catalog.headline, config.scale);
    // Attached only once the window exists.
    let mut surfaces: Option<Box<ScreenPair>> = Some(Box::new(ScreenPair::new()));
    info!(
        "console: window open, {} projects, {} contacts",
        catalog.project_count(),
        catalog.contact_count()
    );

    let boot = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(config.frame_ms));
    let mut frames_painted = 0u64;

    loop {
        if console.pump_events(&mut input) == WindowState::Closed {
            break;
        }

        app.drain_input(&mut input);

        if app.tick() == TickResult::RenderRequested {
            let now_ms = boot.elapsed().as_millis();
            if render_frame(&app, &mut renderer, surfaces.as_deref_mut(), now_ms)
                && let Some(pair) = surfaces.as_deref_mut()
            {
                console.present(pair);
                frames_painted = frames_painted.saturating_add(1);
            }
        }

        ticker.next().await;
    }

    info!(
        "console: window closed after {}ms, frames_painted={}",
        boot.elapsed().as_millis(),
        frames_painted
    );
    std::process::exit(0);
}
