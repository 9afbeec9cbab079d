use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::{Args, DemoConfig};
use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::renderer::Renderer;
use game::{Scene, SceneTextures};

/// Frames between window title refreshes
const TITLE_REFRESH_FRAMES: u64 = 30;

fn log_run_summary(game_loop: &GameLoop) {
    info!(
        "Ran {} frames in {:.1}s ({:.0} fps at exit)",
        game_loop.frame_count(),
        game_loop.elapsed_secs(),
        game_loop.fps()
    );
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = DemoConfig::from_args(&args);
    config.validate()?;

    if args.write_config {
        config.save(&args.config)?;
        info!("Wrote config to {}", args.config.display());
        return Ok(());
    }

    info!("Starting {}...", config.window.title);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let loader = AssetLoader::new(&config.assets.root);
    info!("Loading sprites from {}", loader.base_path().display());
    let textures = SceneTextures::load(&mut renderer, &loader, &config);
    info!("{} textures loaded", renderer.texture_count());

    let mut scene = Scene::new(&config);
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();
    let title = config.window.title.clone();

    info!("Controls:");
    for action in Action::ALL {
        info!(
            "  {:<24} {}",
            input.config().describe(action),
            action.description()
        );
    }

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    log_run_summary(&game_loop);
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::RedrawRequested => {
                    let dt = game_loop.begin_frame();
                    let frame = input.sample();

                    if frame.just_pressed(Action::Quit) {
                        info!("Quit requested, shutting down...");
                        log_run_summary(&game_loop);
                        elwt.exit();
                        return;
                    }
                    if frame.just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }
                    if !game_loop.is_paused() {
                        scene.update(&frame, dt);
                    }

                    if game_loop.frame_count() % TITLE_REFRESH_FRAMES == 0 {
                        let paused = if game_loop.is_paused() { " [paused]" } else { "" };
                        window.set_title(&format!(
                            "{} | {:.0} fps | {}{}",
                            title,
                            game_loop.fps(),
                            scene.status(),
                            paused
                        ));
                    }

                    match renderer.render(&scene.draw_list(&textures)) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("GPU out of memory, shutting down");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("Dropped frame: {:?}", e),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
