mod cli;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_triangles, Scene};

use crate::cli::Args;
use crate::config::ViewerConfig;
use crate::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    log::info!("Starting Glint Viewer");

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    args.apply_overrides(&mut config);

    // A scene that fails to load is fatal
    let mut scene = match &args.scene {
        Some(path) => load_triangles(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => Scene::demo(),
    };
    if let Some(light) = config.light {
        scene.set_light(light);
    }

    let mut session = Session::new(scene, &config);
    log::info!(
        "Scene '{}': {} spheres, {} triangles, eye at {}",
        session.scene().name,
        session.scene().sphere_count(),
        session.scene().triangle_count(),
        session.camera().position
    );
    session.render_frame()?;
    log::info!("Frame written to {}", config.output.display());

    if args.batch {
        return Ok(());
    }

    log::info!("Reading commands from stdin");
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())?;

    log::info!(
        "Session ended after {} frames (selected primitive {})",
        session.frames_rendered(),
        session.selected()
    );
    Ok(())
}
