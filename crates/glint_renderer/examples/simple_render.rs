//! Simple ray tracer example.
//!
//! Renders the demo scene (or a triangle file given as the first argument)
//! and saves it as a PPM image.

use glint_renderer::{color_to_rgba, render, Camera, ImageBuffer, RenderConfig, Scene};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Build the scene
    let start = std::time::Instant::now();
    let scene = match std::env::args().nth(1) {
        Some(path) => glint_core::load_triangles(&path).expect("Failed to load triangle file"),
        None => Scene::demo(),
    };
    println!("Scene with {} primitives built in {:?}", scene.len(), start.elapsed());

    let camera = Camera::new().with_resolution(700, 700);
    let config = RenderConfig::default();

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgba = color_to_rgba(image.get(x, y));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
