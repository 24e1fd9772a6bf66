//! Host shell: decode a picked image, replay a recorded gesture script
//! through an edit session, and persist the flattened composite.
//!
//! The editing core never touches a file - everything with a failure mode
//! lives out here.

#![warn(clippy::pedantic)]

pub mod io;
pub mod script;

use anyhow::Context;

use crate::io::ImageSink;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(image_path), Some(script_path)) = (args.next(), args.next()) else {
        eprintln!("usage: inkover <image> <script.json> [out-dir]");
        std::process::exit(2);
    };
    let out_dir = args.next();

    let source = io::load_image(std::path::Path::new(&image_path))
        .with_context(|| format!("opening {image_path}"))?;
    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading {script_path}"))?;
    let script = script::EditScript::from_json(&script)
        .with_context(|| format!("parsing {script_path}"))?;

    let mut session = inkover_core::EditSession::new();
    session.set_annotation_color(script.color.to_color().context("annotation color")?);
    session.set_image(source);
    session.apply_all(script.events());
    log::info!(
        "replayed {} events: {} strokes, scale {}, rotation {}°",
        script.events.len(),
        session.strokes().len(),
        session.transform().scale,
        session.transform().rotation,
    );

    let raster = session.flatten().context("no image to flatten")?;

    let sink = match out_dir {
        Some(dir) => io::DirectorySink::new(dir),
        None => io::DirectorySink::pictures()?,
    };
    let name = io::edited_filename(chrono::Local::now().naive_local());
    let path = sink.save(&raster, &name)?;
    println!("{}", path.display());
    Ok(())
}
