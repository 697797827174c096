use anyhow::Result;
use gradient_circle::{render, save, GradientParams};
use std::path::Path;

const OUTPUT_FILE: &str = "red_gradient_circle.png";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let canvas = render(&GradientParams::default());
    save(&canvas, Path::new(OUTPUT_FILE))?;

    println!("✓ Saved gradient circle to '{}'", OUTPUT_FILE);
    Ok(())
}
