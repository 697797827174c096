use anyhow::Result;
use gradient_circle::{load, render, GradientParams};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "red_gradient_circle.png".to_string()),
    );

    let actual = load(&path)?;
    let params = GradientParams::default();
    let expected = render(&params);

    println!("Checking gradient circle in: {}", path.display());
    println!("Image dimensions: {}x{}", actual.width(), actual.height());

    if actual.dimensions() != expected.dimensions() {
        anyhow::bail!(
            "Expected {}x{}, found {}x{}",
            expected.width(),
            expected.height(),
            actual.width(),
            actual.height()
        );
    }

    let (cx, cy) = params.center();
    let radius = params.radius();
    let samples = [
        ("center", cx, cy),
        ("half radius", cx, cy - radius / 2),
        ("edge", cx - radius, cy),
        ("corner", 0, 0),
    ];

    println!("\nSampled pixels:");
    for (label, x, y) in samples {
        let p = actual.get_pixel(x, y);
        let e = expected.get_pixel(x, y);
        let mark = if p == e { "✓" } else { "✗" };
        println!(
            "  {} {:<12} ({:>3}, {:>3}) RGBA: [{}, {}, {}, {}] expected [{}, {}, {}, {}]",
            mark, label, x, y, p[0], p[1], p[2], p[3], e[0], e[1], e[2], e[3]
        );
    }

    let mismatched = actual
        .pixels()
        .zip(expected.pixels())
        .filter(|(p, e)| p != e)
        .count();

    println!("\nPixel analysis:");
    println!(
        "  {} out of {} pixels differ from the expected gradient",
        mismatched,
        actual.width() * actual.height()
    );

    if mismatched == 0 {
        println!("✓ Gradient circle matches!");
        Ok(())
    } else {
        anyhow::bail!("Gradient circle does not match the expected rendering")
    }
}
