use crate::params::GradientParams;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// RGBA8 pixel grid produced by [`render`]
pub type Canvas = RgbaImage;

/// Render the radial gradient circle described by `params`
///
/// Pixels within the radius get the center color with an alpha that falls off
/// linearly with distance; everything else stays fully transparent black.
pub fn render(params: &GradientParams) -> Canvas {
    debug!("Rendering gradient circle: {:?}", params);

    let (cx, cy) = params.center();
    let (cx, cy) = (f64::from(cx), f64::from(cy));
    let radius = f64::from(params.radius());
    let Rgba([red, green, blue, center_alpha]) = params.color();

    let mut canvas = Canvas::new(params.width(), params.height());

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = f64::from(x) - cx;
        let dy = f64::from(y) - cy;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance <= radius {
            let alpha = falloff_alpha(center_alpha, distance / radius);
            *pixel = Rgba([red, green, blue, alpha]);
        }
    }

    canvas
}

/// Alpha at normalized distance `t` in `[0, 1]`, truncated toward zero
fn falloff_alpha(center_alpha: u8, t: f64) -> u8 {
    (f64::from(center_alpha) * (1.0 - t)) as u8
}

/// Encode `canvas` as an RGBA PNG at `path`, replacing any existing file
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(canvas.as_raw(), &mut out_file, canvas.width(), canvas.height())
        .with_context(|| format!("Failed to encode PNG to {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}x{} PNG to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

/// Decode the image at `path` into an RGBA8 canvas
pub fn load(path: &Path) -> Result<Canvas> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;
    debug!("Loaded {}x{} image from {}", image.width(), image.height(), path.display());

    Ok(image.to_rgba8())
}

fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_COLOR;

    #[test]
    fn test_falloff_alpha_truncates() {
        assert_eq!(falloff_alpha(255, 0.0), 255);
        assert_eq!(falloff_alpha(255, 0.5), 127);
        assert_eq!(falloff_alpha(255, 1.0), 0);
        // 255 * 0.999 = 254.745
        assert_eq!(falloff_alpha(255, 0.001), 254);
    }

    #[test]
    fn test_falloff_alpha_scales_with_center_alpha() {
        assert_eq!(falloff_alpha(100, 0.0), 100);
        assert_eq!(falloff_alpha(100, 0.25), 75);
        assert_eq!(falloff_alpha(0, 0.0), 0);
    }

    #[test]
    fn test_render_dimensions() {
        let params = GradientParams::new(64, 32, (10, 10), 5, DEFAULT_COLOR).unwrap();
        let canvas = render(&params);
        assert_eq!(canvas.width(), 64);
        assert_eq!(canvas.height(), 32);
    }

    #[test]
    fn test_render_small_circle() {
        let params = GradientParams::new(10, 10, (5, 5), 2, DEFAULT_COLOR).unwrap();
        let canvas = render(&params);

        assert_eq!(*canvas.get_pixel(5, 5), Rgba([255, 0, 0, 255]));
        // distance 1, t = 0.5
        assert_eq!(*canvas.get_pixel(6, 5), Rgba([255, 0, 0, 127]));
        // distance exactly the radius
        assert_eq!(*canvas.get_pixel(5, 3), Rgba([255, 0, 0, 0]));
        // distance sqrt(8) > 2
        assert_eq!(*canvas.get_pixel(7, 7), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_render_center_on_corner() {
        let params = GradientParams::new(8, 8, (0, 0), 4, Rgba([0, 128, 255, 200])).unwrap();
        let canvas = render(&params);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 128, 255, 200]));
        // distance 2, t = 0.5, 200 * 0.5 = 100
        assert_eq!(*canvas.get_pixel(2, 0), Rgba([0, 128, 255, 100]));
        assert_eq!(*canvas.get_pixel(7, 7), Rgba([0, 0, 0, 0]));
    }
}
