//! Gradient parameters
//!
//! Immutable description of the canvas and the circle drawn on it. Values are
//! validated once in [`GradientParams::new`]; the renderer trusts them after that.

use anyhow::Result;
use image::Rgba;

/// Canvas width and height of the default image
pub const DEFAULT_SIZE: u32 = 400;

/// Radius of the default circle
pub const DEFAULT_RADIUS: u32 = 200;

/// Opaque red
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Canvas size, circle geometry and center color
///
/// The color's alpha is the opacity at the very center; it falls off linearly
/// to zero at the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientParams {
    width: u32,
    height: u32,
    center: (u32, u32),
    radius: u32,
    color: Rgba<u8>,
}

impl GradientParams {
    /// Build a validated parameter set
    ///
    /// Fails when a dimension or the radius is zero, or when the center lies
    /// outside `0..=width` x `0..=height`.
    pub fn new(
        width: u32,
        height: u32,
        center: (u32, u32),
        radius: u32,
        color: Rgba<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("Canvas dimensions must be positive, got {}x{}", width, height);
        }
        if radius == 0 {
            anyhow::bail!("Radius must be positive");
        }
        let (cx, cy) = center;
        if cx > width || cy > height {
            anyhow::bail!(
                "Center ({}, {}) lies outside the {}x{} canvas",
                cx,
                cy,
                width,
                height
            );
        }

        Ok(Self {
            width,
            height,
            center,
            radius,
            color,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center(&self) -> (u32, u32) {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }
}

impl Default for GradientParams {
    /// 400x400 canvas with an opaque red circle touching all four edges
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            center: (DEFAULT_SIZE / 2, DEFAULT_SIZE / 2),
            radius: DEFAULT_RADIUS,
            color: DEFAULT_COLOR,
        }
    }
}
