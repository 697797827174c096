//! Radial gradient circle rendering
//!
//! [`gradient_gen::render`] turns a [`params::GradientParams`] into an RGBA canvas,
//! [`gradient_gen::save`] writes it out as PNG.

pub mod gradient_gen;
pub mod params;

pub use gradient_gen::{load, render, save, Canvas};
pub use params::GradientParams;
