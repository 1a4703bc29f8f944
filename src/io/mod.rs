/// Wavefront animation export
pub mod animation;
/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults, palette and grid limits
pub mod configuration;
/// Error types
pub mod error;
/// Bitmap font for cell labels
pub mod glyphs;
/// Raster rendering and PNG export
pub mod image;
/// Progress display across runs
pub mod progress;
/// Interactive grid-size prompt
pub mod prompt;
/// Plain-text rendering
pub mod text;
