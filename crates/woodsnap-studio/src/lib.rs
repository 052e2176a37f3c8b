//! WoodSnap studio: procedural App Store screenshots for the WoodSnap app.
//!
//! Every image is composed from the same parts: a vignette-tinted background,
//! a phone frame, one of six mock app screens and a centered two-line caption.
//! Layout is expressed in design units for a 1320 px wide canvas and mapped to
//! each device with [`layout::scale`].
//!
//! ```no_run
//! use woodsnap_studio::{Generator, GeneratorConfig};
//!
//! # fn main() -> Result<(), woodsnap_studio::GenerateError> {
//! let config = GeneratorConfig::default();
//! let mut generator = Generator::from_fonts(&config.fonts)?;
//! let report = generator.generate(&config, |file| println!("{}", file.path.display()))?;
//! assert_eq!(report.files.len(), 24);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod chrome;
pub mod error;
pub mod generator;
pub mod grain;
pub mod layout;
pub mod painter;
pub mod scenes;
pub mod style;
pub mod typeface;

pub use catalog::{DeviceProfile, SceneKind, ScreenshotSpec};
pub use error::GenerateError;
pub use generator::{GeneratedFile, GenerationReport, Generator, GeneratorConfig};
pub use typeface::{Face, FontConfig, Typeface};
