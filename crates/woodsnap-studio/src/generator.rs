//! Batch orchestration: devices × screenshots → PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use woodsnap_engine::paint::Color;
use woodsnap_engine::render::{Canvas, Renderer};
use woodsnap_engine::scene::DrawList;

use crate::catalog::{self, DeviceProfile, ScreenshotSpec};
use crate::chrome;
use crate::error::GenerateError;
use crate::layout::Scale;
use crate::painter::Painter;
use crate::scenes;
use crate::typeface::{FontConfig, Typeface};

/// What to render and where.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory; images land in `<output_dir>/<device>/<id>.png`.
    pub output_dir: PathBuf,
    pub fonts: FontConfig,
    pub devices: Vec<DeviceProfile>,
    pub screenshots: Vec<ScreenshotSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("screenshots"),
            fonts: FontConfig::default(),
            devices: catalog::devices(),
            screenshots: catalog::screenshots(),
        }
    }
}

impl GeneratorConfig {
    /// Restricts the batch to the named devices, in the given order.
    /// An empty list keeps the current selection.
    pub fn select_devices<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), GenerateError> {
        if names.is_empty() {
            return Ok(());
        }
        self.devices = names
            .iter()
            .map(|name| catalog::device(name.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Restricts the batch to the given screenshot ids, in the given order.
    /// An empty list keeps the current selection.
    pub fn select_screenshots<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), GenerateError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.screenshots = ids
            .iter()
            .map(|id| catalog::screenshot(id.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Number of images a run will write.
    pub fn image_count(&self) -> usize {
        self.devices.len() * self.screenshots.len()
    }
}

/// One image written by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub device: String,
    pub id: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Summary of a finished batch.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// Renders screenshots and writes them to disk.
pub struct Generator {
    typeface: Typeface,
    renderer: Renderer,
}

impl Generator {
    pub fn new(typeface: Typeface) -> Self {
        Self { typeface, renderer: Renderer::new() }
    }

    /// Loads the fonts named by `fonts` and builds a generator around them.
    pub fn from_fonts(fonts: &FontConfig) -> Result<Self, GenerateError> {
        Ok(Self::new(Typeface::load(fonts)?))
    }

    /// Renders one screenshot for one device.
    pub fn render(&mut self, spec: &ScreenshotSpec, device: &DeviceProfile) -> Canvas {
        let (w, h) = (device.width, device.height);
        let s = Scale::new(w);
        let dark = spec.is_dark();

        let mut draw_list = DrawList::new();
        {
            let mut painter = Painter::new(&mut draw_list, &self.typeface);
            chrome::vignette(&mut painter, w, h, dark);
            let screen = chrome::phone_frame(&mut painter, w, h, s);
            scenes::draw(spec.scene, &mut painter, screen, s, Color::from_rgb(spec.accent));
            chrome::caption(&mut painter, w, &spec.caption, dark, s);
        }

        let mut canvas = Canvas::new(w, h, spec.background);
        self.renderer.render(&mut canvas, &mut draw_list, self.typeface.font_system());
        canvas
    }

    /// `<dir>/<device>/<id>.png`.
    pub fn output_path(dir: &Path, device: &DeviceProfile, spec: &ScreenshotSpec) -> PathBuf {
        dir.join(&device.name).join(format!("{}.png", spec.id))
    }

    /// Renders and writes every device × screenshot pair of `config`.
    ///
    /// `on_file` runs after each image is on disk. The first filesystem error
    /// aborts the batch.
    pub fn generate(
        &mut self,
        config: &GeneratorConfig,
        mut on_file: impl FnMut(&GeneratedFile),
    ) -> Result<GenerationReport, GenerateError> {
        create_dir(&config.output_dir)?;

        let mut files = Vec::with_capacity(config.image_count());
        for device in &config.devices {
            let dir = config.output_dir.join(&device.name);
            create_dir(&dir)?;

            for spec in &config.screenshots {
                let canvas = self.render(spec, device);
                let path = Self::output_path(&config.output_dir, device, spec);
                canvas
                    .save_png(&path)
                    .map_err(|source| GenerateError::WriteImage { path: path.clone(), source })?;
                log::debug!(
                    "wrote {} ({}x{}, scene {})",
                    path.display(),
                    canvas.width(),
                    canvas.height(),
                    spec.scene
                );

                let file = GeneratedFile {
                    device: device.name.clone(),
                    id: spec.id.clone(),
                    path,
                    width: canvas.width(),
                    height: canvas.height(),
                };
                on_file(&file);
                files.push(file);
            }
        }

        log::info!("generated {} screenshots in {}", files.len(), config.output_dir.display());
        Ok(GenerationReport { output_dir: config.output_dir.clone(), files })
    }
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir { path: path.to_path_buf(), source })
}
