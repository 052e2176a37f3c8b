use std::fs;

use sha2::{Digest, Sha256};
use tempfile::TempDir;

use woodsnap_studio::catalog;
use woodsnap_studio::chrome;
use woodsnap_studio::layout::Scale;
use woodsnap_studio::{FontConfig, GenerateError, Generator, GeneratorConfig, Typeface};

fn config_in(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig { output_dir: dir.path().join("screenshots"), ..GeneratorConfig::default() }
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

// ── batch ─────────────────────────────────────────────────────────────────

#[test]
fn writes_every_device_and_screenshot() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    let mut generator = Generator::new(Typeface::bare());

    let mut seen = 0;
    let report = generator.generate(&config, |_| seen += 1).unwrap();

    assert_eq!(seen, 24);
    assert_eq!(report.files.len(), catalog::devices().len() * catalog::screenshots().len());
    for device in catalog::devices() {
        for spec in catalog::screenshots() {
            let path = config.output_dir.join(&device.name).join(format!("{}.png", spec.id));
            assert!(path.is_file(), "missing {}", path.display());
            let dims = image::image_dimensions(&path).unwrap();
            assert_eq!(dims, (device.width, device.height), "{}", path.display());
        }
    }
    assert!(report.files.iter().all(|f| f.path.starts_with(&config.output_dir)));
}

#[test]
fn identify_on_largest_device_draws_the_phone() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(&tmp);
    config.select_devices(&["iPhone_6.9"]).unwrap();
    config.select_screenshots(&["01_identify"]).unwrap();

    let report = Generator::new(Typeface::bare()).generate(&config, |_| {}).unwrap();
    assert_eq!(report.files.len(), 1);

    let file = &report.files[0];
    assert_eq!((file.width, file.height), (1320, 2868));
    let img = image::open(&file.path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1320, 2868));

    let background = catalog::screenshot("01_identify").unwrap().background;
    let screen = chrome::screen_region(1320, 2868, Scale::new(1320));
    let changed = (screen.y0..screen.y1)
        .step_by(7)
        .flat_map(|y| (screen.x0..screen.x1).step_by(7).map(move |x| (x as u32, y as u32)))
        .filter(|&(x, y)| img.get_pixel(x, y).0 != background)
        .count();
    assert!(changed > 1000, "only {changed} sampled pixels differ from the background");
}

#[test]
fn unwritable_output_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("taken");
    fs::write(&blocker, b"not a directory").unwrap();

    let mut config = GeneratorConfig { output_dir: blocker.clone(), ..GeneratorConfig::default() };
    config.select_screenshots(&["06_offline"]).unwrap();

    let err = Generator::new(Typeface::bare()).generate(&config, |_| {}).unwrap_err();
    match err {
        GenerateError::CreateDir { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("unexpected error: {other}"),
    }
}

// ── determinism ───────────────────────────────────────────────────────────

#[test]
fn same_inputs_render_identical_pixels() {
    let device = catalog::device("iPhone_5.5").unwrap();
    let mut generator = Generator::new(Typeface::bare());

    let digests: Vec<String> = catalog::screenshots()
        .iter()
        .map(|spec| {
            let first = digest(generator.render(spec, &device).as_raw());
            let second = digest(generator.render(spec, &device).as_raw());
            assert_eq!(first, second, "{} is not reproducible", spec.id);
            first
        })
        .collect();

    // Every screen looks different.
    for (i, a) in digests.iter().enumerate() {
        assert!(digests[i + 1..].iter().all(|b| a != b));
    }
}

#[test]
fn written_files_match_rendered_canvas() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(&tmp);
    config.select_devices(&["iPhone_5.5"]).unwrap();
    config.select_screenshots(&["04_compare"]).unwrap();

    let mut generator = Generator::new(Typeface::bare());
    let report = generator.generate(&config, |_| {}).unwrap();

    let decoded = image::open(&report.files[0].path).unwrap().to_rgb8();
    let rendered = generator.render(&config.screenshots[0], &config.devices[0]);
    assert_eq!(digest(decoded.as_raw()), digest(rendered.as_raw()));
}

// ── text ──────────────────────────────────────────────────────────────────

#[test]
fn captions_are_drawn_when_a_font_is_installed() {
    let Ok(typeface) = Typeface::load(&FontConfig::default()) else {
        eprintln!("no system font installed; skipping");
        return;
    };
    let device = catalog::device("iPhone_5.5").unwrap();
    let spec = catalog::screenshot("02_database").unwrap();

    let with_text = Generator::new(typeface).render(&spec, &device);
    let without = Generator::new(Typeface::bare()).render(&spec, &device);
    assert_ne!(digest(with_text.as_raw()), digest(without.as_raw()));

    // Caption band sits above the phone.
    let s = Scale::new(device.width);
    let band = (s.px(120) as u32)..(chrome::phone_body(device.width, device.height).y0 as u32);
    let differs = band
        .flat_map(|y| (0..device.width).map(move |x| (x, y)))
        .any(|(x, y)| with_text.pixel(x, y) != without.pixel(x, y));
    assert!(differs);
}
