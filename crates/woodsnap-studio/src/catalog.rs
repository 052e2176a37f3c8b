//! The fixed set of device sizes and screenshots that make up one batch.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// Target pixel resolution for one App Store size class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Directory name under the output root, e.g. `iPhone_6.9`.
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl DeviceProfile {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self { name: name.into(), width, height }
    }
}

/// The six mock app screens.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneKind {
    CameraScan,
    DatabaseGrid,
    DetailCard,
    CompareMode,
    HistoryView,
    OfflineMode,
}

impl SceneKind {
    pub const ALL: [SceneKind; 6] = [
        SceneKind::CameraScan,
        SceneKind::DatabaseGrid,
        SceneKind::DetailCard,
        SceneKind::CompareMode,
        SceneKind::HistoryView,
        SceneKind::OfflineMode,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SceneKind::CameraScan => "camera_scan",
            SceneKind::DatabaseGrid => "database_grid",
            SceneKind::DetailCard => "detail_card",
            SceneKind::CompareMode => "compare_mode",
            SceneKind::HistoryView => "history_view",
            SceneKind::OfflineMode => "offline_mode",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| GenerateError::UnknownScene(s.to_string()))
    }
}

/// Content and styling of one screenshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotSpec {
    /// File stem of the output PNG, e.g. `01_identify`.
    pub id: String,
    /// Caption text; `\n` separates lines.
    pub caption: String,
    pub background: [u8; 3],
    pub accent: [u8; 3],
    pub scene: SceneKind,
}

impl ScreenshotSpec {
    /// Builds a spec from a scene name, failing on names outside [`SceneKind::ALL`].
    pub fn new(
        id: impl Into<String>,
        caption: impl Into<String>,
        background: [u8; 3],
        accent: [u8; 3],
        scene: &str,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            id: id.into(),
            caption: caption.into(),
            background,
            accent,
            scene: scene.parse()?,
        })
    }

    /// Dark backgrounds get white captions and a darkening vignette.
    pub fn is_dark(&self) -> bool {
        self.background.iter().map(|&c| c as u32).sum::<u32>() < 400
    }
}

/// All device profiles, largest first.
pub fn devices() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::new("iPhone_6.9", 1320, 2868),
        DeviceProfile::new("iPhone_6.7", 1290, 2796),
        DeviceProfile::new("iPhone_6.5", 1284, 2778),
        DeviceProfile::new("iPhone_5.5", 1242, 2208),
    ]
}

/// All screenshots, in App Store order.
pub fn screenshots() -> Vec<ScreenshotSpec> {
    let spec = |id: &str, caption: &str, background: [u8; 3], accent: [u8; 3], scene: SceneKind| ScreenshotSpec {
        id: id.to_string(),
        caption: caption.to_string(),
        background,
        accent,
        scene,
    };
    vec![
        spec("01_identify", "Snap. Identify.\nInstantly.", [42, 32, 24], [196, 142, 72], SceneKind::CameraScan),
        spec("02_database", "200+ Wood Species\nDatabase", [245, 237, 224], [139, 90, 43], SceneKind::DatabaseGrid),
        spec("03_details", "Know Every\nDetail", [56, 40, 28], [214, 170, 105], SceneKind::DetailCard),
        spec("04_compare", "Compare\nSide by Side", [238, 228, 212], [120, 76, 38], SceneKind::CompareMode),
        spec("05_history", "Track Your\nScans", [48, 36, 26], [186, 132, 62], SceneKind::HistoryView),
        spec("06_offline", "Works Offline\nToo", [235, 225, 210], [100, 65, 30], SceneKind::OfflineMode),
    ]
}

/// Looks up a device profile by name.
pub fn device(name: &str) -> Result<DeviceProfile, GenerateError> {
    devices()
        .into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| GenerateError::UnknownDevice(name.to_string()))
}

/// Looks up a screenshot spec by id.
pub fn screenshot(id: &str) -> Result<ScreenshotSpec, GenerateError> {
    screenshots()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| GenerateError::UnknownScreenshot(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(devices().len(), 4);
        assert_eq!(screenshots().len(), 6);
    }

    #[test]
    fn every_scene_is_used_once() {
        let used: Vec<SceneKind> = screenshots().iter().map(|s| s.scene).collect();
        assert_eq!(used, SceneKind::ALL.to_vec());
    }

    #[test]
    fn scene_names_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.name().parse::<SceneKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_scene_is_a_lookup_error() {
        let err = ScreenshotSpec::new("x", "y", [0, 0, 0], [0, 0, 0], "sawmill").unwrap_err();
        assert!(matches!(err, GenerateError::UnknownScene(ref n) if n == "sawmill"));
    }

    #[test]
    fn darkness_threshold() {
        let dark: Vec<bool> = screenshots().iter().map(ScreenshotSpec::is_dark).collect();
        assert_eq!(dark, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn lookups() {
        assert_eq!(device("iPhone_5.5").unwrap().height, 2208);
        assert_eq!(screenshot("04_compare").unwrap().scene, SceneKind::CompareMode);
        assert!(matches!(device("iPad"), Err(GenerateError::UnknownDevice(_))));
        assert!(matches!(screenshot("99_x"), Err(GenerateError::UnknownScreenshot(_))));
    }
}
