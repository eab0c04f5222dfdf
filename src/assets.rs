//! Asset manifest and loader collaborator
//!
//! The game refers to assets by logical name ("bird-up", "music_easy", ...).
//! A host-supplied `AssetLoader` resolves and loads them; the game only needs
//! to know whether loading worked and, for images, how big they are (layout
//! and collision geometry depend on sprite sizes).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;

use crate::consts::INTRO_FRAME_COUNT;
use crate::error::{AssetError, StartupError};
use crate::settings::Settings;

/// Asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Font,
    Sound,
    Music,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Font => write!(f, "font"),
            AssetKind::Sound => write!(f, "sound"),
            AssetKind::Music => write!(f, "music"),
        }
    }
}

/// Logical name → file name
const FILES: &[(&str, &str)] = &[
    ("background", "bg.png"),
    ("bird-up", "birdup.png"),
    ("bird-down", "birddown.png"),
    ("pipe-down", "pipedown.png"),
    ("pipe-up", "pipeup.png"),
    ("font", "arial.ttf"),
    ("flap", "flap.wav"),
    ("score", "score.wav"),
    ("dead", "dead.wav"),
    ("btn-new-game", "mainnewgame.png"),
    ("btn-settings", "settings.png"),
    ("btn-leaderboard", "leaderboard.png"),
    ("btn-exit", "mainexit.png"),
    ("btn-difficulty", "difficulty.png"),
    ("sound-on", "soundon.png"),
    ("sound-off", "soundoff.png"),
    ("music-on", "musicon.png"),
    ("music-off", "musicoff.png"),
    ("btn-back", "backbutton.png"),
    ("btn-easy", "easy.png"),
    ("btn-hard", "hard.png"),
    ("btn-resume", "pauseresume.png"),
    ("btn-restart", "pauserestart.png"),
    ("btn-pause-main", "pausemain.png"),
    ("btn-pause-exit", "pauseexit.png"),
    ("btn-again", "overagain.png"),
    ("btn-over-main", "overmain.png"),
    ("btn-over-exit", "overexit.png"),
    ("intro-music", "animationsound.mp3"),
    ("music_easy", "music_easy.mp3"),
    ("music_hard", "music_hard.mp3"),
];

/// Logical name of intro animation frame `index` (0-based)
pub fn intro_frame_name(index: usize) -> String {
    format!("intro-{}", index + 1)
}

/// File name for a logical asset name
pub fn file_name(name: &str) -> Option<String> {
    if let Some(n) = name.strip_prefix("intro-").and_then(|n| n.parse::<usize>().ok()) {
        return Some(format!("intro{n}.gif"));
    }
    FILES
        .iter()
        .find(|(logical, _)| *logical == name)
        .map(|(_, file)| file.to_string())
}

/// Image name for the sound toggle button
pub fn sound_button(sound_on: bool) -> &'static str {
    if sound_on { "sound-on" } else { "sound-off" }
}

/// Image name for the music toggle button
pub fn music_button(music_on: bool) -> &'static str {
    if music_on { "music-on" } else { "music-off" }
}

/// One entry of the startup manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    pub kind: AssetKind,
    pub name: String,
    /// Failure aborts startup when set; otherwise it is logged and skipped
    pub required: bool,
}

impl AssetSpec {
    pub fn required(kind: AssetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(kind: AssetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            required: false,
        }
    }
}

/// Everything loaded at startup, given the current toggle states
pub fn manifest(settings: &Settings) -> Vec<AssetSpec> {
    use AssetKind::*;

    let mut specs: Vec<AssetSpec> = [
        "background",
        "bird-up",
        "bird-down",
        "pipe-down",
        "pipe-up",
    ]
    .into_iter()
    .map(|name| AssetSpec::required(Image, name))
    .collect();

    specs.push(AssetSpec::required(Font, "font"));

    for i in 0..INTRO_FRAME_COUNT {
        specs.push(AssetSpec::optional(Image, intro_frame_name(i)));
    }

    for name in ["flap", "score", "dead"] {
        specs.push(AssetSpec::required(Sound, name));
    }

    let buttons = [
        "btn-new-game",
        "btn-settings",
        "btn-leaderboard",
        "btn-exit",
        "btn-difficulty",
        sound_button(settings.sound_on),
        music_button(settings.music_on),
        "btn-back",
        "btn-easy",
        "btn-hard",
        "btn-resume",
        "btn-restart",
        "btn-pause-main",
        "btn-pause-exit",
        "btn-again",
        "btn-over-main",
        "btn-over-exit",
    ];
    specs.extend(buttons.into_iter().map(|name| AssetSpec::required(Image, name)));

    for name in ["intro-music", "music_easy", "music_hard"] {
        specs.push(AssetSpec::optional(Music, name));
    }

    specs
}

/// What a successful load reports back
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssetInfo {
    /// Pixel size, for images
    pub size: Option<Vec2>,
}

/// Asset backend supplied by the host
pub trait AssetLoader {
    fn load(&mut self, spec: &AssetSpec) -> Result<AssetInfo, AssetError>;
}

/// Loads assets from a directory, checking files exist and reading image
/// headers for their dimensions
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        let file = file_name(name).unwrap_or_else(|| name.to_string());
        self.root.join(file)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&mut self, spec: &AssetSpec) -> Result<AssetInfo, AssetError> {
        let path = self.path_for(&spec.name);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(AssetError::Missing {
                    kind: spec.kind,
                    name: spec.name.clone(),
                    path,
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AssetError::Missing {
                    kind: spec.kind,
                    name: spec.name.clone(),
                    path,
                });
            }
            Err(source) => {
                return Err(AssetError::Io {
                    kind: spec.kind,
                    name: spec.name.clone(),
                    source,
                });
            }
        }

        if spec.kind != AssetKind::Image {
            return Ok(AssetInfo::default());
        }

        let (w, h) = image::image_dimensions(&path).map_err(|source| AssetError::Image {
            name: spec.name.clone(),
            source,
        })?;
        Ok(AssetInfo {
            size: Some(Vec2::new(w as f32, h as f32)),
        })
    }
}

/// In-memory loader with fixed image sizes (tests and asset-less hosts)
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    sizes: HashMap<String, Vec2>,
    missing: HashSet<String>,
    default_size: Vec2,
}

impl StaticAssets {
    /// Every image reports `default_size` unless overridden
    pub fn new(default_size: Vec2) -> Self {
        Self {
            default_size,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, name: &str, size: Vec2) -> Self {
        self.sizes.insert(name.to_string(), size);
        self
    }

    /// Make loading `name` fail
    pub fn without(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }
}

impl AssetLoader for StaticAssets {
    fn load(&mut self, spec: &AssetSpec) -> Result<AssetInfo, AssetError> {
        if self.missing.contains(&spec.name) {
            return Err(AssetError::Missing {
                kind: spec.kind,
                name: spec.name.clone(),
                path: PathBuf::from(file_name(&spec.name).unwrap_or_default()),
            });
        }
        let size = (spec.kind == AssetKind::Image)
            .then(|| self.sizes.get(&spec.name).copied().unwrap_or(self.default_size));
        Ok(AssetInfo { size })
    }
}

/// Record of what loaded successfully
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    loaded: HashSet<String>,
    image_sizes: HashMap<String, Vec2>,
}

impl AssetCatalog {
    pub fn insert(&mut self, name: &str, info: AssetInfo) {
        self.loaded.insert(name.to_string());
        if let Some(size) = info.size {
            self.image_sizes.insert(name.to_string(), size);
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    pub fn image_size(&self, name: &str) -> Option<Vec2> {
        self.image_sizes.get(name).copied()
    }

    /// Load every manifest entry. Required failures abort; optional ones are
    /// logged and skipped.
    pub fn load_all(
        loader: &mut dyn AssetLoader,
        settings: &Settings,
    ) -> Result<Self, StartupError> {
        let mut catalog = Self::default();
        for spec in manifest(settings) {
            match loader.load(&spec) {
                Ok(info) => catalog.insert(&spec.name, info),
                Err(e) if spec.required => {
                    log::error!("{}", e);
                    return Err(StartupError::Asset(e));
                }
                Err(e) => log::warn!("Skipping optional asset: {}", e),
            }
        }
        log::info!("Loaded {} assets", catalog.loaded.len());
        Ok(catalog)
    }

    /// Re-request a single image (toggle buttons). On failure the previous
    /// entry is kept.
    pub fn reload_image(&mut self, loader: &mut dyn AssetLoader, name: &str) -> bool {
        match loader.load(&AssetSpec::required(AssetKind::Image, name)) {
            Ok(info) => {
                self.insert(name, info);
                true
            }
            Err(e) => {
                log::warn!("Failed to reload {}: {}", name, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(file_name("bird-up").as_deref(), Some("birdup.png"));
        assert_eq!(file_name("sound-off").as_deref(), Some("soundoff.png"));
        assert_eq!(file_name(&intro_frame_name(0)).as_deref(), Some("intro1.gif"));
        assert_eq!(file_name(&intro_frame_name(18)).as_deref(), Some("intro19.gif"));
        assert_eq!(file_name("nope"), None);
    }

    #[test]
    fn test_manifest_follows_toggles() {
        let on = manifest(&Settings::default());
        assert!(on.iter().any(|s| s.name == "sound-on"));
        assert!(!on.iter().any(|s| s.name == "sound-off"));

        let off = Settings {
            sound_on: false,
            music_on: false,
            ..Settings::default()
        };
        let specs = manifest(&off);
        assert!(specs.iter().any(|s| s.name == "sound-off"));
        assert!(specs.iter().any(|s| s.name == "music-off"));
    }

    #[test]
    fn test_intro_frames_are_optional() {
        let specs = manifest(&Settings::default());
        let frames: Vec<_> = specs.iter().filter(|s| s.name.starts_with("intro-")).collect();
        // 19 frames plus the intro music
        assert_eq!(frames.len(), INTRO_FRAME_COUNT + 1);
        assert!(frames.iter().all(|s| !s.required));
    }

    #[test]
    fn test_required_failure_aborts() {
        let mut loader = StaticAssets::new(Vec2::new(10.0, 10.0)).without("pipe-up");
        let err = AssetCatalog::load_all(&mut loader, &Settings::default()).unwrap_err();
        let StartupError::Asset(e) = err;
        assert_eq!(e.name(), "pipe-up");
    }

    #[test]
    fn test_optional_failure_is_skipped() {
        let mut loader = StaticAssets::new(Vec2::new(10.0, 10.0))
            .without("intro-3")
            .without("intro-music")
            .with_size("bird-up", Vec2::new(34.0, 24.0));
        let catalog = AssetCatalog::load_all(&mut loader, &Settings::default()).expect("loads");
        assert!(!catalog.is_loaded("intro-3"));
        assert!(catalog.is_loaded("intro-4"));
        assert!(catalog.is_loaded("font"));
        assert_eq!(catalog.image_size("font"), None);
        assert_eq!(catalog.image_size("bird-up"), Some(Vec2::new(34.0, 24.0)));
    }

    #[test]
    fn test_fs_loader() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut loader = FsAssetLoader::new(dir.path());
        assert_eq!(loader.root(), dir.path());
        let flap = AssetSpec::required(AssetKind::Sound, "flap");
        assert!(matches!(loader.load(&flap), Err(AssetError::Missing { .. })));

        fs::write(dir.path().join("flap.wav"), b"RIFF").expect("write");
        assert_eq!(loader.load(&flap).expect("found"), AssetInfo::default());

        let img = image::RgbaImage::new(7, 5);
        img.save(dir.path().join("birdup.png")).expect("save png");
        let info = loader
            .load(&AssetSpec::required(AssetKind::Image, "bird-up"))
            .expect("image");
        assert_eq!(info.size, Some(Vec2::new(7.0, 5.0)));

        fs::write(dir.path().join("birddown.png"), b"not a png").expect("write");
        assert!(matches!(
            loader.load(&AssetSpec::required(AssetKind::Image, "bird-down")),
            Err(AssetError::Image { .. })
        ));
    }
}
