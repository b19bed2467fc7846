//! ClearVue App Store screenshot generator
//!
//! Renders the five marketing screenshots for the 6.7" iPhone listing
//! (1284×2778) with a small software rasterizer: rounded rectangles, text
//! set with swash, and a handful of iOS-looking widgets.
//!
//! # Example
//!
//! ```no_run
//! use storeshots::{GeneratorConfig, ShotKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     output_dir: "screenshots".into(),
//!     only: vec![ShotKind::Touch],
//!     ..Default::default()
//! };
//!
//! let report = storeshots::generate(&config, |shot| println!("Created {}", shot.file_name))?;
//! assert_eq!(report.shots.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub mod screens;
pub mod widgets;

pub use rendering::{FontBook, FontPaths, Screenshot};
pub use screens::ShotKind;

/// Output width of every screenshot
pub const WIDTH: u32 = 1284;
/// Output height of every screenshot
pub const HEIGHT: u32 = 2778;

/// Configuration for a generator run
///
/// The defaults reproduce the stock run: every screenshot, written to the
/// current directory, with the macOS system fonts and a fallback to any
/// installed font when those are missing.
///
/// ```
/// let cfg = storeshots::GeneratorConfig::default();
/// assert!(cfg.only.is_empty());
/// assert!(cfg.system_fallback);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the PNG files are written to (created if missing)
    pub output_dir: PathBuf,
    /// Font file for each role
    pub fonts: FontPaths,
    /// Substitute installed fonts for missing font files
    pub system_fallback: bool,
    /// Screenshots to build; empty means all of them
    pub only: Vec<ShotKind>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            fonts: FontPaths::default(),
            system_fallback: true,
            only: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// The screenshots this run builds, in output order.
    pub fn selected(&self) -> Vec<ShotKind> {
        ShotKind::ALL
            .into_iter()
            .filter(|k| self.only.is_empty() || self.only.contains(k))
            .collect()
    }
}

/// One written file
#[derive(Debug, Clone, Serialize)]
pub struct ShotRecord {
    pub kind: ShotKind,
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
    /// Hex SHA-256 of the PNG bytes
    pub sha256: String,
}

/// Summary of a generator run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub width: u32,
    pub height: u32,
    pub shots: Vec<ShotRecord>,
}

impl GenerationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(|e| Error::io(path, e))
    }
}

/// Hex SHA-256 digest, as stored in reports and golden files.
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Build one screenshot in memory.
pub fn render(kind: ShotKind, fonts: &FontBook) -> Result<Screenshot> {
    debug!("building {}", kind);
    kind.build(fonts)
}

/// Load fonts, then build and write every selected screenshot.
///
/// `on_written` is called after each file lands on disk. The first error
/// aborts the run.
pub fn generate<F>(config: &GeneratorConfig, on_written: F) -> Result<GenerationReport>
where
    F: FnMut(&ShotRecord),
{
    let fonts = FontBook::load(&config.fonts, config.system_fallback)?;
    generate_with_fonts(config, &fonts, on_written)
}

/// [`generate`] with an already loaded [`FontBook`].
pub fn generate_with_fonts<F>(
    config: &GeneratorConfig,
    fonts: &FontBook,
    mut on_written: F,
) -> Result<GenerationReport>
where
    F: FnMut(&ShotRecord),
{
    let dir = &config.output_dir;
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut shots = Vec::new();
    for kind in config.selected() {
        let shot = render(kind, fonts)?;
        let path = dir.join(&shot.file_name);
        fs::write(&path, &shot.png_data).map_err(|e| Error::io(&path, e))?;
        info!("wrote {} ({} bytes)", path.display(), shot.png_data.len());

        let record = ShotRecord {
            kind,
            file_name: shot.file_name.clone(),
            path,
            bytes: shot.png_data.len(),
            sha256: digest_hex(&shot.png_data),
        };
        on_written(&record);
        shots.push(record);
    }

    Ok(GenerationReport {
        width: WIDTH,
        height: HEIGHT,
        shots,
    })
}
