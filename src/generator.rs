//! Writes rendered mockups to disk

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::catalog::{SlideKind, SLIDE_COUNT};
use crate::error::GenerateError;
use crate::palette::Palette;
use crate::slides;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "img/svg_mockups";

/// One file produced by a run
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenSlide {
    pub index: u32,
    pub label: String,
    pub filename: String,
    pub path: PathBuf,
    /// Size of the written document
    pub bytes: usize,
}

/// Summary of a full run, in index order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub written: Vec<WrittenSlide>,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|w| w.bytes).sum()
    }
}

/// Renders slides and writes them into an output directory
///
/// Existing files with the same name are overwritten. The directory is
/// created on first write if it does not exist.
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
    palette: Palette,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl Generator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            palette: Palette::default(),
        }
    }

    /// Draw with a custom palette instead of the default
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Draw with the palette stored in a TOML file
    pub fn with_palette_file(self, path: &Path) -> Result<Self, GenerateError> {
        let palette = Palette::from_file(path)?;
        match &palette.name {
            Some(name) => info!("loaded palette '{}' from {}", name, path.display()),
            None => info!("loaded palette from {}", path.display()),
        }
        Ok(self.with_palette(palette))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Write every mapped slide, calling `on_written` after each file
    ///
    /// Stops at the first file-system error; files written before it stay
    /// on disk.
    pub fn run<F>(&self, mut on_written: F) -> Result<GenerationReport, GenerateError>
    where
        F: FnMut(&WrittenSlide),
    {
        self.ensure_output_dir()?;

        let mut report = GenerationReport::default();
        for index in 1..=SLIDE_COUNT {
            let written = self.write_kind(SlideKind::resolve(index))?;
            on_written(&written);
            report.written.push(written);
        }
        Ok(report)
    }

    /// Write a single slide; unmapped indices get the generic placeholder
    pub fn write_one(&self, index: u32) -> Result<WrittenSlide, GenerateError> {
        let kind = SlideKind::resolve(index);
        if let SlideKind::Unmapped(_) = kind {
            warn!("slide {} has no category, writing placeholder", index);
        }
        self.ensure_output_dir()?;
        self.write_kind(kind)
    }

    fn ensure_output_dir(&self) -> Result<(), GenerateError> {
        if self.output_dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.output_dir).map_err(|source| GenerateError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;
        info!("created output directory {}", self.output_dir.display());
        Ok(())
    }

    fn write_kind(&self, kind: SlideKind) -> Result<WrittenSlide, GenerateError> {
        let svg = slides::render_kind(kind, &self.palette);
        let filename = kind.filename();
        let path = self.output_dir.join(&filename);

        fs::write(&path, &svg).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(
            "rendered slide {:03} ({}) to {} bytes",
            kind.index(),
            kind.label(),
            svg.len()
        );

        Ok(WrittenSlide {
            index: kind.index(),
            label: kind.label(),
            filename,
            path,
            bytes: svg.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteError;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_every_slide_in_order() {
        let dir = TempDir::new().unwrap();
        let generator = Generator::new(dir.path());
        let mut seen = vec![];

        let report = generator.run(|w| seen.push(w.index)).unwrap();

        assert_eq!(report.count(), 32);
        assert_eq!(seen, (1..=32).collect::<Vec<_>>());
        assert_eq!(
            report.written[0].filename,
            "apple_template_001_hero_title.svg"
        );
        assert!(report.written.iter().all(|w| w.path.is_file()));
    }

    #[test]
    fn test_run_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("img").join("svg_mockups");
        Generator::new(&nested).run(|_| {}).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_bytes_match_file_size() {
        let dir = TempDir::new().unwrap();
        let written = Generator::new(dir.path()).write_one(9).unwrap();
        let on_disk = fs::metadata(&written.path).unwrap().len() as usize;
        assert_eq!(written.bytes, on_disk);
        assert_eq!(written.label, "timeline");
    }

    #[test]
    fn test_write_one_unmapped_uses_placeholder() {
        let dir = TempDir::new().unwrap();
        let written = Generator::new(dir.path()).write_one(33).unwrap();
        assert_eq!(written.filename, "apple_template_033_slide_33.svg");
        let content = fs::read_to_string(written.path).unwrap();
        assert!(content.contains("Slide 033"));
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("apple_template_001_hero_title.svg");
        fs::write(&target, "stale").unwrap();
        Generator::new(dir.path()).write_one(1).unwrap();
        assert!(fs::read_to_string(target).unwrap().starts_with("<?xml"));
    }

    #[test]
    fn test_output_dir_blocked_by_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();
        let err = Generator::new(&blocker).run(|_| {}).unwrap_err();
        assert!(matches!(err, GenerateError::CreateDir { .. }));
    }

    #[test]
    fn test_total_bytes_sums_every_file() {
        let dir = TempDir::new().unwrap();
        let report = Generator::new(dir.path()).run(|_| {}).unwrap();
        let on_disk: usize = report
            .written
            .iter()
            .map(|w| fs::metadata(&w.path).unwrap().len() as usize)
            .sum();
        assert_eq!(report.total_bytes(), on_disk);
    }

    #[test]
    fn test_palette_file_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palette.toml");
        fs::write(&path, "[colors]\nsurface = \"#222222\"\n").unwrap();
        let generator = Generator::new(dir.path()).with_palette_file(&path).unwrap();
        assert_eq!(generator.palette().colors.surface, "#222222");
    }

    #[test]
    fn test_bad_palette_file_is_palette_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palette.toml");
        fs::write(&path, "[colors]\ntext = \"#fff; } rect { display: none\"\n").unwrap();
        let err = Generator::new(dir.path())
            .with_palette_file(&path)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Palette(PaletteError::InvalidColor { token: "text", .. })
        ));

        let missing = Generator::new(dir.path())
            .with_palette_file(&dir.path().join("missing.toml"))
            .unwrap_err();
        assert!(matches!(missing, GenerateError::Palette(PaletteError::Io(_))));
    }

    #[test]
    fn test_custom_palette_reaches_files() {
        let dir = TempDir::new().unwrap();
        let palette: Palette = "[colors]\nbackground = \"#101010\"".parse().unwrap();
        let written = Generator::new(dir.path())
            .with_palette(palette)
            .write_one(2)
            .unwrap();
        let content = fs::read_to_string(written.path).unwrap();
        assert!(content.contains(r##"<rect width="1920" height="1080" fill="#101010"/>"##));
    }
}
