use crate::analyzer::PageParams;
use crate::error::{PanelError, Result};
use crate::geometry::ReadingDirection;
use crate::views::ViewerOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct PageToolConfig {
    pub input: PathBuf,
    /// Precomputed foreground mask (8-bit gray, non-zero is foreground) used
    /// instead of thresholding `input`.
    #[serde(default)]
    pub mask: Option<PathBuf>,
    #[serde(default)]
    pub direction: ReadingDirection,
    #[serde(default)]
    pub params: PageParams,
    #[serde(default)]
    pub viewer: ViewerOptions,
    pub output: PageOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct PageOutputConfig {
    /// Base directory for relative output paths.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    pub report_json: PathBuf,
    /// Where to save the binarized page, if anywhere.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}

impl PageOutputConfig {
    pub fn report_path(&self) -> PathBuf {
        self.resolve(&self.report_json)
    }

    pub fn mask_path(&self) -> Option<PathBuf> {
        self.mask_image.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) => resolve_path(dir, path),
            None => path.to_path_buf(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<PageToolConfig> {
    let contents = fs::read_to_string(path).map_err(|e| PanelError::io(path, e))?;
    parse_config(&contents)
        .map_err(|e| PanelError::Config(format!("{}: {e}", path.display())))
}

fn parse_config(contents: &str) -> std::result::Result<PageToolConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
