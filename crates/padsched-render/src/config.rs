//! Layout and font configuration
//!
//! Every pixel constant and color the renderer uses lives here. Defaults
//! reproduce the standard dispatch sheet; a TOML file may override any field:
//!
//! ```toml
//! [layout]
//! row_height = 40
//! pad_colors = [[74, 120, 206], [226, 40, 216], [73, 230, 54]]
//!
//! [fonts]
//! regular = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
//! title_size = 30.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// RGB triple
pub type Rgb = [u8; 3];

/// Number of pads groups rotate through
pub const PAD_COUNT: usize = 3;

/// Directory searched for the styled fonts when none is configured
pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts/truetype/dejavu";

/// Largest canvas width, and largest header or row pitch, a config may ask for
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    OutOfRange(String),
}

/// Pixel geometry and palette of the schedule image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the colored pad band on the left
    pub pad_band_width: u32,
    /// Width of the running-index column
    pub index_width: u32,
    /// Width of the associate-name column
    pub name_width: u32,
    /// Height of the header band
    pub header_height: u32,
    /// Height of one associate row
    pub row_height: u32,
    /// Space between rows
    pub row_gap: u32,
    pub bottom_margin: u32,
    pub right_margin: u32,
    /// Name cells stop this far from the right edge
    pub name_right_inset: u32,

    /// Header text left edge
    pub header_text_x: i32,
    /// Top of the "Launcher:" caption and the column title
    pub header_caption_y: i32,
    /// Top of the launcher's name
    pub header_name_y: i32,
    /// Column title offset from the pad band edge
    pub title_offset_x: i32,
    /// Cell text offset from the cell's top-left corner
    pub cell_text_inset: (i32, i32),
    /// Nominal line height used to center pad text
    pub pad_line_height: i32,
    /// Distance between pad text baselines
    pub pad_line_advance: i32,

    pub pad_colors: [Rgb; PAD_COUNT],
    /// Name-cell background for even and odd groups
    pub band_colors: [Rgb; 2],
    pub index_fill: Rgb,
    pub background: Rgb,
    pub header_fill: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pad_band_width: 220,
            index_width: 50,
            name_width: 700,
            header_height: 120,
            row_height: 48,
            row_gap: 2,
            bottom_margin: 40,
            right_margin: 80,
            name_right_inset: 20,
            header_text_x: 20,
            header_caption_y: 20,
            header_name_y: 62,
            title_offset_x: 80,
            cell_text_inset: (12, 10),
            pad_line_height: 28,
            pad_line_advance: 32,
            pad_colors: [[74, 120, 206], [226, 40, 216], [73, 230, 54]],
            band_colors: [[220, 230, 250], [230, 220, 240]],
            index_fill: [235, 240, 250],
            background: [245, 245, 245],
            header_fill: [255, 255, 255],
            outline: [0, 0, 0],
            text: [0, 0, 0],
        }
    }
}

impl LayoutConfig {
    /// Vertical distance from one row's top to the next
    pub fn row_pitch(&self) -> u32 {
        self.row_height.saturating_add(self.row_gap)
    }

    pub fn canvas_width(&self) -> u32 {
        self.pad_band_width
            .saturating_add(self.index_width)
            .saturating_add(self.name_width)
            .saturating_add(self.right_margin)
    }

    pub fn canvas_height(&self, rows: usize) -> u32 {
        let rows = u32::try_from(rows).unwrap_or(u32::MAX);
        self.header_height
            .saturating_add(rows.saturating_mul(self.row_pitch()))
            .saturating_add(self.bottom_margin)
    }

    /// Reject geometry no canvas can hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("canvas width", self.canvas_width()),
            ("header_height + bottom_margin", self.header_height.saturating_add(self.bottom_margin)),
            ("row_height + row_gap", self.row_pitch()),
        ];
        for (what, value) in checks {
            if value > MAX_CANVAS_SIDE {
                return Err(ConfigError::OutOfRange(format!(
                    "{} is {}, limit is {}",
                    what, value, MAX_CANVAS_SIDE
                )));
            }
        }
        Ok(())
    }

    /// 1-based pad for the group at `group_index`
    pub fn pad_number(&self, group_index: usize) -> usize {
        group_index % PAD_COUNT + 1
    }

    pub fn pad_color(&self, group_index: usize) -> Rgb {
        self.pad_colors[group_index % PAD_COUNT]
    }

    /// Name-cell background; alternates per group, not per row
    pub fn band_color(&self, group_index: usize) -> Rgb {
        self.band_colors[group_index % 2]
    }
}

/// Styled font files and sizes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub title_size: f32,
    pub body_size: f32,
    pub bold_size: f32,
    pub pad_size: f32,
    /// Pixel scale of the built-in glyphs used when the fonts cannot load
    pub fallback_scale: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_FONT_DIR)
    }
}

impl FontConfig {
    /// DejaVu Sans regular and bold from `dir`, standard sizes
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regular: dir.join("DejaVuSans.ttf"),
            bold: dir.join("DejaVuSans-Bold.ttf"),
            title_size: 34.0,
            body_size: 24.0,
            bold_size: 24.0,
            pad_size: 28.0,
            fallback_scale: 2,
        }
    }
}

/// Complete renderer configuration, as read from a TOML file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub fonts: FontConfig,
}

impl RenderConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.layout.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}
