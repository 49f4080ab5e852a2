//! Text drawing capability
//!
//! Styled text needs TrueType files that may not exist on the host. The
//! renderer picks a [`TextRenderer`] once, at construction: the styled one
//! when both fonts load, otherwise the built-in 8x8 bitmap glyphs. Drawing
//! itself never fails.

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use padsched_core::RenderError;
use tracing::{debug, warn};

use crate::config::FontConfig;

/// Text roles on the schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Header captions and launcher name
    Title,
    /// Associate names
    Body,
    /// Row index
    Bold,
    /// Pad label and time
    Pad,
}

/// Draws and measures text on an RGB canvas
pub trait TextRenderer {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Width and height of `text` in pixels
    fn measure(&self, text: &str, style: TextStyle) -> (u32, u32);

    /// Draw `text` with its top-left corner at (x, y); off-canvas pixels are clipped
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, style: TextStyle, color: Rgb<u8>);
}

/// TrueType text via ab_glyph
pub struct StyledTextRenderer {
    regular: FontVec,
    bold: FontVec,
    title_size: f32,
    body_size: f32,
    bold_size: f32,
    pad_size: f32,
}

impl StyledTextRenderer {
    pub fn load(config: &FontConfig) -> Result<Self, RenderError> {
        Ok(Self {
            regular: load_font(&config.regular)?,
            bold: load_font(&config.bold)?,
            title_size: config.title_size,
            body_size: config.body_size,
            bold_size: config.bold_size,
            pad_size: config.pad_size,
        })
    }

    fn face(&self, style: TextStyle) -> (&FontVec, PxScale) {
        match style {
            TextStyle::Title => (&self.bold, PxScale::from(self.title_size)),
            TextStyle::Body => (&self.regular, PxScale::from(self.body_size)),
            TextStyle::Bold => (&self.bold, PxScale::from(self.bold_size)),
            TextStyle::Pad => (&self.regular, PxScale::from(self.pad_size)),
        }
    }
}

fn load_font(path: &std::path::Path) -> Result<FontVec, RenderError> {
    let bytes = std::fs::read(path).map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))?;
    FontVec::try_from_vec(bytes).map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))
}

impl TextRenderer for StyledTextRenderer {
    fn name(&self) -> &'static str {
        "styled"
    }

    fn measure(&self, text: &str, style: TextStyle) -> (u32, u32) {
        let (font, scale) = self.face(style);
        text_size(scale, font, text)
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, style: TextStyle, color: Rgb<u8>) {
        let (font, scale) = self.face(style);
        draw_text_mut(canvas, color, x, y, scale, font, text);
    }
}

/// Unstyled bitmap glyphs; every style looks the same
#[derive(Clone, Copy, Debug)]
pub struct DefaultTextRenderer {
    scale: u32,
}

const GLYPH_SIZE: u32 = 8;

impl DefaultTextRenderer {
    pub fn new(scale: u32) -> Self {
        Self { scale: scale.max(1) }
    }

    fn glyph(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8])
    }
}

impl Default for DefaultTextRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl TextRenderer for DefaultTextRenderer {
    fn name(&self) -> &'static str {
        "default"
    }

    fn measure(&self, text: &str, _style: TextStyle) -> (u32, u32) {
        let cell = GLYPH_SIZE * self.scale;
        (text.chars().count() as u32 * cell, cell)
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, _style: TextStyle, color: Rgb<u8>) {
        let (width, height) = (canvas.width() as i64, canvas.height() as i64);
        let scale = self.scale as i64;
        let cell = GLYPH_SIZE as i64 * scale;

        for (i, c) in text.chars().enumerate() {
            let origin_x = x as i64 + i as i64 * cell;
            for (row, bits) in Self::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_SIZE as i64 {
                    // bit 0 is the leftmost pixel
                    if bits & (1u8 << col) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = origin_x + col * scale + dx;
                            let py = y as i64 + row as i64 * scale + dy;
                            if (0..width).contains(&px) && (0..height).contains(&py) {
                                canvas.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Styled text when the configured fonts load, built-in glyphs otherwise
pub fn select_text_renderer(config: &FontConfig) -> Box<dyn TextRenderer> {
    match StyledTextRenderer::load(config) {
        Ok(styled) => {
            debug!(regular = %config.regular.display(), "loaded styled fonts");
            Box::new(styled)
        }
        Err(e) => {
            warn!(error = %e, "styled fonts unavailable, using default glyphs");
            Box::new(DefaultTextRenderer::new(config.fallback_scale))
        }
    }
}
