//! # padsched-render
//!
//! Raster rendering of a day's pad dispatch schedule.
//!
//! This crate provides:
//! - Layout and palette configuration ([`config`])
//! - Pure layout planning ([`layout`])
//! - The text drawing capability with a built-in fallback ([`text`])
//! - [`ScheduleRenderer`], producing an RGB image or PNG bytes
//!
//! ## Example
//!
//! ```rust
//! use padsched_core::{DaySchedule, ShiftGroup};
//! use padsched_render::{LayoutConfig, ScheduleRenderer};
//!
//! let mut group = ShiftGroup::new(480, "8:00am");
//! group.associates = vec!["A".into(), "B".into()];
//! let schedule = DaySchedule::new("Mon", "Dana", vec![group]);
//!
//! let renderer = ScheduleRenderer::unstyled(LayoutConfig::default());
//! let image = renderer.render_image(&schedule);
//! assert_eq!(image.width(), 1050);
//! assert_eq!(image.height(), 120 + 2 * 50 + 40);
//! ```

pub mod config;
pub mod layout;
pub mod text;

pub use config::{ConfigError, FontConfig, LayoutConfig, RenderConfig};
pub use layout::{plan, ScheduleLayout};
pub use text::{select_text_renderer, DefaultTextRenderer, StyledTextRenderer, TextRenderer, TextStyle};

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;
use padsched_core::{DaySchedule, RenderError, Renderer};
use tracing::debug;

use crate::layout::{Rect, TextItem};

/// PNG schedule renderer
pub struct ScheduleRenderer {
    layout: LayoutConfig,
    text: Box<dyn TextRenderer>,
}

impl ScheduleRenderer {
    /// Renderer with styled fonts when available, built-in glyphs otherwise
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_text_renderer(config.layout.clone(), select_text_renderer(&config.fonts))
    }

    /// Renderer that always uses the built-in glyphs
    pub fn unstyled(layout: LayoutConfig) -> Self {
        Self::with_text_renderer(layout, Box::new(DefaultTextRenderer::default()))
    }

    pub fn with_text_renderer(layout: LayoutConfig, text: Box<dyn TextRenderer>) -> Self {
        Self { layout, text }
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Name of the selected text renderer ("styled" or "default")
    pub fn text_renderer_name(&self) -> &'static str {
        self.text.name()
    }

    pub fn plan(&self, schedule: &DaySchedule) -> ScheduleLayout {
        layout::plan(&self.layout, schedule)
    }

    /// Draw the schedule onto a fresh canvas
    pub fn render_image(&self, schedule: &DaySchedule) -> RgbImage {
        let plan = self.plan(schedule);
        debug!(
            day = %schedule.day_key,
            groups = plan.pads.len(),
            rows = plan.rows.len(),
            width = plan.width,
            height = plan.height,
            text = self.text.name(),
            "rendering schedule"
        );

        let outline = Rgb(self.layout.outline);
        let ink = Rgb(self.layout.text);
        let mut canvas = RgbImage::from_pixel(plan.width, plan.height, Rgb(self.layout.background));

        fill_rect(&mut canvas, plan.header, Rgb(self.layout.header_fill), outline);
        for item in &plan.header_text {
            self.draw_text(&mut canvas, item, ink);
        }
        draw_hollow_rect_mut(&mut canvas, pixel_rect(plan.title_frame), outline);

        for (gi, pad) in plan.pads.iter().enumerate() {
            fill_rect(&mut canvas, pad.rect, Rgb(pad.color), outline);
            let mut y = pad.first_line_y;
            for line in &pad.lines {
                let (w, _) = self.text.measure(line, TextStyle::Pad);
                let x = pad.center_x - w as i32 / 2;
                self.text.draw(&mut canvas, x, y, line, TextStyle::Pad, ink);
                y += pad.line_advance;
            }

            for row in plan.rows.iter().filter(|r| r.group_index == gi) {
                fill_rect(&mut canvas, row.index_cell, Rgb(self.layout.index_fill), outline);
                self.draw_text(&mut canvas, &row.index_text, ink);
                fill_rect(&mut canvas, row.name_cell, Rgb(row.band), outline);
                self.draw_text(&mut canvas, &row.name_text, ink);
            }
        }

        canvas
    }

    /// Render and encode as PNG
    pub fn render_png(&self, schedule: &DaySchedule) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.render_image(schedule))
    }

    /// Render as PNG and write it to `path`
    pub fn render_to_file(&self, schedule: &DaySchedule, path: &Path) -> Result<(), RenderError> {
        let png = self.render_png(schedule)?;
        std::fs::write(path, png).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn draw_text(&self, canvas: &mut RgbImage, item: &TextItem, color: Rgb<u8>) {
        self.text.draw(canvas, item.x, item.y, &item.text, item.style, color);
    }
}

impl Renderer for ScheduleRenderer {
    type Output = Vec<u8>;

    fn render(&self, schedule: &DaySchedule) -> Result<Vec<u8>, RenderError> {
        self.render_png(schedule)
    }
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    Ok(bytes)
}

fn pixel_rect(rect: Rect) -> PixelRect {
    PixelRect::at(rect.x0, rect.y0).of_size(rect.width(), rect.height())
}

/// Fill then outline; parts outside the canvas are clipped
fn fill_rect(canvas: &mut RgbImage, rect: Rect, fill: Rgb<u8>, outline: Rgb<u8>) {
    let r = pixel_rect(rect);
    draw_filled_rect_mut(canvas, r, fill);
    draw_hollow_rect_mut(canvas, r, outline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use padsched_core::ShiftGroup;

    fn schedule() -> DaySchedule {
        let mut a = ShiftGroup::new(480, "8:00am");
        a.associates = vec!["A".into(), "B".into()];
        let mut c = ShiftGroup::new(555, "9:15am");
        c.associates = vec!["C".into()];
        DaySchedule::new("Mon", "Dana", vec![a, c])
    }

    #[test]
    fn unstyled_renderer_reports_default() {
        let renderer = ScheduleRenderer::unstyled(LayoutConfig::default());
        assert_eq!(renderer.text_renderer_name(), "default");
    }

    #[test]
    fn missing_font_dir_still_renders() {
        let config = RenderConfig {
            fonts: FontConfig::in_dir("/nonexistent/fonts"),
            ..RenderConfig::default()
        };
        let renderer = ScheduleRenderer::new(&config);
        assert_eq!(renderer.text_renderer_name(), "default");
        let image = renderer.render_image(&schedule());
        assert_eq!((image.width(), image.height()), (1050, 310));
    }

    #[test]
    fn png_has_signature() {
        let renderer = ScheduleRenderer::unstyled(LayoutConfig::default());
        let bytes = renderer.render(&schedule()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn render_to_file_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule_Mon.png");
        let renderer = ScheduleRenderer::unstyled(LayoutConfig::default());
        renderer.render_to_file(&schedule(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), renderer.render_png(&schedule()).unwrap());
    }

    #[test]
    fn render_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let renderer = ScheduleRenderer::unstyled(LayoutConfig::default());
        match renderer.render_to_file(&schedule(), &path) {
            Err(RenderError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn pixel_rect_is_inclusive() {
        let r = pixel_rect(Rect::new(0, 120, 220, 220));
        assert_eq!((r.left(), r.top(), r.width(), r.height()), (0, 120, 221, 101));
    }
}
