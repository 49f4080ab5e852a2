//! Schedule layout planning
//!
//! Turns a [`DaySchedule`] into positioned rectangles and text before any
//! pixel is touched. Rectangles use inclusive corners: `[x0, y0, x1, y1]`
//! covers `x1 - x0 + 1` columns, so a row of height 48 paints 49 pixel rows
//! and the remaining gap pixel shows the background.
//!
//! ```text
//! +-----------+------------------------------------+
//! | Launcher: |        DRIVER NAME                 |  header
//! | <name>    |                                    |
//! +-----------+---+--------------------------------+
//! |           | 1 | Alice                          |  group 0, band A
//! |  Pad 1    +---+--------------------------------+
//! |  8:00am   | 2 | Bob                            |
//! +-----------+---+--------------------------------+
//! |  Pad 2    | 3 | Carol                          |  group 1, band B
//! |  9:15am   |   |                                |
//! +-----------+---+--------------------------------+
//! ```

use padsched_core::DaySchedule;

use crate::config::{LayoutConfig, Rgb};
use crate::text::TextStyle;

pub const LAUNCHER_CAPTION: &str = "Launcher:";
pub const DRIVER_TITLE: &str = "DRIVER NAME";

/// Rectangle with inclusive corners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1).max(1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1).max(1) as u32
    }
}

/// Text anchored at its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub style: TextStyle,
}

impl TextItem {
    fn new(x: i32, y: i32, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            style,
        }
    }
}

/// The colored pad band beside one shift group
#[derive(Clone, Debug, PartialEq)]
pub struct PadBlock {
    pub group_index: usize,
    /// 1-based
    pub pad_number: usize,
    pub color: Rgb,
    pub rect: Rect,
    /// "Pad N" then the time label, each centered on `center_x`
    pub lines: Vec<String>,
    pub center_x: i32,
    pub first_line_y: i32,
    pub line_advance: i32,
}

/// One associate row
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    pub group_index: usize,
    /// Running counter across all groups, from 1
    pub index: usize,
    pub index_cell: Rect,
    pub name_cell: Rect,
    pub band: Rgb,
    pub index_text: TextItem,
    pub name_text: TextItem,
}

/// Positioned contents of a schedule image
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleLayout {
    pub width: u32,
    pub height: u32,
    /// Filled header band
    pub header: Rect,
    /// Outline around the title area right of the pad band
    pub title_frame: Rect,
    pub header_text: Vec<TextItem>,
    pub pads: Vec<PadBlock>,
    pub rows: Vec<RowPlan>,
}

/// Lay out `schedule` with `config`
pub fn plan(config: &LayoutConfig, schedule: &DaySchedule) -> ScheduleLayout {
    let width = config.canvas_width();
    let height = config.canvas_height(schedule.total_rows());
    let right = width as i32;
    let pad_w = config.pad_band_width as i32;
    let idx_w = config.index_width as i32;
    let header_h = config.header_height as i32;
    let row_h = config.row_height as i32;
    let pitch = config.row_pitch() as i32;
    let (inset_x, inset_y) = config.cell_text_inset;

    let header_text = vec![
        TextItem::new(config.header_text_x, config.header_caption_y, LAUNCHER_CAPTION, TextStyle::Title),
        TextItem::new(config.header_text_x, config.header_name_y, schedule.launcher.clone(), TextStyle::Title),
        TextItem::new(pad_w + config.title_offset_x, config.header_caption_y, DRIVER_TITLE, TextStyle::Title),
    ];

    let mut pads = Vec::with_capacity(schedule.groups.len());
    let mut rows = Vec::with_capacity(schedule.total_rows());
    let mut y = header_h;
    let mut index = 1;

    for (gi, group) in schedule.groups.iter().enumerate() {
        let pad_number = config.pad_number(gi);
        let block_h = group.len() as i32 * pitch;
        let lines = vec![format!("Pad {}", pad_number), group.label.clone()];
        let first_line_y = y + block_h / 2 - (lines.len() as i32 * config.pad_line_height) / 2;

        pads.push(PadBlock {
            group_index: gi,
            pad_number,
            color: config.pad_color(gi),
            rect: Rect::new(0, y, pad_w, y + block_h),
            lines,
            center_x: pad_w / 2,
            first_line_y,
            line_advance: config.pad_line_advance,
        });

        let band = config.band_color(gi);
        for name in &group.associates {
            let index_cell = Rect::new(pad_w, y, pad_w + idx_w, y + row_h);
            let name_cell = Rect::new(pad_w + idx_w, y, right - config.name_right_inset as i32, y + row_h);
            rows.push(RowPlan {
                group_index: gi,
                index,
                index_cell,
                name_cell,
                band,
                index_text: TextItem::new(pad_w + inset_x, y + inset_y, index.to_string(), TextStyle::Bold),
                name_text: TextItem::new(pad_w + idx_w + inset_x, y + inset_y, name.clone(), TextStyle::Body),
            });
            y += pitch;
            index += 1;
        }
    }

    ScheduleLayout {
        width,
        height,
        header: Rect::new(0, 0, right, header_h),
        title_frame: Rect::new(pad_w, 0, right, header_h),
        header_text,
        pads,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padsched_core::ShiftGroup;
    use pretty_assertions::assert_eq;

    fn group(minutes: u32, label: &str, names: &[&str]) -> ShiftGroup {
        let mut g = ShiftGroup::new(minutes, label);
        g.associates = names.iter().map(|s| s.to_string()).collect();
        g
    }

    fn three_row_schedule() -> DaySchedule {
        DaySchedule::new(
            "Mon",
            "Dana",
            vec![group(480, "8:00am", &["A", "B"]), group(555, "9:15am", &["C"])],
        )
    }

    #[test]
    fn canvas_dimensions() {
        let layout = plan(&LayoutConfig::default(), &three_row_schedule());
        assert_eq!(layout.width, 1050);
        assert_eq!(layout.height, 120 + 3 * 50 + 40);
    }

    #[test]
    fn header_text_positions() {
        let layout = plan(&LayoutConfig::default(), &three_row_schedule());
        let texts: Vec<(i32, i32, &str)> = layout
            .header_text
            .iter()
            .map(|t| (t.x, t.y, t.text.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![(20, 20, "Launcher:"), (20, 62, "Dana"), (300, 20, "DRIVER NAME")]
        );
        assert_eq!(layout.header, Rect::new(0, 0, 1050, 120));
        assert_eq!(layout.title_frame, Rect::new(220, 0, 1050, 120));
    }

    #[test]
    fn pad_blocks_span_group_rows() {
        let layout = plan(&LayoutConfig::default(), &three_row_schedule());
        assert_eq!(layout.pads.len(), 2);

        let first = &layout.pads[0];
        assert_eq!(first.pad_number, 1);
        assert_eq!(first.rect, Rect::new(0, 120, 220, 220));
        assert_eq!(first.lines, vec!["Pad 1", "8:00am"]);
        assert_eq!(first.first_line_y, 120 + 50 - 28);
        assert_eq!(first.center_x, 110);

        let second = &layout.pads[1];
        assert_eq!(second.pad_number, 2);
        assert_eq!(second.rect, Rect::new(0, 220, 220, 270));
        assert_eq!(second.color, [226, 40, 216]);
    }

    #[test]
    fn rows_count_globally_and_band_per_group() {
        let config = LayoutConfig::default();
        let layout = plan(&config, &three_row_schedule());
        let indices: Vec<usize> = layout.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        let bands: Vec<Rgb> = layout.rows.iter().map(|r| r.band).collect();
        let [a, b] = config.band_colors;
        assert_eq!(bands, vec![a, a, b]);

        let row = &layout.rows[1];
        assert_eq!(row.index_cell, Rect::new(220, 170, 270, 218));
        assert_eq!(row.name_cell, Rect::new(270, 170, 1030, 218));
        assert_eq!((row.index_text.x, row.index_text.y), (232, 180));
        assert_eq!((row.name_text.x, row.name_text.y, row.name_text.text.as_str()), (282, 180, "B"));
    }

    #[test]
    fn six_groups_cycle_pads_and_alternate_bands() {
        let config = LayoutConfig::default();
        let groups = (0..6)
            .map(|i| group(480 + i * 15, &format!("{}", i), &["x"]))
            .collect();
        let layout = plan(&config, &DaySchedule::new("Wed", "", groups));

        let pads: Vec<usize> = layout.pads.iter().map(|p| p.pad_number).collect();
        assert_eq!(pads, vec![1, 2, 3, 1, 2, 3]);

        let [a, b] = config.band_colors;
        let bands: Vec<Rgb> = layout.rows.iter().map(|r| r.band).collect();
        assert_eq!(bands, vec![a, b, a, b, a, b]);

        let colors: Vec<Rgb> = layout.pads.iter().map(|p| p.color).collect();
        let [p1, p2, p3] = config.pad_colors;
        assert_eq!(colors, vec![p1, p2, p3, p1, p2, p3]);
    }

    #[test]
    fn empty_schedule_has_only_header() {
        let layout = plan(&LayoutConfig::default(), &DaySchedule::new("Sun", "", vec![]));
        assert!(layout.pads.is_empty());
        assert!(layout.rows.is_empty());
        assert_eq!(layout.height, 160);
    }

    #[test]
    fn rect_inclusive_size() {
        let r = Rect::new(220, 120, 270, 168);
        assert_eq!((r.width(), r.height()), (51, 49));
        assert_eq!(Rect::new(5, 5, 4, 4).width(), 1);
    }
}
