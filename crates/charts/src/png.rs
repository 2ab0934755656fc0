//! Raster chart renderer.

use crate::canvas::{
    fit_text, palette, text_width, Canvas, BLACK, GLYPH_SIZE, GREY, SKY_BLUE, WHITE,
};
use crate::{ChartError, ChartKind, ChartRenderer, ChartResult, ChartSet};
use image::{ImageFormat, RgbImage};
use precis_core::WordFrequency;
use std::path::Path;
use tempfile::NamedTempFile;

const CLOUD_SIZE: (u32, u32) = (800, 400);
const PLOT_SIZE: (u32, u32) = (1000, 500);
const TITLE_SCALE: u32 = 2;
const TITLE_Y: i64 = 14;

/// Pie wedges start here and run anticlockwise.
const PIE_START_ANGLE: f64 = 140.0;

/// Draws the charts as PNG files with the `image` crate.
#[derive(Debug, Clone, Default)]
pub struct PngChartRenderer;

impl PngChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Words sized by score, laid out on an elliptical spiral from the centre.
    ///
    /// A word that cannot be placed at its size is retried smaller, and dropped when even the
    /// smallest size does not fit.
    fn word_cloud(&self, words: &[WordFrequency]) -> RgbImage {
        let (width, height) = CLOUD_SIZE;
        let mut canvas = Canvas::new(width, height, WHITE);
        canvas.text_centred(
            width as i64 / 2,
            TITLE_Y,
            &ChartKind::WordCloud.heading(words.len()),
            TITLE_SCALE,
            BLACK,
        );

        let area = Rect {
            x: 10,
            y: 50,
            w: width as i64 - 20,
            h: height as i64 - 60,
        };
        let centre = (area.x + area.w / 2, area.y + area.h / 2);
        let mut placed: Vec<Rect> = Vec::new();

        for (i, entry) in words.iter().enumerate() {
            let preferred = 2 + (entry.score.clamp(0.0, 1.0) * 4.0).round() as u32;
            let spot = (1..=preferred).rev().find_map(|scale| {
                let w = text_width(&entry.word, scale) as i64;
                let h = (GLYPH_SIZE * scale) as i64;
                spiral_spot(centre, w, h, &area, &placed).map(|rect| (rect, scale))
            });

            match spot {
                Some((rect, scale)) => {
                    canvas.text(rect.x, rect.y, &entry.word, scale, palette(i));
                    placed.push(rect);
                }
                None => tracing::debug!("no room in word cloud for {:?}", entry.word),
            }
        }

        canvas.into_image()
    }

    fn bar_chart(&self, words: &[WordFrequency]) -> RgbImage {
        let (width, height) = PLOT_SIZE;
        let mut canvas = Canvas::new(width, height, WHITE);
        canvas.text_centred(
            width as i64 / 2,
            TITLE_Y,
            &ChartKind::BarChart.heading(words.len()),
            TITLE_SCALE,
            BLACK,
        );

        let left: i64 = 90;
        let right: i64 = width as i64 - 30;
        let top: i64 = 60;
        let bottom: i64 = height as i64 - 90;
        let plot_h = (bottom - top) as f64;
        let max = words
            .iter()
            .map(|w| w.score)
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE);

        for tick in 0..=5 {
            let value = max * tick as f64 / 5.0;
            let y = bottom - (plot_h * tick as f64 / 5.0).round() as i64;
            canvas.hline(left, y, (right - left) as u32, GREY);
            canvas.hline(left - 5, y, 5, BLACK);
            let label = format!("{value:.1}");
            let label_x = left - 10 - text_width(&label, 1) as i64;
            canvas.text(label_x, y - 4, &label, 1, BLACK);
        }

        let slot = (right - left) as f64 / words.len() as f64;
        let bar_w = (slot * 0.8).max(1.0) as u32;
        for (i, entry) in words.iter().enumerate() {
            let slot_x = left as f64 + slot * i as f64;
            let bar_x = (slot_x + slot * 0.1).round() as i64;
            let bar_h = (plot_h * entry.score / max).round() as u32;
            canvas.fill_rect(bar_x, bottom - bar_h as i64, bar_w, bar_h, SKY_BLUE);

            let label = fit_text(&entry.word, 1, slot as u32);
            canvas.text_centred((slot_x + slot / 2.0) as i64, bottom + 10, &label, 1, BLACK);
        }

        canvas.vline(left, top, (bottom - top) as u32 + 1, BLACK);
        canvas.hline(left, bottom, (right - left) as u32, BLACK);

        canvas.text_centred((left + right) / 2, height as i64 - 40, "Words", 2, BLACK);
        let label_y = (top + bottom) / 2 + text_width("Frequency", 2) as i64 / 2;
        canvas.text_vertical(16, label_y, "Frequency", 2, BLACK);

        canvas.into_image()
    }

    fn pie_chart(&self, words: &[WordFrequency]) -> RgbImage {
        let (width, height) = PLOT_SIZE;
        let mut canvas = Canvas::new(width, height, WHITE);
        canvas.text_centred(
            width as i64 / 2,
            TITLE_Y,
            &ChartKind::PieChart.heading(words.len()),
            TITLE_SCALE,
            BLACK,
        );

        let total: f64 = words.iter().map(|w| w.score).sum();
        let shares: Vec<f64> = if total > 0.0 {
            words.iter().map(|w| w.score / total).collect()
        } else {
            vec![1.0 / words.len() as f64; words.len()]
        };

        let (cx, cy, radius) = (330_i64, 270_i64, 190_u32);
        let mut start = PIE_START_ANGLE;
        for (i, share) in shares.iter().enumerate() {
            let sweep = share * 360.0;
            canvas.fill_wedge(cx, cy, radius, start, sweep, palette(i));

            // percentages only where the wedge is wide enough to hold them
            if *share >= 0.04 {
                let mid = (start + sweep / 2.0).to_radians();
                let r = radius as f64 * 0.62;
                let lx = cx + (r * mid.cos()).round() as i64;
                let ly = cy - (r * mid.sin()).round() as i64;
                canvas.text_centred(lx, ly - 4, &percent(*share), 1, BLACK);
            }
            start += sweep;
        }

        let legend_x: i64 = 600;
        for (i, (entry, share)) in words.iter().zip(&shares).enumerate() {
            let y = 90 + i as i64 * 32;
            canvas.fill_rect(legend_x, y, 18, 18, palette(i));
            let label = fit_text(&entry.word, 2, 250);
            canvas.text(legend_x + 28, y + 1, &label, 2, BLACK);
            canvas.text(legend_x + 290, y + 5, &percent(*share), 1, BLACK);
        }

        canvas.into_image()
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, words: &[WordFrequency], out_dir: &Path) -> ChartResult<ChartSet> {
        if words.is_empty() {
            return Err(ChartError::EmptyTable);
        }
        if !out_dir.is_dir() {
            return Err(ChartError::InvalidOutputDir(format!(
                "Directory does not exist: {}",
                out_dir.display()
            )));
        }

        let set = ChartSet::in_dir(out_dir);
        persist(&self.word_cloud(words), &set.word_cloud)?;
        persist(&self.bar_chart(words), &set.bar_chart)?;
        persist(&self.pie_chart(words), &set.pie_chart)?;

        tracing::debug!("rendered {} words to {}", words.len(), out_dir.display());
        Ok(set)
    }
}

fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Encodes into a temporary sibling of `path`, then renames over it.
fn persist(image: &RgbImage, path: &Path) -> ChartResult<()> {
    let dir = path.parent().ok_or_else(|| {
        ChartError::InvalidOutputDir(format!("no parent directory: {}", path.display()))
    })?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(ChartError::TempFile)?;
    image.write_to(tmp.as_file_mut(), ImageFormat::Png)?;
    tmp.persist(path)
        .map_err(|e| ChartError::Persist(e.error))?;

    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

impl Rect {
    fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    fn overlaps(&self, other: &Rect, pad: i64) -> bool {
        self.x - pad < other.x + other.w
            && other.x - pad < self.x + self.w
            && self.y - pad < other.y + other.h
            && other.y - pad < self.y + self.h
    }
}

fn spiral_spot(
    centre: (i64, i64),
    w: i64,
    h: i64,
    area: &Rect,
    placed: &[Rect],
) -> Option<Rect> {
    // wider than tall, like the canvas
    let (a, b) = (2.0_f64, 1.0_f64);
    let mut t = 0.0_f64;
    while t < 400.0 {
        let rect = Rect {
            x: centre.0 + (a * t * t.cos()).round() as i64 - w / 2,
            y: centre.1 + (b * t * t.sin()).round() as i64 - h / 2,
            w,
            h,
        };
        if area.contains(&rect) && !placed.iter().any(|p| p.overlaps(&rect, 4)) {
            return Some(rect);
        }
        t += 0.1;
    }
    None
}
