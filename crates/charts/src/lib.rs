//! Precis chart rendering
//!
//! Turns the highest-scoring entries of a summary's frequency table into three PNG images: a word
//! cloud, a bar chart and a pie chart.
//!
//! ## Design
//!
//! - Rendering is a capability behind the [`ChartRenderer`] trait, parameterised by output
//!   directory. The scoring code never touches the filesystem.
//! - Images are written to a temporary file in the target directory and renamed into place, so
//!   a reader never observes a half-written PNG.
//! - [`ChartStore`] hands every request its own directory and bounds how many are kept, which
//!   replaces a single set of shared, overwritten output paths.
//!
//! ```text
//! static/
//! └── charts/
//!     └── <request-id>/
//!         ├── wordcloud.png
//!         ├── barchart.png
//!         └── piechart.png
//! ```

mod canvas;
mod png;
mod store;

pub use png::PngChartRenderer;
pub use store::{ChartSlot, ChartStore};

use precis_core::WordFrequency;
use std::path::{Path, PathBuf};

/// Errors that can occur while rendering or storing charts
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// There are no words to chart
    #[error("cannot render charts from an empty frequency table")]
    EmptyTable,

    /// Output directory is unusable
    #[error("invalid output directory: {0}")]
    InvalidOutputDir(String),

    /// Failed to create a chart directory
    #[error("failed to create chart directory: {0}")]
    CreateDir(std::io::Error),

    /// Failed to delete an evicted chart directory
    #[error("failed to remove chart directory: {0}")]
    RemoveDir(std::io::Error),

    /// Failed to create the temporary file an image is encoded into
    #[error("failed to create temporary chart file: {0}")]
    TempFile(std::io::Error),

    /// PNG encoding failed
    #[error("failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),

    /// Moving the finished image into place failed
    #[error("failed to persist chart image: {0}")]
    Persist(std::io::Error),
}

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// The three charts produced for every summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    WordCloud,
    BarChart,
    PieChart,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::WordCloud, ChartKind::BarChart, ChartKind::PieChart];

    /// File name of the chart inside its output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud.png",
            ChartKind::BarChart => "barchart.png",
            ChartKind::PieChart => "piechart.png",
        }
    }

    /// Short label, used as the image alt text.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word Cloud",
            ChartKind::BarChart => "Top Words by Frequency",
            ChartKind::PieChart => "Top Words Frequency Distribution",
        }
    }

    /// Heading drawn at the top of the image for a chart of `count` words.
    pub fn heading(self, count: usize) -> String {
        let words = if count == 1 { "Word" } else { "Words" };
        match self {
            ChartKind::WordCloud => self.title().to_string(),
            ChartKind::BarChart => format!("Top {count} {words} by Frequency"),
            ChartKind::PieChart => format!("Top {count} {words} Frequency Distribution"),
        }
    }
}

/// Paths of one rendered set of charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSet {
    pub word_cloud: PathBuf,
    pub bar_chart: PathBuf,
    pub pie_chart: PathBuf,
}

impl ChartSet {
    /// The conventional file locations inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            word_cloud: dir.join(ChartKind::WordCloud.file_name()),
            bar_chart: dir.join(ChartKind::BarChart.file_name()),
            pie_chart: dir.join(ChartKind::PieChart.file_name()),
        }
    }

    pub fn path(&self, kind: ChartKind) -> &Path {
        match kind {
            ChartKind::WordCloud => &self.word_cloud,
            ChartKind::BarChart => &self.bar_chart,
            ChartKind::PieChart => &self.pie_chart,
        }
    }
}

/// Renders a word-frequency ranking to chart images.
///
/// Implementations write every [`ChartKind`] into `out_dir`, replacing existing files, and return
/// where they went. `words` is expected in descending score order.
pub trait ChartRenderer: Send + Sync {
    /// Renders and persists all charts.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::EmptyTable` if `words` is empty, or an I/O or encoding error.
    fn render(&self, words: &[WordFrequency], out_dir: &Path) -> ChartResult<ChartSet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_set_in_dir() {
        let set = ChartSet::in_dir(Path::new("/tmp/out"));

        assert_eq!(set.word_cloud, Path::new("/tmp/out/wordcloud.png"));
        assert_eq!(set.path(ChartKind::BarChart), Path::new("/tmp/out/barchart.png"));
        assert_eq!(set.path(ChartKind::PieChart), Path::new("/tmp/out/piechart.png"));
    }

    #[test]
    fn test_chart_kind_file_names_are_distinct() {
        let mut names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        names.dedup();

        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_chart_heading_follows_word_count() {
        assert_eq!(ChartKind::BarChart.heading(10), "Top 10 Words by Frequency");
        assert_eq!(ChartKind::PieChart.heading(25), "Top 25 Words Frequency Distribution");
        assert_eq!(ChartKind::BarChart.heading(1), "Top 1 Word by Frequency");
        assert_eq!(ChartKind::WordCloud.heading(7), "Word Cloud");
    }
}
