//! Terminal bar chart for histograms.

use crate::application::histogram::{TITLE, X_LABEL, Y_LABEL};
use crate::domain::Histogram;

const BAR: &str = "█";

/// Render `histogram` as horizontal bars, one row per bin.
///
/// The longest bar is `width` characters; any non-empty bin gets at least one
/// character so it stays visible.
#[must_use]
pub fn render(histogram: &Histogram, width: usize) -> String {
    let labels: Vec<String> = histogram
        .bins()
        .map(|bin| format!("{:.2} - {:.2}", bin.lower, bin.upper))
        .collect();
    let label_width = labels
        .iter()
        .map(|label| label.chars().count())
        .chain(std::iter::once(X_LABEL.len()))
        .max()
        .unwrap_or(0);
    let max = histogram.max_count();

    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        format!("{X_LABEL:>label_width$} │ {Y_LABEL}"),
        format!("{}─┼─{}", "─".repeat(label_width), "─".repeat(width + 6)),
    ];
    for (label, bin) in labels.iter().zip(histogram.bins()) {
        let bar = BAR.repeat(bar_length(bin.count, max, width));
        let gap = if bar.is_empty() { "" } else { " " };
        lines.push(format!("{label:>label_width$} │ {bar}{gap}{}", bin.count));
    }
    lines.join("\n")
}

fn bar_length(count: u64, max: u64, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as f64 / max as f64 * width as f64).round() as usize;
    scaled.max(1)
}
