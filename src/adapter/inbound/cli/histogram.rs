//! Handler for the `histogram` command.

use serde_json::json;

use super::command::HistogramArgs;
use super::{chart, output};
use crate::application::histogram::{self, HistogramOutcome, NO_DATA_MESSAGE, TITLE, X_LABEL, Y_LABEL};
use crate::config::Config;
use crate::error::Result;
use crate::port::outbound::report::OrderReportReader;

/// Execute `histogram`.
pub fn execute<S: OrderReportReader>(store: &S, config: &Config, args: &HistogramArgs) -> Result<()> {
    let bins = args.bins.unwrap_or(config.histogram.bins);
    let outcome = histogram::delivery_histogram(store, bins)?;

    let histogram = match outcome {
        HistogramOutcome::Empty => {
            if output::is_json() {
                return output::json_document(&json!({
                    "command": "histogram",
                    "message": NO_DATA_MESSAGE,
                    "bins": [],
                }));
            }
            output::note(NO_DATA_MESSAGE);
            return Ok(());
        }
        HistogramOutcome::Ready(histogram) => histogram,
    };

    if output::is_json() {
        let bins: Vec<_> = histogram.bins().collect();
        return output::json_document(&json!({
            "command": "histogram",
            "title": TITLE,
            "x_label": X_LABEL,
            "y_label": Y_LABEL,
            "total": histogram.total(),
            "bins": bins,
        }));
    }

    println!();
    output::block(&chart::render(&histogram, config.histogram.width));
    println!();
    Ok(())
}
