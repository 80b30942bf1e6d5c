//! Delivery time histogram.

use tracing::{debug, info};

use crate::domain::{DomainError, Histogram};
use crate::error::Result;
use crate::port::outbound::report::OrderReportReader;

/// Bin count used when the caller does not choose one.
pub const DEFAULT_BINS: usize = 20;

/// Chart title.
pub const TITLE: &str = "Histogram of Delivery Time Taken (mins)";

/// X-axis label.
pub const X_LABEL: &str = "Delivery Time (mins)";

/// Y-axis label.
pub const Y_LABEL: &str = "Frequency";

/// Message shown instead of a chart when there is nothing to plot.
pub const NO_DATA_MESSAGE: &str = "No delivery time data available.";

/// Result of building the delivery time histogram.
#[derive(Debug, Clone, PartialEq)]
pub enum HistogramOutcome {
    /// No order has a delivery time; nothing should be rendered.
    Empty,
    /// Histogram ready to render.
    Ready(Histogram),
}

/// Build a histogram of all recorded delivery times.
///
/// # Errors
/// Returns [`DomainError::InvalidBinCount`] for `bins == 0` before touching
/// the store, or a storage error.
pub fn delivery_histogram<S: OrderReportReader>(store: &S, bins: usize) -> Result<HistogramOutcome> {
    if bins == 0 {
        return Err(DomainError::InvalidBinCount { bins }.into());
    }

    let times = store.load_delivery_times()?;
    debug!(values = times.len(), bins, "loaded delivery times");

    match Histogram::from_values(&times, bins) {
        Some(histogram) => Ok(HistogramOutcome::Ready(histogram)),
        None => {
            info!("{NO_DATA_MESSAGE}");
            Ok(HistogramOutcome::Empty)
        }
    }
}
