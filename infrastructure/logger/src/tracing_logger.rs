use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes domain log lines to the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_extractor", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_extractor", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_extractor", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_extractor", "{}", message);
    }
}
