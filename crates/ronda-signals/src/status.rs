//! Status reporter that forwards progress to `tracing`.

use ronda_traits::StatusReporter;

/// Emits every status notification as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatus;

impl StatusReporter for TracingStatus {
    fn report_status(&self, component: &str, symbol: &str, phase: &str) {
        tracing::info!(component, symbol, phase, "status");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_status_without_subscriber() {
        TracingStatus.report_status("fundamentals_agent", "AAPL", "Done");
    }
}
