//! Progress reporting seam.

/// Receives fire-and-forget progress notifications.
///
/// Notifications are observational only; nothing an implementation does can
/// influence scoring.
pub trait StatusReporter: Send + Sync {
    /// Report that `component` reached `phase` while processing `symbol`.
    fn report_status(&self, component: &str, symbol: &str, phase: &str);
}

/// Reporter that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatus;

impl StatusReporter for NoopStatus {
    fn report_status(&self, _component: &str, _symbol: &str, _phase: &str) {}
}

impl<T: StatusReporter + ?Sized> StatusReporter for &T {
    fn report_status(&self, component: &str, symbol: &str, phase: &str) {
        (**self).report_status(component, symbol, phase);
    }
}

impl<T: StatusReporter + ?Sized> StatusReporter for Box<T> {
    fn report_status(&self, component: &str, symbol: &str, phase: &str) {
        (**self).report_status(component, symbol, phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl StatusReporter for Recorder {
        fn report_status(&self, component: &str, symbol: &str, phase: &str) {
            self.0
                .lock()
                .unwrap()
                .push(format!("{component}/{symbol}/{phase}"));
        }
    }

    #[test]
    fn test_noop_accepts_anything() {
        NoopStatus.report_status("fundamentals_agent", "AAPL", "Done");
    }

    #[test]
    fn test_reporter_through_box() {
        let recorder = Recorder::default();
        {
            let boxed: Box<&dyn StatusReporter> = Box::new(&recorder);
            boxed.report_status("agent", "MSFT", "Analyzing growth");
        }
        let events = recorder.0.lock().unwrap();
        assert_eq!(events.as_slice(), ["agent/MSFT/Analyzing growth"]);
    }
}
