use metrics::counter;

/// Counters for guard decisions and committed writes
#[derive(Clone)]
pub struct ServerMetrics {
    prefix: &'static str,
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "bb_server",
        }
    }

    pub fn access_denied(&self, operation: &'static str, reason: &'static str) {
        counter!(
            format!("{}.guard.denied", self.prefix),
            "operation" => operation,
            "reason" => reason
        )
        .increment(1);
    }

    pub fn anonymous_request(&self) {
        counter!(format!("{}.identity.anonymous", self.prefix)).increment(1);
    }

    pub fn order_committed(&self) {
        counter!(format!("{}.orders.committed", self.prefix)).increment(1);
    }
}
