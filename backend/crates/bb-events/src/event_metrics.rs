use metrics::counter;

/// Counters for event publication and consumption
#[derive(Clone)]
pub struct EventMetrics {
    prefix: &'static str,
}

impl Default for EventMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EventMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "bb_events",
        }
    }

    pub fn published(&self, topic: &str) {
        counter!(format!("{}.published", self.prefix), "topic" => topic.to_string()).increment(1);
    }

    /// A committed change whose event never reached the broker
    pub fn publish_failed(&self, topic: &str, kind: &'static str) {
        counter!(
            format!("{}.publish_failed", self.prefix),
            "topic" => topic.to_string(),
            "kind" => kind
        )
        .increment(1);
    }

    pub fn consumed(&self) {
        counter!(format!("{}.consumed", self.prefix)).increment(1);
    }

    pub fn duplicate_dropped(&self) {
        counter!(format!("{}.duplicates_dropped", self.prefix)).increment(1);
    }

    pub fn malformed(&self) {
        counter!(format!("{}.malformed", self.prefix)).increment(1);
    }
}
