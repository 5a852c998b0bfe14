use metrics::counter;

/// Counters for edge authentication and forwarding outcomes
#[derive(Clone)]
pub struct GatewayMetrics {
    prefix: &'static str,
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "bb_gateway",
        }
    }

    pub fn authenticated(&self) {
        counter!(format!("{}.auth.accepted", self.prefix)).increment(1);
    }

    pub fn rejected(&self, kind: &'static str) {
        counter!(format!("{}.auth.rejected", self.prefix), "kind" => kind).increment(1);
    }

    pub fn public_forwarded(&self) {
        counter!(format!("{}.auth.public", self.prefix)).increment(1);
    }

    /// Client-supplied identity headers removed before forwarding
    pub fn spoofed_headers_stripped(&self, count: usize) {
        counter!(format!("{}.auth.spoofed_headers", self.prefix)).increment(count as u64);
    }

    pub fn upstream_failed(&self) {
        counter!(format!("{}.upstream.failed", self.prefix)).increment(1);
    }
}
