use serde::Serialize;

/// Default number of cells in a tracking period.
pub const DEFAULT_PERIOD_HOURS: usize = 12;

/// Default hourly output target.
pub const DEFAULT_HOURLY_TARGET: f64 = 526.0;

/// One hour of a tracking session. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyCell {
    pub hour: usize,
    pub target: f64,
    pub actual: Option<f64>,
    pub variance: f64,
    pub required_rate: Option<f64>,
    pub notes: String,
}

impl HourlyCell {
    pub fn new(hour: usize, target: f64) -> Self {
        Self {
            hour,
            target,
            actual: None,
            variance: -target,
            required_rate: None,
            notes: String::new(),
        }
    }

    /// Build `hours` cells numbered from 1, all with the same target.
    pub fn period(hours: usize, target: f64) -> Vec<Self> {
        (1..=hours).map(|h| Self::new(h, target)).collect()
    }

    pub fn is_measured(&self) -> bool {
        self.actual.is_some()
    }

    /// Recompute `variance` from the current target and actual.
    pub fn refresh_variance(&mut self) {
        self.variance = self.actual.unwrap_or(0.0) - self.target;
    }
}
