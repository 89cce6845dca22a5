use serde::Serialize;

/// Projected output at the end of a given hour when running at a constant rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub hour: usize,
    pub target: i64,
    pub cumulative: i64,
}

/// Linear forecast for `hours` hours at `rate_per_minute`.
pub fn forecast(rate_per_minute: f64, hours: usize) -> Vec<ForecastRow> {
    let per_hour = rate_per_minute * 60.0;

    (1..=hours)
        .map(|hour| {
            let cumulative = (per_hour * hour as f64).round() as i64;
            ForecastRow {
                hour,
                target: cumulative,
                cumulative,
            }
        })
        .collect()
}

/// Output expected over the whole forecast, 0 for an empty one.
pub fn forecast_total(rows: &[ForecastRow]) -> i64 {
    rows.last().map(|r| r.cumulative).unwrap_or(0)
}
