pub mod catch_up;
pub mod conversion;
pub mod forecast;

pub use catch_up::{CatchUpSummary, catch_up_speed, last_entered_index, recompute_catch_up};
pub use conversion::{rate_from_speed, round2, speed_from_rate};
pub use forecast::{ForecastRow, forecast, forecast_total};
