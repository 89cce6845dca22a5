pub mod calculator;
pub mod history;
pub mod log;
pub mod logbook;
pub mod shifts;
pub mod tracker;
