pub mod axes;
pub mod flags;
pub mod risk;
pub mod scores;
pub mod thresholds;
pub mod unit;
