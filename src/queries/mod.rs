//! Query modules for the riskometer.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>`.

pub mod riskometer;
pub mod series;

pub use riskometer::RiskQuery;
pub use series::SeriesQuery;
