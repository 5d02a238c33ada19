pub mod frontend;
pub mod indices;
pub mod riskometer;
