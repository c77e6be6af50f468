pub mod openapi;
pub mod schemas;
pub mod welcome;
