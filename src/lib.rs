pub mod config;
pub mod engine_types;
pub mod series_math;
pub mod routines;
pub mod timer;
pub mod output;
pub mod driver;
