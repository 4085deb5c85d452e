//! Shared data structures for the well-test report pipeline
//!
//! - `Value` / `MeasurementBag`: the raw named-measurement input bag
//! - `PressureSeries`: ordered (timestamp, pressure) gauge data
//! - `FluidKind` / `TestKind`: free-text tag classifiers
//! - `keys` / `series_names`: the well-known parameter names

mod bag;
mod classify;
pub mod keys;
mod series;
mod value;

pub use bag::MeasurementBag;
pub use classify::{FluidKind, TestKind};
pub use series::{series_names, PressurePoint, PressureSeries};
pub use value::{parse_datetime, parse_number, Value};
