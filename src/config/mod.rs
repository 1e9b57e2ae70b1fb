//! Configuration for ledgerdash
//!
//! The only configuration surface is the chart style: visual defaults for
//! the dashboard, optionally overridden from a JSON file.

pub mod style;

pub use style::ChartStyle;
