//! Net worth chart model
//!
//! Line plot with a filled area under the curve. X values are days since the
//! common era so dates stay linear; Y values are scaled to thousands. The X
//! axis snaps to year boundaries so year labels land on even ticks (years
//! are the major division; weeks inside them provide the minor structure).

use chrono::{Datelike, NaiveDate};

use crate::metrics::NetWorthPoint;

/// Headroom above the observed maximum on the Y axis
const Y_HEADROOM: f64 = 1.1;

/// Renderable model of the net worth chart
#[derive(Debug, Clone, PartialEq)]
pub struct NetWorthChart {
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
}

impl NetWorthChart {
    /// Build the chart model from a net worth series
    pub fn build(series: &[NetWorthPoint]) -> Self {
        let points: Vec<(f64, f64)> = series
            .iter()
            .map(|p| (p.date.num_days_from_ce() as f64, p.amount / 1000.0))
            .collect();

        let max_k = points.iter().map(|&(_, y)| y).fold(0.0, f64::max);
        let y_bounds = [0.0, max_k * Y_HEADROOM];

        let (x_bounds, x_labels) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => {
                let years: Vec<i32> = (first.date.year()..=last.date.year() + 1).collect();
                let bounds = [year_start(years[0]), year_start(years[years.len() - 1])];
                (bounds, years.iter().map(|y| y.to_string()).collect())
            }
            _ => ([0.0, 1.0], Vec::new()),
        };

        Self {
            points,
            x_bounds,
            y_bounds,
            x_labels,
        }
    }

    /// Data points as (days-since-CE, thousands)
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// X axis bounds, snapped to year starts
    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Y axis bounds: zero up to 1.1x the observed maximum
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// Year tick labels across the X axis
    pub fn x_labels(&self) -> &[String] {
        &self.x_labels
    }

    /// Tick labels for the Y axis: zero, midpoint, maximum
    pub fn y_labels(&self) -> Vec<String> {
        let max = self.y_bounds[1];
        vec![
            "0".to_string(),
            format!("{:.1}", max / 2.0),
            format!("{:.1}", max),
        ]
    }
}

/// January 1st of a year, as days since the common era
fn year_start(year: i32) -> f64 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|d| d.num_days_from_ce() as f64)
        .unwrap_or(0.0)
}
