//! Chart style configuration
//!
//! Visual defaults for the dashboard, expressed as an explicit object that
//! gets passed into the views rather than a process-wide default. Colors are
//! stored as strings (`"cyan"`, `"#10ac84"`, ...) so a style file stays
//! human-editable; unparseable names fall back to the built-in default.

use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::DashboardResult;

/// Visual defaults for the dashboard charts
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Net worth line color
    pub line_color: String,
    /// Fill under the net worth curve
    pub fill_color: String,
    /// Expense bar color
    pub bar_color: String,
    /// Axis and tick label color
    pub axis_color: String,
    /// Card border color
    pub border_color: String,
    /// Savings target met
    pub success_color: String,
    /// Savings target missed
    pub danger_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: "cyan".to_string(),
            fill_color: "darkgray".to_string(),
            bar_color: "lightblue".to_string(),
            axis_color: "gray".to_string(),
            border_color: "darkgray".to_string(),
            success_color: "#10ac84".to_string(),
            danger_color: "#ee5a6f".to_string(),
        }
    }
}

impl ChartStyle {
    /// Load a style from a JSON file
    pub fn load(path: &Path) -> DashboardResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn line(&self) -> Color {
        parse_color(&self.line_color, Color::Cyan)
    }

    pub fn fill(&self) -> Color {
        parse_color(&self.fill_color, Color::DarkGray)
    }

    pub fn bar(&self) -> Color {
        parse_color(&self.bar_color, Color::LightBlue)
    }

    pub fn axis(&self) -> Color {
        parse_color(&self.axis_color, Color::Gray)
    }

    pub fn border(&self) -> Color {
        parse_color(&self.border_color, Color::DarkGray)
    }

    pub fn success(&self) -> Color {
        parse_color(&self.success_color, Color::Green)
    }

    pub fn danger(&self) -> Color {
        parse_color(&self.danger_color, Color::Red)
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    Color::from_str(name).unwrap_or(fallback)
}
