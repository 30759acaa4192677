//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::{ConfigError, Result};
use crate::geometry::{ArcTrim, KnobGeometry};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let text = render(data, format)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)?;
    Ok(())
}

/// Render `data` in the selected format
pub fn render<T: Serialize + TableDisplay>(
    data: &T,
    format: OutputFormat,
) -> std::result::Result<String, ConfigError> {
    let text = match format {
        OutputFormat::Table => data.to_table(),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Compact => data.to_compact(),
    };
    Ok(text)
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

fn side(trim: &ArcTrim) -> &'static str {
    if trim.is_below_origin() {
        "below origin"
    } else {
        "above origin"
    }
}

/// Geometry of one knob value for display
#[derive(Debug, Clone, Serialize)]
pub struct GeometryReport {
    pub label: String,
    pub value: f32,
    pub display_text: String,
    pub geometry: KnobGeometry,
}

impl TableDisplay for GeometryReport {
    fn to_table(&self) -> String {
        let g = &self.geometry;
        let mut output = format!("Knob: {} (value {})\n", self.label, self.value);
        output.push_str(&format!("  Display:           {}\n", self.display_text));
        output.push_str(&format!("  Normalized value:  {:.4}\n", g.normalized_value));
        output.push_str(&format!("  Normalized origin: {:.4}\n", g.normalized_origin));
        output.push_str(&format!("  Track:             {:.4} -> {:.4}\n", g.track.0, g.track.1));
        output.push_str(&format!(
            "  Progress:          {:.4} -> {:.4} ({})\n",
            g.progress.from(),
            g.progress.to(),
            side(&g.progress)
        ));
        output.push_str(&format!(
            "  Pointer:           {:.4} rad ({:.1}°)",
            g.pointer_radians,
            g.pointer_radians.to_degrees()
        ));
        output
    }

    fn to_compact(&self) -> String {
        format!(
            "{}={} arc={:.4}..{:.4} ptr={:.4}",
            self.label,
            self.value,
            self.geometry.progress.from(),
            self.geometry.progress.to(),
            self.geometry.pointer_radians
        )
    }
}

/// Geometry at several values across a range
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub label: String,
    pub lower: f32,
    pub upper: f32,
    pub origin: f32,
    pub rows: Vec<SweepRow>,
}

/// One sweep sample
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub value: f32,
    pub normalized: f32,
    pub progress: ArcTrim,
    pub pointer_radians: f32,
}

impl TableDisplay for SweepReport {
    fn to_table(&self) -> String {
        let mut output = format!(
            "Knob: {} [{}, {}] origin {}\n\n",
            self.label, self.lower, self.upper, self.origin
        );
        output.push_str(&format!(
            "{:>10}  {:>8}  {:>8}  {:>8}  {:>8}  {}\n",
            "VALUE", "NORM", "FROM", "TO", "POINTER", "SIDE"
        ));
        for row in &self.rows {
            output.push_str(&format!(
                "{:>10.3}  {:>8.4}  {:>8.4}  {:>8.4}  {:>8.4}  {}\n",
                row.value,
                row.normalized,
                row.progress.from(),
                row.progress.to(),
                row.pointer_radians,
                side(&row.progress)
            ));
        }
        output
    }

    fn to_compact(&self) -> String {
        self.rows
            .iter()
            .map(|r| format!("{}:{:.4}..{:.4}", r.value, r.progress.from(), r.progress.to()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KnobSpec;

    fn report(value: f32) -> GeometryReport {
        let spec = KnobSpec::new("Knob 1");
        GeometryReport {
            label: spec.label().to_string(),
            value,
            display_text: spec.display_text(value, false),
            geometry: KnobGeometry::compute(&spec, value),
        }
    }

    #[test]
    fn test_geometry_table() {
        let table = report(64.0).to_table();
        assert!(table.contains("Knob: Knob 1 (value 64)"));
        assert!(table.contains("above origin"));
    }

    #[test]
    fn test_geometry_compact_is_single_line() {
        assert!(!report(10.0).to_compact().contains('\n'));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(
            &self,
            _serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    impl TableDisplay for Unserializable {
        fn to_table(&self) -> String {
            "row".to_string()
        }
    }

    #[test]
    fn test_json_failure_is_reported() {
        let result = render(&Unserializable, OutputFormat::Json);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
        assert_eq!(render(&Unserializable, OutputFormat::Table).unwrap(), "row");
    }

    #[test]
    fn test_render_json() {
        let text = render(&report(64.0), OutputFormat::Json).unwrap();
        assert!(text.contains("\"display_text\": \"Knob 1\""));
    }

    #[test]
    fn test_geometry_json_tags_side() {
        let json = serde_json::to_value(report(0.0)).unwrap();
        assert_eq!(json["geometry"]["progress"]["side"], "above_origin");
    }
}
