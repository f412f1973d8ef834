//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ladder_config::{Registry, Table};
use ladder_domain::Interval;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// JSON has no infinity; open-ended bounds are written as `"inf"` / `"-inf"`.
fn bound_json(bound: f64) -> serde_json::Value {
    if bound.is_finite() {
        json!(bound)
    } else if bound > 0.0 {
        json!("inf")
    } else {
        json!("-inf")
    }
}

fn bucket_json(bucket: &Interval<f64, String>) -> serde_json::Value {
    json!({
        "min": bound_json(bucket.min),
        "max": bound_json(bucket.max),
        "value": bucket.value,
    })
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a lookup.
    pub fn format_lookup(
        &self,
        table: &str,
        value: f64,
        hit: Option<&Interval<f64, String>>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "table": table,
                "value": bound_json(value),
                "bucket": hit.map(bucket_json),
            }))?),
            OutputFormat::Table => Ok(match hit {
                Some(bucket) => self.success(&format!(
                    "{} falls in [{}, {}) => {}",
                    value, bucket.min, bucket.max, bucket.value
                )),
                None => self.warning(&format!("No bucket in '{}' contains {}", table, value)),
            }),
            OutputFormat::Quiet => Ok(hit.map(|bucket| bucket.value.clone()).unwrap_or_default()),
        }
    }

    /// Format every bucket of a table.
    pub fn format_table(&self, name: &str, table: &Table) -> Result<String> {
        let gaps = table.map.gaps();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "name": name,
                "description": table.description,
                "buckets": table.map.iter().map(bucket_json).collect::<Vec<_>>(),
                "gaps": gaps
                    .iter()
                    .map(|(start, end)| json!([bound_json(**start), bound_json(**end)]))
                    .collect::<Vec<_>>(),
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Min", "Max", "Value"]);
                for bucket in &table.map {
                    builder.push_record([
                        bucket.min.to_string(),
                        bucket.max.to_string(),
                        bucket.value.clone(),
                    ]);
                }

                let mut lines = Vec::new();
                if let Some(description) = &table.description {
                    lines.push(self.info(&format!("{}: {}", name, description)));
                }
                lines.push(self.render(builder));
                for (start, end) in gaps {
                    lines.push(self.warning(&format!("Gap: [{}, {}) matches no bucket", start, end)));
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(table
                .map
                .iter()
                .map(|bucket| bucket.value.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the validation report for a whole file.
    pub fn format_check(&self, registry: &Registry) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report: Vec<serde_json::Value> = registry
                    .iter()
                    .map(|(name, table)| {
                        json!({
                            "name": name,
                            "buckets": table.map.len(),
                            "gaps": table.map.gaps().len(),
                            "min": bound_json(table.map.first().min),
                            "max": bound_json(table.map.last().max),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Table", "Buckets", "Gaps", "Span"]);
                for (name, table) in registry.iter() {
                    builder.push_record([
                        name.to_string(),
                        table.map.len().to_string(),
                        table.map.gaps().len().to_string(),
                        format!("[{}, {})", table.map.first().min, table.map.last().max),
                    ]);
                }

                Ok(format!(
                    "{}\n{}",
                    self.render(builder),
                    self.success(&format!("{} table(s) valid", registry.len()))
                ))
            }
            OutputFormat::Quiet => Ok(registry.names().collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format the table listing.
    pub fn format_list(&self, registry: &Registry) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let tables: Vec<serde_json::Value> = registry
                    .iter()
                    .map(|(name, table)| json!({ "name": name, "description": table.description }))
                    .collect();
                Ok(serde_json::to_string_pretty(&tables)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Table", "Description"]);
                for (name, table) in registry.iter() {
                    builder.push_record([
                        name.to_string(),
                        table.description.clone().unwrap_or_default(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(registry.names().collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
