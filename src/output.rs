//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Full report produced by the demo pipeline run
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Days-until-expiration threshold used for the expiring-items section
    pub threshold: i64,
    /// Validation outcome per inventory record
    pub validation: Vec<ValidationLine>,
    /// Days until expiration per inventory record
    pub expiration: Vec<ExpirationLine>,
    /// Names of records expiring within the threshold, in inventory order
    pub expiring_soon: Vec<String>,
    /// Records ordered soonest-first by expiration date
    pub sorted_by_expiration: Vec<SortedLine>,
    /// Recommended donations, in inventory order
    pub matches: Vec<MatchLine>,
    /// Display-formatted line per inventory record
    pub formatted: Vec<String>,
}

/// Validation outcome for one record
#[derive(Debug, Serialize)]
pub struct ValidationLine {
    /// Record display name
    pub name: String,
    /// Whether the record passed validation
    pub is_valid: bool,
    /// Validation message (fixed success text or the first failure)
    pub message: String,
}

/// Days-until-expiration for one record
#[derive(Debug, Serialize)]
pub struct ExpirationLine {
    /// Record display name
    pub name: String,
    /// Whole days until expiration (negative when past, -1 also on
    /// unparseable dates)
    pub days: i64,
}

/// One record in expiration order
#[derive(Debug, Serialize)]
pub struct SortedLine {
    /// Record display name
    pub name: String,
    /// The record's expiration date string
    pub expiration_date: String,
}

/// One recommended donation
#[derive(Debug, Serialize)]
pub struct MatchLine {
    /// Display name of the matched item
    pub item: String,
    /// Display name of the receiving recipient
    pub recipient: String,
}

impl DemoReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("===== LARDER INVENTORY REPORT =====");

        println!("\n1. Validating Food Items:");
        for line in &self.validation {
            let status = if line.is_valid {
                line.message.normal()
            } else {
                line.message.red()
            };
            println!("  {}: {}", line.name, status);
        }

        println!("\n2. Days Until Expiration:");
        for line in &self.expiration {
            println!("  {}: {} days", line.name, colorize_days(line.days));
        }

        println!(
            "\n3. Identifying Expiring Items (within {} days):",
            self.threshold
        );
        if self.expiring_soon.is_empty() {
            println!("  (none)");
        }
        for name in &self.expiring_soon {
            println!("  {} - {}", name, "Expires soon".yellow());
        }

        println!("\n4. Sorting Items by Expiration Date:");
        for line in &self.sorted_by_expiration {
            println!("  {} - {}", line.name, line.expiration_date);
        }

        println!("\n5. Finding Donation Matches:");
        if self.matches.is_empty() {
            println!("  (none)");
        }
        for line in &self.matches {
            println!("  {} -> {}", line.item, line.recipient.green());
        }

        println!("\n6. Formatted Food Items:");
        for line in &self.formatted {
            println!("  {line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn colorize_days(days: i64) -> colored::ColoredString {
    let text = days.to_string();
    if days < 0 {
        text.red()
    } else if days <= 2 {
        text.yellow()
    } else {
        text.normal()
    }
}
