//! Output formatting for the CLI.

use crate::error::Result;
use blomso_content::{CatalogIssue, Severity, SupporterGroup};
use blomso_domain::{Claim, ExternalLinks};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (ids only)
    Quiet,
}

/// Audit issue as printed in JSON mode
#[derive(Debug, Serialize)]
struct IssueRow {
    severity: &'static str,
    message: String,
}

impl From<&CatalogIssue> for IssueRow {
    fn from(issue: &CatalogIssue) -> Self {
        Self {
            severity: severity_name(issue.severity()),
            message: issue.to_string(),
        }
    }
}

fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
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

    /// Format a list of claims.
    pub fn format_claims(&self, claims: &[&Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(claims)?),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Quiet => Ok(claims
                .iter()
                .map(|c| c.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_claims_table(&self, claims: &[&Claim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Category", "Headline", "Value", "Tier", "Source"]);

        for claim in claims {
            builder.push_record([
                claim.id.clone(),
                claim.category.to_string(),
                claim.headline.clone(),
                format_value(claim),
                claim.evidence_tier.to_string(),
                claim.source_label.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format one claim with every attribute.
    pub fn format_claim(&self, claim: &Claim) -> Result<String> {
        if self.format != OutputFormat::Table {
            return self.format_claims(&[claim]);
        }

        let mut builder = Builder::default();
        let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

        builder.push_record(["ID".to_string(), claim.id.clone()]);
        builder.push_record(["Category".to_string(), claim.category.to_string()]);
        builder.push_record(["Headline".to_string(), claim.headline.clone()]);
        builder.push_record(["Detail".to_string(), optional(&claim.detail)]);
        builder.push_record(["Value".to_string(), format_value(claim)]);
        builder.push_record(["Evidence tier".to_string(), claim.evidence_tier.to_string()]);
        builder.push_record(["Source".to_string(), optional(&claim.source_label)]);
        builder.push_record(["Source URL".to_string(), optional(&claim.source_url)]);
        builder.push_record([
            "Traction".to_string(),
            if claim.is_traction_eligible() { "yes" } else { "no" }.to_string(),
        ]);
        if let Some(relationship) = claim.relationship {
            builder.push_record(["Relationship".to_string(), relationship.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        Ok(table.to_string())
    }

    /// Format supporters grouped by band.
    pub fn format_supporters(&self, groups: &[SupporterGroup<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(groups)?),
            OutputFormat::Quiet => Ok(groups
                .iter()
                .flat_map(|g| g.supporters.iter().map(|s| s.id.as_str()))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if groups.is_empty() {
                    return Ok(self.colorize("No supporters found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Band", "ID", "Name", "Link"]);
                for group in groups {
                    for supporter in &group.supporters {
                        builder.push_record([
                            group.label.to_string(),
                            supporter.id.clone(),
                            supporter.name.clone(),
                            supporter.href.clone().unwrap_or_default(),
                        ]);
                    }
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format external product links.
    pub fn format_links(&self, links: &ExternalLinks) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(links)?),
            OutputFormat::Quiet => Ok(links
                .iter()
                .map(|(_, link)| link.href.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Path", "Label", "Target", "Description"]);
                for (key, link) in links.iter() {
                    builder.push_record([
                        format!("/{}", key),
                        link.label.clone(),
                        link.href.clone(),
                        link.description.clone(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format audit findings. Empty in quiet mode when the catalog is clean.
    pub fn format_issues(&self, issues: &[CatalogIssue]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<IssueRow> = issues.iter().map(IssueRow::from).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(issues
                .iter()
                .map(|i| format!("{}: {}", severity_name(i.severity()), i))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if issues.is_empty() {
                    return Ok(self.success("Catalog is clean"));
                }

                Ok(issues
                    .iter()
                    .map(|issue| match issue.severity() {
                        Severity::Error => self.error(&issue.to_string()),
                        Severity::Warning => self.warning(&issue.to_string()),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
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

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a claim's value with its unit, or "-" when it has none.
pub fn format_value(claim: &Claim) -> String {
    let Some(value) = claim.value else {
        return "-".to_string();
    };

    let number = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };

    match claim.unit.as_deref() {
        Some("%") => format!("{}%", number),
        Some(unit) => format!("{} {}", number, unit),
        None => number,
    }
}
