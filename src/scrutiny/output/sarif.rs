//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.
//! Roadmap findings have no file positions, so results carry logical
//! locations naming the unit or phase ids.

use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

use super::ReportFormatter;
use crate::scrutiny::{GapCategory, ScrutinyLog, Severity};

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats scrutiny output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    properties: SarifProperties,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLogicalLocation {
    name: String,
    fully_qualified_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifProperties {
    gap_id: String,
    severity: Severity,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical | Severity::Major => "error",
            Severity::Minor => "warning",
            Severity::Info => "note",
        }
    }

    fn rule_description(category: GapCategory) -> String {
        format!("Roadmap gap: {}", category.as_str().replace('_', " "))
    }
}

impl ReportFormatter for SarifFormatter {
    fn format<W: Write>(&self, log: &ScrutinyLog, writer: &mut W) -> std::io::Result<()> {
        let categories: BTreeSet<GapCategory> =
            log.unresolved_gaps.iter().map(|g| g.category).collect();

        let rules: Vec<_> = categories
            .into_iter()
            .map(|category| SarifRule {
                id: category.as_str().to_string(),
                short_description: SarifMessage {
                    text: Self::rule_description(category),
                },
            })
            .collect();

        let results: Vec<_> = log
            .unresolved_gaps
            .iter()
            .map(|gap| {
                let logical_locations = gap
                    .location
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| SarifLogicalLocation {
                        name: id.to_string(),
                        fully_qualified_name: format!("{}/{}", log.roadmap_id, id),
                    })
                    .collect();

                let text = match &gap.suggestion {
                    Some(suggestion) => format!("{} ({})", gap.description, suggestion),
                    None => gap.description.clone(),
                };

                SarifResult {
                    rule_id: gap.category.as_str().to_string(),
                    level: Self::severity_to_level(gap.severity),
                    message: SarifMessage { text },
                    locations: vec![SarifLocation { logical_locations }],
                    properties: SarifProperties {
                        gap_id: gap.id.clone(),
                        severity: gap.severity,
                    },
                }
            })
            .collect();

        let sarif = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &sarif).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrutiny::output::fixtures::{failing_log, passing_log};

    fn render(log: &ScrutinyLog) -> serde_json::Value {
        let mut output = Vec::new();
        SarifFormatter::new("scrutineer", "1.0.0")
            .format(log, &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_sarif() {
        let parsed = render(&failing_log());

        assert_eq!(parsed["version"], "2.1.0");
        assert!(parsed["runs"].is_array());
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "scrutineer");
    }

    #[test]
    fn maps_severity_to_sarif_level() {
        assert_eq!(SarifFormatter::severity_to_level(Severity::Critical), "error");
        assert_eq!(SarifFormatter::severity_to_level(Severity::Major), "error");
        assert_eq!(SarifFormatter::severity_to_level(Severity::Minor), "warning");
        assert_eq!(SarifFormatter::severity_to_level(Severity::Info), "note");
    }

    #[test]
    fn one_rule_per_category() {
        let parsed = render(&failing_log());
        let rules = parsed["runs"][0]["tool"]["driver"]["rules"]
            .as_array()
            .unwrap();

        let ids: Vec<&str> = rules.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["missing_deps", "missing_rollback"]);
    }

    #[test]
    fn results_carry_logical_locations() {
        let parsed = render(&failing_log());
        let result = &parsed["runs"][0]["results"][0];

        assert_eq!(result["ruleId"], "missing_deps");
        assert_eq!(result["level"], "error");
        let location = &result["locations"][0]["logicalLocations"][0];
        assert_eq!(location["name"], "U-1");
        assert_eq!(location["fullyQualifiedName"], "RM-TEST/U-1");
        assert_eq!(result["properties"]["severity"], "CRITICAL");
    }

    #[test]
    fn passing_log_has_no_results() {
        let parsed = render(&passing_log());
        assert!(parsed["runs"][0]["results"].as_array().unwrap().is_empty());
    }
}
