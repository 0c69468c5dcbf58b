//! Integration tests for config module public API.

use scrutineer::config::{load_config, load_merged_config, PassMode, ScrutinyConfig};
use scrutineer::roadmap::Roadmap;
use scrutineer::scrutiny::{scrutinize, GapCategory, Severity};
use scrutineer::ScrutinyError;
use std::fs;
use tempfile::TempDir;

fn write_layer(root: &std::path::Path, name: &str, content: &str) {
    let dir = root.join(".scrutineer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

const TOOLING_ROADMAP: &str = r#"
id: RM-TOOLS
phases:
  - id: P1
    units:
      - id: U-1
        tools:
          - tool: deploy-bot
          - tool: acme/push
"#;

#[test]
fn local_layer_overrides_project_layer() {
    let temp = TempDir::new().unwrap();
    write_layer(
        temp.path(),
        "config.yml",
        "min_passes: 2\nmax_passes: 4\nescalation_rule:\n  from_pass: 2\n",
    );
    write_layer(temp.path(), "config.local.yml", "max_passes: 6\n");

    let config = load_merged_config(temp.path()).unwrap();

    assert_eq!(config.min_passes, 2);
    assert_eq!(config.max_passes, 6);
    assert_eq!(config.escalation_rule.from_pass, 2);
    assert_eq!(config.escalation_rule.marker, "[ESCALATED]");
}

#[test]
fn explicit_path_replaces_discovery() {
    let temp = TempDir::new().unwrap();
    write_layer(temp.path(), "config.yml", "pass_mode: iterative\n");
    let explicit = temp.path().join("ci.yml");
    fs::write(&explicit, "pass_mode: single\n").unwrap();

    let config = load_config(temp.path(), Some(&explicit)).unwrap();

    assert_eq!(config.pass_mode, PassMode::Single);
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    write_layer(temp.path(), "config.yml", "min_passes: 5\nmax_passes: 2\n");

    let err = load_merged_config(temp.path()).unwrap_err();

    assert!(matches!(err, ScrutinyError::ConfigValidation { .. }));
}

#[test]
fn extra_tools_extend_allow_list() {
    let roadmap: Roadmap = serde_yaml::from_str(TOOLING_ROADMAP).unwrap();
    let tool_gaps = |config: &ScrutinyConfig| {
        scrutinize(&roadmap, config)
            .unresolved_gaps
            .iter()
            .filter(|g| g.category == GapCategory::MissingTools)
            .count()
    };

    assert_eq!(tool_gaps(&ScrutinyConfig::default()), 2);

    let config = ScrutinyConfig {
        extra_tools: vec!["deploy-bot".to_string()],
        extra_tool_prefixes: vec!["acme/".to_string()],
        ..Default::default()
    };
    assert_eq!(tool_gaps(&config), 0);
}

#[test]
fn category_roster_filters_gaps() {
    let roadmap: Roadmap = serde_yaml::from_str(TOOLING_ROADMAP).unwrap();
    let config = ScrutinyConfig {
        categories: vec![GapCategory::MissingTools],
        ..Default::default()
    };

    let log = scrutinize(&roadmap, &config);

    assert!(!log.unresolved_gaps.is_empty());
    assert!(log
        .unresolved_gaps
        .iter()
        .all(|g| g.category == GapCategory::MissingTools && g.severity == Severity::Major));
}
