//! Roadmap builders shared by unit tests.

use serde_json::json;

use crate::roadmap::{Deliverable, Gate, Phase, Roadmap, Step, ToolRef, Unit};

/// A unit that every checker accepts.
pub fn clean_unit(id: &str) -> Unit {
    Unit {
        id: id.to_string(),
        title: format!("Implement {}", id),
        phase: "P1".to_string(),
        sequence: 1,
        role: "ENG".to_string(),
        role_name: "Engineer".to_string(),
        model: "sonnet-4".to_string(),
        effort: 3.0,
        tools: vec![ToolRef::new("bash")],
        skills: vec!["testing".to_string()],
        steps: vec![Step {
            number: 1,
            instruction: "Run cargo test --all".to_string(),
            tool_calls: vec![json!({"tool": "bash", "args": "cargo test --all"})],
        }],
        deliverables: vec![Deliverable {
            path: "src/lib.rs".to_string(),
            kind: "source".to_string(),
            description: "Library root".to_string(),
        }],
        dependencies: vec![],
        entry_conditions: vec!["Repository cloned".to_string()],
        exit_conditions: vec!["cargo test passes".to_string()],
        rollback: "git checkout -- src/lib.rs".to_string(),
        creates_skill: false,
        creates_script: false,
        creates_hook: false,
        creates_command: false,
    }
}

/// A gate that satisfies gate coverage.
pub fn strict_gate() -> Gate {
    Gate {
        omega_floor: 0.9,
        test_required: true,
        build_required: true,
    }
}

/// A single gated phase `P1` holding `units`.
pub fn roadmap(units: Vec<Unit>) -> Roadmap {
    Roadmap {
        id: "RM-TEST".to_string(),
        phases: vec![Phase {
            id: "P1".to_string(),
            units,
            gate: Some(strict_gate()),
        }],
    }
}

/// Make each unit depend on the one listed before it.
pub fn chain(mut units: Vec<Unit>) -> Vec<Unit> {
    for i in 1..units.len() {
        let previous = units[i - 1].id.clone();
        units[i].sequence = i as u32 + 1;
        units[i].dependencies.push(previous);
    }
    units
}
