//! Roadmap schema definitions.
//!
//! These structs map one-to-one onto the roadmap document produced by the
//! upstream generator. Every field is `#[serde(default)]` so that a field the
//! generator left out reads as empty rather than failing the load; the
//! checkers then report it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root roadmap document: ordered phases of units of work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Roadmap {
    /// Roadmap identifier.
    pub id: String,

    /// Phases in execution order.
    pub phases: Vec<Phase>,
}

/// A phase groups units and carries an optional quality gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Phase {
    /// Phase identifier.
    pub id: String,

    /// Units in this phase, in listed order.
    pub units: Vec<Unit>,

    /// Completion gate for the phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<Gate>,
}

/// Phase-level completion threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Gate {
    /// Minimum quality score required to close the phase.
    pub omega_floor: f64,

    /// Whether tests must pass before the phase closes.
    pub test_required: bool,

    /// Whether the build must pass before the phase closes.
    pub build_required: bool,
}

/// The atomic work item of a roadmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Unit {
    /// Unique identifier within the roadmap.
    pub id: String,

    /// Short title.
    pub title: String,

    /// Id of the phase this unit belongs to.
    pub phase: String,

    /// Position within the phase.
    pub sequence: u32,

    /// Short role code (e.g. `ENG`, `DOC`).
    pub role: String,

    /// Human-readable role name.
    pub role_name: String,

    /// Label of the execution agent class performing the unit.
    pub model: String,

    /// Unitless effort estimate.
    pub effort: f64,

    /// Tools the unit uses.
    pub tools: Vec<ToolRef>,

    /// Skill identifiers the unit relies on.
    pub skills: Vec<String>,

    /// Ordered work instructions.
    pub steps: Vec<Step>,

    /// Artifacts the unit produces.
    pub deliverables: Vec<Deliverable>,

    /// Ids of units that must complete first.
    pub dependencies: Vec<String>,

    /// Conditions that must hold before starting.
    pub entry_conditions: Vec<String>,

    /// Conditions that must hold on completion.
    pub exit_conditions: Vec<String>,

    /// Recovery instruction if the unit has to be abandoned.
    pub rollback: String,

    pub creates_skill: bool,
    pub creates_script: bool,
    pub creates_hook: bool,
    pub creates_command: bool,
}

/// Reference to a tool by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ToolRef {
    pub tool: String,
}

impl ToolRef {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

/// One instruction within a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Step {
    /// 1-based step number.
    pub number: u32,

    /// Imperative instruction text.
    pub instruction: String,

    /// Tool invocations the step performs. Their shape belongs to the
    /// executor, so they are kept as raw values.
    pub tool_calls: Vec<serde_json::Value>,
}

/// An artifact produced by a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Deliverable {
    pub path: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,
}

/// The four indexing flags a unit carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexFlag {
    Skill,
    Script,
    Hook,
    Command,
}

impl IndexFlag {
    /// All flags, in field order.
    pub const ALL: [IndexFlag; 4] = [
        IndexFlag::Skill,
        IndexFlag::Script,
        IndexFlag::Hook,
        IndexFlag::Command,
    ];

    /// Name of the boolean field on [`Unit`].
    pub fn field_name(self) -> &'static str {
        match self {
            IndexFlag::Skill => "creates_skill",
            IndexFlag::Script => "creates_script",
            IndexFlag::Hook => "creates_hook",
            IndexFlag::Command => "creates_command",
        }
    }

    /// Keyword whose presence in a deliverable implies the flag.
    pub fn keyword(self) -> &'static str {
        match self {
            IndexFlag::Skill => "skill",
            IndexFlag::Script => "script",
            IndexFlag::Hook => "hook",
            IndexFlag::Command => "command",
        }
    }

    /// Find the flag whose field name appears in `text`.
    pub fn named_in(text: &str) -> Option<IndexFlag> {
        Self::ALL
            .into_iter()
            .find(|flag| text.contains(flag.field_name()))
    }
}

impl std::fmt::Display for IndexFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl Roadmap {
    /// Iterate over every unit together with the phase that lists it.
    pub fn units(&self) -> impl Iterator<Item = (&Phase, &Unit)> {
        self.phases
            .iter()
            .flat_map(|phase| phase.units.iter().map(move |unit| (phase, unit)))
    }

    /// Total number of units across all phases.
    pub fn unit_count(&self) -> usize {
        self.phases.iter().map(|p| p.units.len()).sum()
    }

    /// Find a unit by id.
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units().map(|(_, u)| u).find(|u| u.id == id)
    }

    /// Find a unit by id for modification.
    pub fn unit_mut(&mut self, id: &str) -> Option<&mut Unit> {
        self.phases
            .iter_mut()
            .flat_map(|p| p.units.iter_mut())
            .find(|u| u.id == id)
    }
}

impl Unit {
    /// Read one of the indexing flags.
    pub fn flag(&self, flag: IndexFlag) -> bool {
        match flag {
            IndexFlag::Skill => self.creates_skill,
            IndexFlag::Script => self.creates_script,
            IndexFlag::Hook => self.creates_hook,
            IndexFlag::Command => self.creates_command,
        }
    }

    /// Set one of the indexing flags.
    pub fn set_flag(&mut self, flag: IndexFlag, value: bool) {
        match flag {
            IndexFlag::Skill => self.creates_skill = value,
            IndexFlag::Script => self.creates_script = value,
            IndexFlag::Hook => self.creates_hook = value,
            IndexFlag::Command => self.creates_command = value,
        }
    }

    /// Whether this unit lists `id` among its dependencies.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }
}

/// Location label for a unit: its id, or a positional label when the id is blank.
pub fn unit_location(phase: &Phase, unit: &Unit) -> String {
    if unit.id.trim().is_empty() {
        let index = phase
            .units
            .iter()
            .position(|u| std::ptr::eq(u, unit))
            .unwrap_or_default();
        format!("{}#{}", phase.id, index + 1)
    } else {
        unit.id.clone()
    }
}
