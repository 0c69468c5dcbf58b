//! Rule tables consulted by the checkers.
//!
//! Every literal word list, allow-list, and mapping the checkers use lives
//! here as data, with small lookup helpers so the tables can be tested on
//! their own.

use regex::Regex;
use std::sync::LazyLock;

/// Values that mark a field as not actually filled in (compared case-insensitively).
pub const PLACEHOLDERS: &[&str] = &["tbd", "todo", "n/a"];

/// Adjectives that make an exit condition unverifiable.
pub const VAGUE_ADJECTIVES: &[&str] = &[
    "good",
    "proper",
    "appropriate",
    "nice",
    "decent",
    "reasonable",
];

/// Phrases that make a step instruction non-committal.
pub const HEDGE_PHRASES: &[&str] = &[
    "consider",
    "think about",
    "maybe",
    "possibly",
    "might want to",
];

/// Rollback texts that name an intent without saying how (whole-string match).
pub const VAGUE_ROLLBACKS: &[&str] = &["undo", "revert", "rollback", "undo everything"];

/// Verbs a step instruction may start with.
pub const IMPERATIVE_VERBS: &[&str] = &[
    "add", "analyze", "append", "apply", "audit", "benchmark", "build", "bump", "call", "check",
    "commit", "compare", "compile", "configure", "confirm", "copy", "create", "define", "delete",
    "deploy", "design", "disable", "document", "download", "draft", "edit", "enable", "ensure",
    "execute", "export", "extract", "fetch", "fix", "format", "generate", "implement", "import",
    "initialize", "insert", "install", "integrate", "invoke", "lint", "list", "load", "measure",
    "merge", "migrate", "mark", "modify", "move", "open", "parse", "profile", "publish", "push",
    "query", "read", "record", "refactor", "register", "release", "remove", "rename", "replace",
    "review", "run", "save", "scaffold", "search", "set", "tag", "test", "update", "upload",
    "validate", "verify", "wire", "write",
];

/// Tool names are accepted when they start with one of these dispatcher prefixes.
pub const TOOL_PREFIXES: &[&str] = &[
    "mcp__", "mcp:", "cli:", "script:", "skill:", "hook:", "command:",
];

/// Tool names accepted on their own.
pub const STANDALONE_TOOLS: &[&str] = &[
    "bash", "edit_file", "git", "glob", "grep", "read_file", "task", "web_fetch", "web_search",
    "write_file",
];

/// The known-skill roster.
pub const KNOWN_SKILLS: &[&str] = &[
    "api-design",
    "code-review",
    "database",
    "debugging",
    "devops",
    "documentation",
    "frontend",
    "performance",
    "refactoring",
    "rust-development",
    "security-audit",
    "testing",
];

/// Canonical role codes and the model family each is expected to run on.
pub const ROLE_FAMILIES: &[(&str, &str)] = &[
    ("ARC", "opus"),
    ("PLN", "opus"),
    ("SEC", "opus"),
    ("ENG", "sonnet"),
    ("TST", "sonnet"),
    ("OPS", "sonnet"),
    ("REV", "sonnet"),
    ("DOC", "haiku"),
];

/// Roles whose work is documentation-style; pairing them with a larger model
/// is wasteful rather than wrong.
pub const DOCUMENTATION_ROLES: &[&str] = &["DOC"];

/// Model families by capability tier (higher is larger).
pub const MODEL_TIERS: &[(&str, u8)] = &[("haiku", 1), ("sonnet", 2), ("opus", 3)];

/// Command names that make an exit condition concrete.
pub const COMMAND_NAMES: &[&str] = &[
    "cargo", "docker", "git", "go", "jest", "make", "npm", "npx", "pnpm", "pytest", "tsc",
    "vitest", "yarn",
];

/// Words that make an exit condition concrete.
pub const ARTIFACT_WORDS: &[&str] = &[
    "pass", "passes", "passing", "fail", "fails", "failing", "score",
];

/// Extensions that make a token in free text look like a file path.
pub const FILE_EXTENSIONS: &[&str] = &[
    "c", "cfg", "cpp", "css", "csv", "go", "h", "html", "ini", "java", "js", "json", "jsx", "kt",
    "lock", "md", "proto", "py", "rb", "rs", "sh", "sql", "swift", "toml", "ts", "tsx", "txt",
    "yaml", "yml",
];

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(
    RE_PATH_TOKEN,
    r"(?:[A-Za-z0-9_.\-]+/)*[A-Za-z0-9_\-]+\.([A-Za-z0-9]{1,6})\b"
);

/// Whether a field value is blank or a placeholder sentinel
/// (`TBD`, `TODO`, `N/A`, or text wrapped in square brackets).
pub fn is_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    PLACEHOLDERS.contains(&lowered.as_str())
}

/// Lowercased words of `text`, split on anything that is not alphanumeric.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// First vague adjective used in `text`, if any.
pub fn vague_adjective(text: &str) -> Option<&'static str> {
    let words = words(text);
    VAGUE_ADJECTIVES
        .iter()
        .copied()
        .find(|adj| words.iter().any(|w| w == adj))
}

/// First hedge phrase used in `text`, if any. Matches whole words only.
pub fn hedge_phrase(text: &str) -> Option<&'static str> {
    let normalized = format!(" {} ", words(text).join(" "));
    HEDGE_PHRASES
        .iter()
        .copied()
        .find(|phrase| normalized.contains(&format!(" {} ", phrase)))
}

/// Lowercased first word of `text`.
pub fn first_word(text: &str) -> Option<String> {
    words(text).into_iter().next()
}

/// Whether `text` starts with an approved imperative verb.
pub fn starts_with_imperative(text: &str) -> bool {
    first_word(text).is_some_and(|w| IMPERATIVE_VERBS.contains(&w.as_str()))
}

/// Whether a rollback text is one of the known-vague whole-string forms.
pub fn is_vague_rollback(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    VAGUE_ROLLBACKS.contains(&lowered.as_str())
}

/// Expected model family for a role code.
pub fn expected_family(role: &str) -> Option<&'static str> {
    let code = role.trim().to_uppercase();
    ROLE_FAMILIES
        .iter()
        .find(|(r, _)| *r == code)
        .map(|(_, family)| *family)
}

/// Whether a role code is documentation-style.
pub fn is_documentation_role(role: &str) -> bool {
    let code = role.trim().to_uppercase();
    DOCUMENTATION_ROLES.contains(&code.as_str())
}

/// Tier of the family a model label belongs to.
pub fn model_tier(model: &str) -> Option<u8> {
    let lowered = model.to_lowercase();
    MODEL_TIERS
        .iter()
        .find(|(family, _)| lowered.contains(family))
        .map(|(_, tier)| *tier)
}

/// Tier of a family name.
pub fn family_tier(family: &str) -> Option<u8> {
    MODEL_TIERS
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, tier)| *tier)
}

/// File-like path tokens mentioned in free text, in order of appearance,
/// without duplicates.
pub fn path_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for caps in RE_PATH_TOKEN.captures_iter(text) {
        let ext = caps[1].to_lowercase();
        if !FILE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }
        let token = caps[0].to_string();
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Whether a condition references something checkable: a file, a path, a
/// command, or a pass/fail or score outcome.
pub fn references_artifact(text: &str) -> bool {
    if text.contains('/') || text.contains('\\') || !path_tokens(text).is_empty() {
        return true;
    }
    words(text)
        .iter()
        .any(|w| COMMAND_NAMES.contains(&w.as_str()) || ARTIFACT_WORDS.contains(&w.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_detected() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("TBD"));
        assert!(is_placeholder("todo"));
        assert!(is_placeholder(" N/A "));
        assert!(is_placeholder("[describe rollback]"));
        assert!(!is_placeholder("git revert HEAD"));
        assert!(!is_placeholder("[draft] notes"));
    }

    #[test]
    fn vague_adjectives_match_whole_words() {
        assert_eq!(vague_adjective("Code is in GOOD shape"), Some("good"));
        assert_eq!(vague_adjective("Proper error handling"), Some("proper"));
        assert_eq!(vague_adjective("All goods shipped"), None);
        assert_eq!(vague_adjective("cargo test passes"), None);
    }

    #[test]
    fn hedge_phrases_match() {
        assert_eq!(
            hedge_phrase("Consider updating the config file"),
            Some("consider")
        );
        assert_eq!(hedge_phrase("You might want to rename it"), Some("might want to"));
        assert_eq!(hedge_phrase("Think about caching"), Some("think about"));
        assert_eq!(hedge_phrase("Update the config file"), None);
        assert_eq!(hedge_phrase("Reconsideration is not hedging"), None);
    }

    #[test]
    fn imperative_verbs() {
        assert!(starts_with_imperative("Update the config file"));
        assert!(starts_with_imperative("run: cargo test"));
        assert!(!starts_with_imperative("The config file is updated"));
        assert!(!starts_with_imperative(""));
    }

    #[test]
    fn vague_rollback_is_whole_string() {
        assert!(is_vague_rollback("Revert"));
        assert!(is_vague_rollback("  UNDO everything "));
        assert!(!is_vague_rollback("git checkout -- src/x.ts"));
        assert!(!is_vague_rollback("Revert commit abc123"));
    }

    #[test]
    fn role_family_table() {
        assert_eq!(ROLE_FAMILIES.len(), 8);
        assert_eq!(expected_family("ARC"), Some("opus"));
        assert_eq!(expected_family("eng"), Some("sonnet"));
        assert_eq!(expected_family("DOC"), Some("haiku"));
        assert_eq!(expected_family("XYZ"), None);
        assert!(is_documentation_role("doc"));
        assert!(!is_documentation_role("ENG"));
    }

    #[test]
    fn model_tiers() {
        assert_eq!(model_tier("haiku-3.6"), Some(1));
        assert_eq!(model_tier("Claude-Sonnet-4"), Some(2));
        assert_eq!(model_tier("opus-4"), Some(3));
        assert_eq!(model_tier("gpt"), None);
        assert_eq!(family_tier("opus"), Some(3));
    }

    #[test]
    fn path_tokens_filters_by_extension() {
        let tokens = path_tokens("Edit src/lib.rs and ./hooks/on-save.ts, e.g. version 1.2");
        assert_eq!(tokens, vec!["src/lib.rs", "./hooks/on-save.ts"]);
    }

    #[test]
    fn path_tokens_deduplicates() {
        let tokens = path_tokens("Write README.md then lint README.md");
        assert_eq!(tokens, vec!["README.md"]);
    }

    #[test]
    fn artifact_references() {
        assert!(references_artifact("cargo test passes"));
        assert!(references_artifact("Report written to docs/report.md"));
        assert!(references_artifact("Quality score above 0.9"));
        assert!(references_artifact("CHANGELOG.md updated"));
        assert!(!references_artifact("Everyone is happy"));
    }
}
