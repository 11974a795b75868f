//! Keyword vocabularies and case-insensitive substring matching.

use std::collections::BTreeSet;

/// Infrastructure-as-code tools and phrasing.
pub const IAC_TERMS: &[&str] = &[
    "infrastructure as code",
    "infrastructure-as-code",
    "iac",
    "configuration as code",
    "ansible",
    "terraform",
    "chef",
    "puppet",
    "pulumi",
    "docker",
    "dockerfile",
    "docker-compose",
    "docker compose",
    "docker-compose",
    "kubernetes",
    "k8s",
    "cloudformation",
    "cloud formation",
    "packer",
    "container",
    "containerization",
    "compose file",
    "ARM",
    "Juju",
    "Nomad",
    "TOSCA",
    "SaltStack",
    "CFEngine",
    "Heat",
];

/// Software quality concerns.
pub const QUALITY_TERMS: &[&str] = &[
    "quality",
    "bug",
    "defect",
    "fault",
    "smell",
    "code smell",
    "anti-pattern",
    "antipattern",
    "antipattern",
    "vulnerability",
    "vulnerabilit",
    "security",
    "misconfiguration",
    "mis-config",
    "misconfig",
    "analysis",
    "analyzing",
    "testing",
    "test",
    "validation",
    "validate",
    "practice",
    "practice(s)",
    "lint",
    "linter",
    "linting",
    "performance",
    "reliability",
    "maintainability",
];

/// Every term (lowercased) that occurs anywhere in `text`, ignoring case.
///
/// Plain substring containment with no word boundaries: `test` hits
/// `testing` and `contest` alike. Duplicate terms collapse.
pub fn find_matches(text: &str, terms: &[&str]) -> BTreeSet<String> {
    let text = text.to_lowercase();
    terms
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| text.contains(t.as_str()))
        .collect()
}
