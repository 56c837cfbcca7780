//! IAM policy document checks: Sid character set and per-document uniqueness.
//!
//! Only `Statement[*].Sid` is inspected. Every other part of the policy
//! grammar is left to other rules, and any unexpected shape is skipped
//! rather than reported.

use crate::enums::FindingKind;
use crate::error::{Finding, Severity};
use crate::resolve::DocumentContext;
use crate::sid::RULE_ID;
use crate::types::{Path, Statements};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::trace;

// Zero repetitions allowed: an empty Sid passes.
static SID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").unwrap());

/// Returns true when `sid` contains only `A-Z`, `a-z` and `0-9`.
pub fn is_valid_sid(sid: &str) -> bool {
    SID_RE.is_match(sid)
}

/// Check one policy document value found at `path`.
///
/// The value is resolved twice, once for the container and once for the
/// document itself, since a context may only expand one conditional layer
/// per call. Each resolved document is checked with its own Sid registry.
pub fn check_policy_document(
    ctx: &dyn DocumentContext,
    value: &Value,
    path: &Path,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !value.is_object() {
        return findings;
    }

    for (outer, outer_path) in ctx.resolve_deferred(value, path) {
        for (policy, policy_path) in ctx.resolve_deferred(outer, &outer_path) {
            check_statements(policy, &policy_path, &mut findings);
        }
    }

    findings
}

fn check_statements(policy: &Value, policy_path: &Path, findings: &mut Vec<Finding>) {
    let Some(statement) = policy.as_object().and_then(|p| p.get("Statement")) else {
        return;
    };
    let Some(statements) = Statements::classify(statement) else {
        return;
    };

    let records = statements.records();
    trace!(path = %policy_path, statements = records.len(), "checking policy document");

    // Findings anchor on the resolved document, not on the statement.
    let sid_path = policy_path.join("Sid");
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        let Some(sid) = record.as_object().and_then(|r| r.get("Sid")) else {
            continue;
        };
        // Non-string Sids are a type problem for another rule.
        let Some(sid) = sid.as_str() else {
            continue;
        };

        if !is_valid_sid(sid) {
            findings.push(Finding::new(
                RULE_ID,
                FindingKind::InvalidSidCharacters,
                Severity::Warning,
                sid_path.clone(),
            ));
        }
        if !seen.insert(sid) {
            findings.push(Finding::new(
                RULE_ID,
                FindingKind::DuplicateSid,
                Severity::Warning,
                sid_path.clone(),
            ));
        }
    }
}
