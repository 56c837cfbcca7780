//! Runs rules over every resource in a template.
//!
//! Returns **all** findings, not just the first. Validation does not modify
//! the template.

use crate::enums::ResourceKind;
use crate::error::ValidationResult;
use crate::resolve::{DocumentContext, TemplateContext};
use crate::rule::Rule;
use crate::sid::SidRule;
use crate::types::Template;
use tracing::debug;

/// Rules run by [`validate`].
pub static DEFAULT_RULES: &[&dyn Rule] = &[&SidRule];

/// Validate a template with [`DEFAULT_RULES`] and the default context.
pub fn validate(template: &Template) -> ValidationResult {
    validate_with(template, DEFAULT_RULES, &TemplateContext)
}

/// Validate a template with an explicit rule set and document context.
///
/// Findings are ordered by resource (template order), then by rule, then in
/// the order each rule walked the resource.
pub fn validate_with(
    template: &Template,
    rules: &[&dyn Rule],
    ctx: &dyn DocumentContext,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    for resource in template.resources() {
        let Some(type_name) = resource.type_name else {
            debug!(resource = resource.name, "resource has no Type, skipping");
            continue;
        };
        let Some(kind) = ResourceKind::from_type_name(type_name) else {
            continue;
        };
        let Some(properties) = resource.properties.filter(|p| p.is_object()) else {
            debug!(
                resource = resource.name,
                %kind,
                "resource has no Properties mapping, skipping"
            );
            continue;
        };

        let path = resource.properties_path();
        for rule in rules.iter().filter(|r| r.applies_to(kind)) {
            let findings = rule.match_resource_properties(properties, kind, &path, ctx);
            debug!(
                rule = rule.id(),
                resource = resource.name,
                %kind,
                findings = findings.len(),
                "checked resource"
            );
            for finding in findings {
                result.push(finding);
            }
        }
    }

    result
}
