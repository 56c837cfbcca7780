use crate::enums::ResourceKind;
use crate::error::Finding;
use crate::resolve::DocumentContext;
use crate::types::Path;
use serde_json::Value;

/// A template rule that inspects the properties of individual resources.
///
/// Rules are stateless: every call works only on its arguments, so one
/// instance can serve many resources, including from several threads.
pub trait Rule: Send + Sync {
    /// Stable rule identifier, e.g. `W2512`.
    fn id(&self) -> &'static str;

    fn short_description(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Documentation backing the rule.
    fn source_url(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str];

    /// Resource kinds this rule is dispatched for.
    fn resource_kinds(&self) -> &'static [ResourceKind];

    fn applies_to(&self, kind: ResourceKind) -> bool {
        self.resource_kinds().contains(&kind)
    }

    /// Check one resource's `Properties` mapping found at `path`.
    fn match_resource_properties(
        &self,
        properties: &Value,
        kind: ResourceKind,
        path: &Path,
        ctx: &dyn DocumentContext,
    ) -> Vec<Finding>;
}
