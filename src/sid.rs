//! Rule W2512: IAM policy Sid syntax.
//!
//! Locates the policy documents embedded in IAM resources and hands each one
//! to [`check_policy_document`].

use crate::enums::{PolicyShape, ResourceKind};
use crate::error::Finding;
use crate::policy::check_policy_document;
use crate::registry::{ATTACHMENT_DOCUMENT_KEY, lookup_policy_property};
use crate::resolve::DocumentContext;
use crate::rule::Rule;
use crate::types::Path;
use serde_json::Value;
use tracing::debug;

pub const RULE_ID: &str = "W2512";

/// Checks Sid values in IAM policy documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidRule;

impl Rule for SidRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn short_description(&self) -> &'static str {
        "Check IAM Resource Policies Sid syntax"
    }

    fn description(&self) -> &'static str {
        "See if the elements inside an IAM Resource policy are configured correctly."
    }

    fn source_url(&self) -> &'static str {
        "https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_policies_grammar.html"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["properties", "iam"]
    }

    fn resource_kinds(&self) -> &'static [ResourceKind] {
        &ResourceKind::ALL
    }

    fn match_resource_properties(
        &self,
        properties: &Value,
        kind: ResourceKind,
        path: &Path,
        ctx: &dyn DocumentContext,
    ) -> Vec<Finding> {
        let Some(entry) = lookup_policy_property(kind) else {
            return Vec::new();
        };
        let validator =
            |value: &Value, value_path: &Path| check_policy_document(ctx, value, value_path);

        match entry.shape {
            PolicyShape::Direct => {
                ctx.check_property(properties, entry.property, path, &validator)
            }
            PolicyShape::Indirect => {
                let Some(attachments) = properties.get(entry.property) else {
                    return Vec::new();
                };
                let Some(attachments) = attachments.as_array() else {
                    debug!(
                        %path,
                        property = entry.property,
                        "policy list is not a sequence, skipping"
                    );
                    return Vec::new();
                };

                let list_path = path.join(entry.property);
                let mut findings = Vec::new();
                for (index, attachment) in attachments.iter().enumerate() {
                    if !attachment.is_object() {
                        continue;
                    }
                    findings.extend(ctx.check_property(
                        attachment,
                        ATTACHMENT_DOCUMENT_KEY,
                        &list_path.join(index),
                        &validator,
                    ));
                }
                findings
            }
        }
    }
}
