use crate::enums::{PolicyShape, ResourceKind};

/// A registry entry mapping a resource kind to the property that holds its
/// policy content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyPropertyEntry {
    pub kind: ResourceKind,
    pub property: &'static str,
    pub shape: PolicyShape,
}

/// Resource kinds inspected by the Sid rule, as a compile-time constant.
pub static POLICY_PROPERTY_REGISTRY: &[PolicyPropertyEntry] = &[
    PolicyPropertyEntry {
        kind: ResourceKind::IamGroup,
        property: "Policies",
        shape: PolicyShape::Indirect,
    },
    PolicyPropertyEntry {
        kind: ResourceKind::IamManagedPolicy,
        property: "PolicyDocument",
        shape: PolicyShape::Direct,
    },
    PolicyPropertyEntry {
        kind: ResourceKind::IamPolicy,
        property: "PolicyDocument",
        shape: PolicyShape::Direct,
    },
    PolicyPropertyEntry {
        kind: ResourceKind::IamRole,
        property: "Policies",
        shape: PolicyShape::Indirect,
    },
    PolicyPropertyEntry {
        kind: ResourceKind::IamUser,
        property: "Policies",
        shape: PolicyShape::Indirect,
    },
];

/// Key under each `Policies` attachment that holds the document.
pub const ATTACHMENT_DOCUMENT_KEY: &str = "PolicyDocument";

/// Look up the policy property entry for a resource kind.
pub fn lookup_policy_property(kind: ResourceKind) -> Option<&'static PolicyPropertyEntry> {
    POLICY_PROPERTY_REGISTRY.iter().find(|e| e.kind == kind)
}

