//! Closed enumerations used throughout the rule.
//!
//! Resource kinds outside this set are never dispatched to the rule; the
//! template `Type` string is kept as-is on [`crate::types::Resource`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds that carry embedded IAM policy documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "AWS::IAM::Group")]
    IamGroup,
    #[serde(rename = "AWS::IAM::ManagedPolicy")]
    IamManagedPolicy,
    #[serde(rename = "AWS::IAM::Policy")]
    IamPolicy,
    #[serde(rename = "AWS::IAM::Role")]
    IamRole,
    #[serde(rename = "AWS::IAM::User")]
    IamUser,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::IamGroup,
        ResourceKind::IamManagedPolicy,
        ResourceKind::IamPolicy,
        ResourceKind::IamRole,
        ResourceKind::IamUser,
    ];

    /// The template `Type` string for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            ResourceKind::IamGroup => "AWS::IAM::Group",
            ResourceKind::IamManagedPolicy => "AWS::IAM::ManagedPolicy",
            ResourceKind::IamPolicy => "AWS::IAM::Policy",
            ResourceKind::IamRole => "AWS::IAM::Role",
            ResourceKind::IamUser => "AWS::IAM::User",
        }
    }

    /// Look up a kind by its template `Type` string. Matching is exact.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Where a resource keeps its policy content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyShape {
    /// A single `PolicyDocument` on the resource properties.
    Direct,
    /// A `Policies` list of named attachments, each with a `PolicyDocument`.
    Indirect,
}

/// The two problems this rule reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    InvalidSidCharacters,
    DuplicateSid,
}

impl FindingKind {
    pub fn message(self) -> &'static str {
        match self {
            FindingKind::InvalidSidCharacters => {
                "basic alphanumeric characters (A-Z,a-z,0-9) are the only allowed characters in the Sid value"
            }
            FindingKind::DuplicateSid => "IAM Sid values should be unique",
        }
    }
}
