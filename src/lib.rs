//! IAM policy `Sid` validation for CloudFormation templates.
//!
//! Finds the policy documents embedded in IAM resources (`AWS::IAM::Group`,
//! `ManagedPolicy`, `Policy`, `Role`, `User`), expands `Fn::If` conditionals
//! into every branch, and reports statement ids that use characters outside
//! `A-Z`, `a-z`, `0-9` or repeat within one document (rule `W2512`).
//!
//! ```text
//! parse(text) → Template → validate(template) → ValidationResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! Resources:
//!   Role:
//!     Type: AWS::IAM::Role
//!     Properties:
//!       Policies:
//!         - PolicyName: p1
//!           PolicyDocument:
//!             Statement:
//!               - Sid: ok1
//!               - Sid: "bad!"
//!               - Sid: ok1
//! "#;
//!
//! let result = cfn_iam_sid::lint(yaml).expect("valid template");
//! for finding in result.findings() {
//!     println!("{}", finding);
//! }
//! assert_eq!(result.warnings.len(), 2);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `yaml`  | yes     | YAML template input via [`serde_saphyr`]. JSON input is always accepted. |

pub mod enums;
pub mod error;
pub mod parse;
pub mod policy;
pub mod registry;
pub mod resolve;
pub mod rule;
pub mod sid;
pub mod types;
pub mod validate;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use resolve::{DocumentContext, TemplateContext};
pub use rule::Rule;
pub use sid::SidRule;
pub use validate::validate;

/// Convenience entry point composing parse → validate.
///
/// # Errors
///
/// Returns the [`ParseError`] if the template cannot be loaded. Findings are
/// never errors of this function; inspect the returned [`ValidationResult`].
pub fn lint(input: &str) -> Result<ValidationResult, ParseError> {
    let template = parse::parse(input)?;
    Ok(validate::validate(&template))
}
