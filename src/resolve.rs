//! Deferred-value resolution and property checking.
//!
//! Template values may be wrapped in `Fn::If` conditionals whose outcome is
//! only known at deploy time. Rules inspect every branch, so a value is
//! flattened into all of its concrete alternatives, each paired with the path
//! it was reached through.

use crate::error::Finding;
use crate::types::Path;
use serde_json::Value;

const FN_IF: &str = "Fn::If";
const REF: &str = "Ref";
const NO_VALUE: &str = "AWS::NoValue";

// ─── Deferred ───────────────────────────────────────────────────────────────

/// A template value classified by how it resolves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Deferred<'a> {
    /// Already concrete: resolves to itself.
    Concrete(&'a Value),
    /// `{"Fn::If": [condition, when_true, when_false]}`.
    Conditional {
        condition: &'a Value,
        branches: [&'a Value; 2],
    },
    /// `{"Ref": "AWS::NoValue"}`: the property is removed.
    NoValue,
    /// An `Fn::If` that is not a three-element list. Resolves to nothing.
    Malformed,
}

impl<'a> Deferred<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Deferred::Concrete(value);
        };
        if obj.len() != 1 {
            return Deferred::Concrete(value);
        }
        if let Some(args) = obj.get(FN_IF) {
            return match args.as_array().map(Vec::as_slice) {
                Some([condition, when_true, when_false]) => Deferred::Conditional {
                    condition,
                    branches: [when_true, when_false],
                },
                _ => Deferred::Malformed,
            };
        }
        if obj.get(REF).and_then(Value::as_str) == Some(NO_VALUE) {
            return Deferred::NoValue;
        }
        Deferred::Concrete(value)
    }
}

/// Flattens a possibly-conditional value into its concrete alternatives.
///
/// Concrete values resolve to themselves at `path`. Each `Fn::If` branch is
/// resolved recursively under `path/Fn::If/1` or `path/Fn::If/2`.
/// `AWS::NoValue` branches and malformed conditionals contribute nothing.
pub fn resolve_deferred<'a>(value: &'a Value, path: &Path) -> Vec<(&'a Value, Path)> {
    let mut out = Vec::new();
    flatten(value, path.clone(), &mut out);
    out
}

fn flatten<'a>(value: &'a Value, path: Path, out: &mut Vec<(&'a Value, Path)>) {
    match Deferred::classify(value) {
        Deferred::Concrete(v) => out.push((v, path)),
        Deferred::Conditional { branches, .. } => {
            let if_path = path.join(FN_IF);
            for (i, branch) in branches.into_iter().enumerate() {
                flatten(branch, if_path.join(i + 1), out);
            }
        }
        Deferred::NoValue | Deferred::Malformed => {}
    }
}

// ─── check_property ─────────────────────────────────────────────────────────

/// Looks up `key` on a mapping and runs `validator` on its value.
///
/// The validator receives `base_path/key`. Returns no findings when the
/// container is not a mapping or the key is absent.
pub fn check_property<'a, F>(
    container: &'a Value,
    key: &str,
    base_path: &Path,
    validator: F,
) -> Vec<Finding>
where
    F: FnOnce(&'a Value, &Path) -> Vec<Finding>,
{
    match container.as_object().and_then(|obj| obj.get(key)) {
        Some(value) => validator(value, &base_path.join(key)),
        None => Vec::new(),
    }
}

// ─── DocumentContext ────────────────────────────────────────────────────────

/// The document services a rule consumes from the engine.
///
/// Default methods delegate to [`resolve_deferred`] and [`check_property`];
/// engines with richer template models override them.
pub trait DocumentContext {
    fn resolve_deferred<'v>(&self, value: &'v Value, path: &Path) -> Vec<(&'v Value, Path)> {
        resolve_deferred(value, path)
    }

    fn check_property(
        &self,
        container: &Value,
        key: &str,
        base_path: &Path,
        validator: &dyn Fn(&Value, &Path) -> Vec<Finding>,
    ) -> Vec<Finding> {
        check_property(container, key, base_path, |value, path| validator(value, path))
    }
}

/// Default context over a plain JSON-shaped template.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateContext;

impl DocumentContext for TemplateContext {}
