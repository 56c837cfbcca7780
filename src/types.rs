use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

// ─── Path ───────────────────────────────────────────────────────────────────

/// One step into a template: a mapping key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => f.write_str(k),
        }
    }
}

/// Location of a value inside a template, from the root down.
///
/// Displays as `/`-joined segments, e.g.
/// `Resources/Role/Properties/Policies/0/PolicyDocument`.
/// Serializes as a JSON array of strings and integers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path (template root).
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path extended by one segment. `self` is left untouched.
    pub fn join(&self, segment: impl Into<PathSegment>) -> Path {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        Path(segments)
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

// ─── Template ───────────────────────────────────────────────────────────────

/// A loaded infrastructure template.
///
/// Only `Resources` is modelled; every other top-level section is carried
/// through untouched. `AWSTemplateFormatVersion` and `Description` are kept
/// as raw values so a mistyped header never blocks the resource checks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<Value>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(rename = "Resources", default)]
    pub resources: Map<String, Value>,
    #[serde(flatten)]
    pub sections: HashMap<String, Value>,
}

impl Template {
    /// Resources in template order. Entries whose body is not a mapping are
    /// still yielded, with no type and no properties.
    pub fn resources(&self) -> impl Iterator<Item = Resource<'_>> {
        self.resources.iter().map(|(name, body)| {
            let body = body.as_object();
            Resource {
                name: name.as_str(),
                type_name: body.and_then(|b| b.get("Type")).and_then(Value::as_str),
                properties: body.and_then(|b| b.get("Properties")),
            }
        })
    }
}

/// Borrowed view of one entry under `Resources`.
#[derive(Clone, Copy, Debug)]
pub struct Resource<'a> {
    pub name: &'a str,
    pub type_name: Option<&'a str>,
    pub properties: Option<&'a Value>,
}

impl Resource<'_> {
    /// Path to this resource's `Properties` block.
    pub fn properties_path(&self) -> Path {
        Path::root()
            .join("Resources")
            .join(self.name)
            .join("Properties")
    }
}

// ─── Statements ─────────────────────────────────────────────────────────────

/// The `Statement` field of a policy document: one inline record or a list.
#[derive(Clone, Copy, Debug)]
pub enum Statements<'a> {
    Single(&'a Value),
    Many(&'a [Value]),
}

impl<'a> Statements<'a> {
    /// Classify a `Statement` value. Scalars are not statements.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(Statements::Single(value)),
            Value::Array(items) => Some(Statements::Many(items.as_slice())),
            _ => None,
        }
    }

    /// Statement records in order. A single inline record yields once.
    pub fn records(&self) -> std::slice::Iter<'a, Value> {
        match *self {
            Statements::Single(record) => std::slice::from_ref(record).iter(),
            Statements::Many(items) => items.iter(),
        }
    }
}
