//! Field overrides applied onto request templates

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{Result, VraError};

/// A caller-supplied value to merge into a request template
///
/// `path` addresses an existing node by descending one property per
/// segment (an empty path is the template root); `leaf` is then upserted on
/// that node.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FieldOverride {
    #[serde(default, deserialize_with = "deserialize_path")]
    pub path: Vec<String>,
    pub leaf: String,
    #[serde(default)]
    pub value: Value,
}

impl FieldOverride {
    /// Create an override from a dotted path string
    pub fn new(path: &str, leaf: impl Into<String>, value: Value) -> Self {
        Self {
            path: split_path(path),
            leaf: leaf.into(),
            value,
        }
    }

    /// Full dotted address of the leaf, for diagnostics
    pub fn dotted(&self) -> String {
        if self.path.is_empty() {
            return self.leaf.clone();
        }
        format!("{}.{}", self.path.join("."), self.leaf)
    }
}

/// Parses the CLI form `data.Machine.data.cpu=2`
///
/// The last dotted segment before `=` is the leaf. The value is read as JSON
/// when it parses (`2`, `true`, `{"a":1}`), otherwise kept as a string.
impl FromStr for FieldOverride {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (address, raw_value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid override '{}': expected PATH.LEAF=VALUE", s))?;

        if address.is_empty() {
            return Err(format!("Invalid override '{}': missing field name", s));
        }

        let (path, leaf) = match address.rsplit_once('.') {
            Some((path, leaf)) => (path, leaf),
            None => ("", address),
        };

        if leaf.is_empty() {
            return Err(format!("Invalid override '{}': empty field name", s));
        }

        let value = serde_json::from_str(raw_value)
            .unwrap_or_else(|_| Value::String(raw_value.to_string()));

        Ok(Self::new(path, leaf, value))
    }
}

/// Split a dotted path into segments; the empty string means no descent
pub fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Accepts either `"a.b"` or `["a", "b"]`
fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PathRepr {
        Dotted(String),
        Segments(Vec<String>),
    }

    Ok(match PathRepr::deserialize(deserializer)? {
        PathRepr::Dotted(path) => split_path(&path),
        PathRepr::Segments(segments) => segments,
    })
}

/// Apply overrides to a template in input order
///
/// Intermediate nodes are never created: a missing segment fails with
/// [`VraError::InvalidPath`]. Overrides applied before the failing one stay
/// applied.
pub fn apply_overrides(template: &mut Value, overrides: &[FieldOverride]) -> Result<()> {
    for field in overrides {
        apply_override(template, field)?;
    }
    Ok(())
}

fn apply_override(template: &mut Value, field: &FieldOverride) -> Result<()> {
    let invalid = |segment: &str| VraError::InvalidPath {
        path: field.dotted(),
        segment: segment.to_string(),
    };

    let mut node = template;
    for segment in &field.path {
        node = descend(node, segment).ok_or_else(|| invalid(segment))?;
    }

    match node {
        Value::Object(map) => {
            map.insert(field.leaf.clone(), field.value.clone());
            Ok(())
        }
        Value::Array(items) => {
            let slot = field
                .leaf
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get_mut(index))
                .ok_or_else(|| invalid(&field.leaf))?;
            *slot = field.value.clone();
            Ok(())
        }
        _ => Err(invalid(&field.leaf)),
    }
}

/// Step into an object property or array element
fn descend<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get_mut(index)),
        _ => None,
    }
}
