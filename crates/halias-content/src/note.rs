//! Typed view of a note's frontmatter.
//!
//! [`NoteFrontmatter`] splits a frontmatter mapping into the alias list and
//! everything else. Other keys keep their values and order when the note is
//! written back; `aliases` keeps its position if it existed and is appended
//! otherwise.

use halias_core::{AliasList, Error, Result};
use serde_yaml::{Mapping, Value};

use crate::markdown::parse_alias_string;

/// Frontmatter key holding the alias list.
pub const ALIASES_KEY: &str = "aliases";

/// A note's frontmatter with its alias list pulled out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFrontmatter {
    mapping: Mapping,
    aliases: AliasList,
}

impl NoteFrontmatter {
    /// Build from a parsed frontmatter value.
    ///
    /// `None` (no frontmatter) and YAML null (empty block) give an empty
    /// mapping. Any other non-mapping value is rejected.
    pub fn from_value(value: Option<Value>) -> Result<Self> {
        let mapping = match value {
            None | Some(Value::Null) => Mapping::new(),
            Some(Value::Mapping(mapping)) => mapping,
            Some(other) => {
                return Err(Error::parse(format!(
                    "Frontmatter is not a mapping: {}",
                    describe(&other)
                )));
            }
        };
        let aliases = match mapping.get(ALIASES_KEY) {
            Some(value) => aliases_from_value(value)?,
            None => AliasList::new(),
        };
        Ok(Self { mapping, aliases })
    }

    /// The alias list.
    pub fn aliases(&self) -> &AliasList {
        &self.aliases
    }

    /// The alias list, mutably.
    pub fn aliases_mut(&mut self) -> &mut AliasList {
        &mut self.aliases
    }

    /// Reassemble the mapping with the alias list written as a sequence.
    pub fn into_mapping(self) -> Mapping {
        let Self {
            mut mapping,
            aliases,
        } = self;
        let sequence = aliases.into_vec().into_iter().map(Value::String).collect();
        mapping.insert(Value::from(ALIASES_KEY), Value::Sequence(sequence));
        mapping
    }
}

/// Read an `aliases` value in any of the shapes notes use.
///
/// - a sequence: each scalar entry becomes an alias, nulls are dropped
/// - a string: split on commas (older notes stored one joined string)
/// - null: empty
/// - any other scalar: a single alias
///
/// Mappings, and sequences containing them, are rejected so they are never
/// overwritten.
pub fn aliases_from_value(value: &Value) -> Result<AliasList> {
    match value {
        Value::Null => Ok(AliasList::new()),
        Value::String(s) => Ok(parse_alias_string(s).into_iter().collect()),
        Value::Sequence(items) => {
            let mut aliases = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Null => {}
                    other => aliases.push(scalar_to_string(other)?),
                }
            }
            Ok(aliases.into())
        }
        other => Ok(std::iter::once(scalar_to_string(other)?).collect()),
    }
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::parse(format!(
            "Unsupported alias entry: {}",
            describe(other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
