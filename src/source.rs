//! The narrow capability extraction drivers use to read host state.
//!
//! The host application's registries stay opaque: a driver only needs "all
//! entity keys of a kind" and "one primitive fact about an entity". Concrete
//! implementations live with the host collaborator; this crate only requires
//! that calls are deterministic for a fixed host state and never mutate it.

use anyhow::Result;
use std::fmt;

/// A single primitive fact read from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl FactValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FactValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FactValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FactValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Str(s) => f.write_str(s),
            FactValue::Int(n) => write!(f, "{}", n),
            FactValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Read-only window into the host application's registries.
pub trait FactSource {
    /// All entity keys of `kind`, e.g. every enchantment name.
    fn keys(&self, kind: &str) -> Result<Vec<String>>;

    /// One primitive fact about an entity.
    fn fact(&self, kind: &str, key: &str, field: &str) -> Result<FactValue>;
}
