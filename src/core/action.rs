//! Routable action values
//!
//! An [`Action`] is the immutable record a router registers for one
//! operation on a resource: a canonical name, a dispatch target and a
//! kind tag. Actions compare by all three fields, which is what lets the
//! accumulating set collapse duplicate declarations.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an action reads or mutates resource state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Read-only access, no side effects on persisted state
    Query,
    /// Side-effecting operation (create/update/destroy or custom)
    Mutation,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Query => write!(f, "query"),
            ActionKind::Mutation => write!(f, "mutation"),
        }
    }
}

/// Whether an action targets one resource instance or the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// A single item of the resource
    #[default]
    Member,
    /// The resource collection as a whole
    Collection,
}

/// One routable action exposed by a resource
///
/// The `target` follows the `"<resource>#<verb>"` convention the external
/// router resolves handlers from. Two actions are equal iff `name`,
/// `target` and `kind` are all equal; the fields never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    name: String,
    target: String,
    kind: ActionKind,
}

impl Action {
    /// Create an action
    pub fn new(name: impl Into<String>, target: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            kind,
        }
    }

    /// Create a read-only action
    pub fn query(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, ActionKind::Query)
    }

    /// Create a side-effecting action
    pub fn mutation(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, ActionKind::Mutation)
    }

    /// Canonical identifier, unique within a resource's action set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch reference in `"<resource>#<verb>"` form
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Kind tag
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The resource component of the target
    pub fn resource(&self) -> &str {
        match self.target.split_once('#') {
            Some((resource, _)) => resource,
            None => &self.target,
        }
    }

    /// True for read-only actions
    pub fn is_query(&self) -> bool {
        self.kind == ActionKind::Query
    }

    /// True for side-effecting actions
    pub fn is_mutation(&self) -> bool {
        self.kind == ActionKind::Mutation
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.name, self.target)
    }
}

/// Deduplicated, insertion-ordered collection of a resource's actions
pub type ActionSet = IndexSet<Action>;
