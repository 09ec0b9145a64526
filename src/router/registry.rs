//! Catalog of derived actions across resources
//!
//! The registry is what gets handed to the external router: every
//! resource's actions merged into one map keyed by action name, plus the
//! JSON manifest the router registers handlers from.

use anyhow::{Result, anyhow};
use indexmap::IndexMap;

use crate::core::action::{Action, ActionKind};
use crate::router::builder::ResourceActions;

/// Name-keyed catalog of every action derived for a router
///
/// Registering a resource moves its actions into the catalog. A later
/// registration under an existing action name replaces the earlier entry
/// silently; last one wins.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: IndexMap<String, Action>,
}

impl ActionRegistry {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            actions: IndexMap::new(),
        }
    }

    /// Move every action of a resource into the catalog
    pub fn register(&mut self, resource: ResourceActions) {
        let resource_name = resource.name().to_string();
        let mut moved = 0;
        for action in resource.into_actions() {
            let name = action.name().to_string();
            if let Some(previous) = self.actions.insert(name, action) {
                tracing::debug!("Replaced catalog entry '{}'", previous.name());
            }
            moved += 1;
        }
        tracing::debug!(
            "Registered {} action(s) for resource '{}' ({} cataloged)",
            moved,
            resource_name,
            self.actions.len()
        );
    }

    /// Look up an action by name
    pub fn resolve(&self, name: &str) -> Result<&Action> {
        self.actions
            .get(name)
            .ok_or_else(|| anyhow!("No action '{}' registered in the catalog", name))
    }

    /// All actions, in registration order
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    /// Read-only actions only
    pub fn queries(&self) -> impl Iterator<Item = &Action> {
        self.actions
            .values()
            .filter(|action| action.kind() == ActionKind::Query)
    }

    /// Side-effecting actions only
    pub fn mutations(&self) -> impl Iterator<Item = &Action> {
        self.actions
            .values()
            .filter(|action| action.kind() == ActionKind::Mutation)
    }

    /// Actions whose target belongs to the given resource
    pub fn actions_for(&self, resource: &str) -> Vec<&Action> {
        self.actions
            .values()
            .filter(|action| action.resource() == resource)
            .collect()
    }

    /// Number of cataloged actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// JSON registration payload for the external router
    ///
    /// One `{name, target, kind}` object per action, kind lowercase.
    pub fn manifest(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = self
            .actions
            .values()
            .map(|action| {
                serde_json::json!({
                    "name": action.name(),
                    "target": action.target(),
                    "kind": action.kind(),
                })
            })
            .collect();
        serde_json::Value::Array(entries)
    }
}
