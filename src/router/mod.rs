//! Action derivation and cataloging for the external router
//!
//! This module provides the per-resource builder that derives actions
//! from an only/except policy, and the registry that merges every
//! resource's actions into one catalog handed to the router.

pub mod builder;
pub mod registry;

pub use builder::{ActionFilter, ResourceActions};
pub use registry::ActionRegistry;
