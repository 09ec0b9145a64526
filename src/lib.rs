//! # Acta
//!
//! Declarative derivation of routable CRUD actions for API resources.
//!
//! Given a resource name and an inclusion/exclusion policy, acta computes
//! the set of query and mutation actions a router should expose for that
//! resource, with canonical names and `"<resource>#<verb>"` dispatch
//! targets. It runs entirely at configuration time: no requests are
//! executed, no input validated.
//!
//! ## Features
//!
//! - **only/except policy**: autogenerate any subset of the standard
//!   verbs {show, index, create, update, destroy}
//! - **Canonical naming**: member actions are named after one item
//!   (`show_post`), collection actions after the resource (`index_posts`)
//! - **Custom declarations**: append read-only queries and side-effecting
//!   mutations beyond the standard five; duplicates collapse
//! - **Catalog + manifest**: merge every resource into one name-keyed
//!   registry and export the `{name, target, kind}` payload routers
//!   consume
//! - **Configuration-based**: declare resources in YAML and build the
//!   whole catalog from it
//!
//! ## Quick Start
//!
//! ```
//! use acta::prelude::*;
//!
//! let mut posts = ResourceActions::with_filter(
//!     "posts",
//!     ActionFilter::except(["destroy"]),
//! );
//! posts.mutation("archive", Cardinality::Member);
//!
//! let mut registry = ActionRegistry::new();
//! registry.register(posts);
//!
//! let action = registry.resolve("archive_post")?;
//! assert_eq!(action.target(), "posts#archive");
//! assert_eq!(action.kind(), ActionKind::Mutation);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod router;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        action::{Action, ActionKind, ActionSet, Cardinality},
        error::{ConfigError, ConfigResult},
        inflect::singularize,
        naming::action_name,
        verb::CrudVerb,
    };

    // === Config ===
    pub use crate::config::{ActionDecl, ResourceConfig, RouterConfig};

    // === Router ===
    pub use crate::router::{
        builder::{ActionFilter, ResourceActions},
        registry::ActionRegistry,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
