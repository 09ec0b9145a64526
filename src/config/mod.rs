//! Configuration loading and management
//!
//! Resources and their action policies can be declared in YAML and built
//! into [`ResourceActions`] builders or a whole [`ActionRegistry`]:
//!
//! ```yaml
//! resources:
//!   - name: posts
//!     except: [destroy]
//!     queries:
//!       - verb: search
//!         on: collection
//!     mutations:
//!       - verb: archive
//! ```

use serde::{Deserialize, Serialize};

use crate::core::action::Cardinality;
use crate::core::error::{ConfigError, ConfigResult};
use crate::router::builder::{ActionFilter, ResourceActions};
use crate::router::registry::ActionRegistry;

/// A caller-declared action beyond the standard five
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDecl {
    /// Verb that names the action (e.g. "archive", "search")
    pub verb: String,

    /// Cardinality of the action; member when omitted
    #[serde(default)]
    pub on: Cardinality,
}

/// Declaration of one resource and its action policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Resource name as exposed by the router (conventionally plural)
    pub name: String,

    /// only/except filter over the standard verbs
    #[serde(flatten)]
    pub filter: ActionFilter,

    /// Extra read-only actions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<ActionDecl>,

    /// Extra side-effecting actions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mutations: Vec<ActionDecl>,
}

impl ResourceConfig {
    /// Build the resource's action set from this declaration
    ///
    /// The filter is applied first, then the declared queries and
    /// mutations in declaration order.
    pub fn build(&self) -> ResourceActions {
        let mut resource = ResourceActions::with_filter(self.name.as_str(), self.filter.clone());
        for decl in &self.queries {
            resource.query(&decl.verb, decl.on);
        }
        for decl in &self.mutations {
            resource.mutation(&decl.verb, decl.on);
        }
        resource
    }
}

/// Complete configuration for a router's resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// List of resource declarations
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

impl RouterConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ConfigResult<Self> {
        if !std::path::Path::new(path).exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(
            "Loaded router configuration from '{}' ({} resource(s))",
            path,
            config.resources.len()
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Combine configurations from several sources
    ///
    /// Resource lists are concatenated in order. When two declarations
    /// produce the same action name, the later one wins once built into a
    /// registry.
    pub fn merge(configs: Vec<Self>) -> Self {
        let mut resources = Vec::new();
        for config in configs {
            resources.extend(config.resources);
        }
        Self { resources }
    }

    /// Build a catalog from every declared resource
    pub fn build_registry(&self) -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        for resource in &self.resources {
            registry.register(resource.build());
        }
        registry
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            resources: vec![
                ResourceConfig {
                    name: "posts".to_string(),
                    filter: ActionFilter::default(),
                    queries: vec![ActionDecl {
                        verb: "search".to_string(),
                        on: Cardinality::Collection,
                    }],
                    mutations: vec![ActionDecl {
                        verb: "archive".to_string(),
                        on: Cardinality::Member,
                    }],
                },
                ResourceConfig {
                    name: "comments".to_string(),
                    filter: ActionFilter::only(["show", "index"]),
                    queries: vec![],
                    mutations: vec![],
                },
                ResourceConfig {
                    name: "users".to_string(),
                    filter: ActionFilter::except(["destroy"]),
                    queries: vec![],
                    mutations: vec![],
                },
            ],
        }
    }
}
