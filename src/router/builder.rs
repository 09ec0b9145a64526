//! Per-resource action derivation from only/except options

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionKind, ActionSet, Cardinality};
use crate::core::naming::action_name;
use crate::core::verb::CrudVerb;

/// Inclusion/exclusion policy over the standard verb set
///
/// `only: None` keeps all five standard verbs; `only: Some(list)` keeps
/// the listed ones, including `Some([])` which keeps none. `except`
/// entries are removed afterwards, so a verb present in both lists ends
/// up excluded. Unknown verb strings are dropped silently, never
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionFilter {
    /// Verbs to keep; all five when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,

    /// Verbs to remove after `only` is applied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<String>,
}

impl ActionFilter {
    /// Filter that keeps only the listed verbs
    pub fn only<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: Some(verbs.into_iter().map(Into::into).collect()),
            except: Vec::new(),
        }
    }

    /// Filter that removes the listed verbs from the standard five
    pub fn except<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: None,
            except: verbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve the filter into the verbs to autogenerate
    ///
    /// Verb strings are normalized here, once: parsing is ASCII
    /// case-insensitive and unknown entries disappear.
    fn resolve(&self) -> IndexSet<CrudVerb> {
        let allowed: IndexSet<CrudVerb> = match &self.only {
            None => CrudVerb::ALL.into_iter().collect(),
            Some(only) => only.iter().filter_map(|verb| CrudVerb::parse(verb)).collect(),
        };
        let except: IndexSet<CrudVerb> = self
            .except
            .iter()
            .filter_map(|verb| CrudVerb::parse(verb))
            .collect();

        allowed.difference(&except).copied().collect()
    }
}

/// Derives and accumulates the routable actions of one resource
///
/// The autogenerated subset is computed eagerly at construction, in fixed
/// verb order, from the filter. Caller-declared query/mutation actions
/// are appended afterwards; the set absorbs anything already present.
///
/// # Example
///
/// ```
/// use acta::prelude::*;
///
/// let mut posts = ResourceActions::with_filter("posts", ActionFilter::only(["show"]));
/// posts.mutation("archive", Cardinality::Member);
///
/// let names: Vec<&str> = posts.actions().iter().map(|a| a.name()).collect();
/// assert_eq!(names, ["show_post", "archive_post"]);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceActions {
    name: String,
    autogenerated: IndexSet<CrudVerb>,
    actions: ActionSet,
}

impl ResourceActions {
    /// Derive all five standard actions for a resource
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_filter(name, ActionFilter::default())
    }

    /// Derive the actions an only/except filter selects
    pub fn with_filter(name: impl Into<String>, filter: ActionFilter) -> Self {
        let mut resource = Self {
            name: name.into(),
            autogenerated: filter.resolve(),
            actions: ActionSet::new(),
        };

        for verb in CrudVerb::ALL {
            if resource.autogenerated.contains(&verb) {
                let action = resource.build(verb.kind(), verb.as_str(), verb.cardinality());
                resource.actions.insert(action);
            }
        }
        tracing::debug!(
            "Derived {} autogenerated action(s) for resource '{}'",
            resource.actions.len(),
            resource.name
        );

        resource
    }

    /// The resource these actions belong to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Standard verbs that survived the only/except filter
    pub fn autogenerated_verbs(&self) -> &IndexSet<CrudVerb> {
        &self.autogenerated
    }

    /// The accumulated action set
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Append a read-only action; no-op if an equal action exists
    pub fn query(&mut self, verb: &str, on: Cardinality) -> &ActionSet {
        self.append(ActionKind::Query, verb, on)
    }

    /// Append a side-effecting action; no-op if an equal action exists
    pub fn mutation(&mut self, verb: &str, on: Cardinality) -> &ActionSet {
        self.append(ActionKind::Mutation, verb, on)
    }

    /// Release the action set for registration
    pub fn into_actions(self) -> ActionSet {
        self.actions
    }

    fn append(&mut self, kind: ActionKind, verb: &str, on: Cardinality) -> &ActionSet {
        let action = self.build(kind, verb, on);
        self.actions.insert(action);
        &self.actions
    }

    /// Any verb string is accepted: declared actions are not restricted
    /// to the standard five.
    fn build(&self, kind: ActionKind, verb: &str, on: Cardinality) -> Action {
        Action::new(
            action_name(&self.name, verb, on),
            format!("{}#{}", self.name, verb),
            kind,
        )
    }
}
