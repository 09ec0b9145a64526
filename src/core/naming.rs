//! Canonical action naming
//!
//! One naming rule shared by autogenerated and caller-declared actions:
//! identical inputs always produce identical identifiers, so repeated
//! declarations collapse in the action set instead of piling up.

use crate::core::action::Cardinality;
use crate::core::inflect::singularize;

/// Derive the canonical action identifier for a verb on a resource
///
/// Member actions name a single item of the resource; collection actions
/// keep the resource name as declared.
///
/// # Examples
///
/// ```
/// use acta::core::action::Cardinality;
/// use acta::core::naming::action_name;
///
/// assert_eq!(action_name("posts", "show", Cardinality::Member), "show_post");
/// assert_eq!(action_name("posts", "index", Cardinality::Collection), "index_posts");
/// ```
pub fn action_name(resource: &str, verb: &str, on: Cardinality) -> String {
    let fragment = match on {
        Cardinality::Member => singularize(resource),
        Cardinality::Collection => resource.to_string(),
    };
    format!("{}_{}", verb, fragment)
}
