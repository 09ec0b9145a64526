//! The standard CRUD verb vocabulary

use std::fmt;

use crate::core::action::{ActionKind, Cardinality};

/// The five verbs a resource autogenerates actions from
///
/// Only the standard five are modeled as an enum so the only/except policy
/// can be normalized once at the boundary; caller-declared custom actions
/// stay open strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudVerb {
    /// Fetch one item
    Show,
    /// List the collection
    Index,
    /// Create an item
    Create,
    /// Update an item
    Update,
    /// Delete an item
    Destroy,
}

impl CrudVerb {
    /// Every standard verb, in derivation order
    pub const ALL: [CrudVerb; 5] = [
        CrudVerb::Show,
        CrudVerb::Index,
        CrudVerb::Create,
        CrudVerb::Update,
        CrudVerb::Destroy,
    ];

    /// Parse a declared verb string
    ///
    /// Matching is ASCII case-insensitive. Unknown strings yield `None`;
    /// the filter drops them silently rather than erroring.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "show" => Some(CrudVerb::Show),
            "index" => Some(CrudVerb::Index),
            "create" => Some(CrudVerb::Create),
            "update" => Some(CrudVerb::Update),
            "destroy" => Some(CrudVerb::Destroy),
            _ => None,
        }
    }

    /// The verb as it appears in action names and targets
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudVerb::Show => "show",
            CrudVerb::Index => "index",
            CrudVerb::Create => "create",
            CrudVerb::Update => "update",
            CrudVerb::Destroy => "destroy",
        }
    }

    /// Kind of the autogenerated action for this verb
    pub fn kind(&self) -> ActionKind {
        match self {
            CrudVerb::Show | CrudVerb::Index => ActionKind::Query,
            CrudVerb::Create | CrudVerb::Update | CrudVerb::Destroy => ActionKind::Mutation,
        }
    }

    /// Cardinality of the autogenerated action for this verb
    ///
    /// `index` addresses the collection; every other verb addresses one
    /// member.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            CrudVerb::Index => Cardinality::Collection,
            _ => Cardinality::Member,
        }
    }
}

impl fmt::Display for CrudVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_verbs() {
        assert_eq!(CrudVerb::parse("show"), Some(CrudVerb::Show));
        assert_eq!(CrudVerb::parse("index"), Some(CrudVerb::Index));
        assert_eq!(CrudVerb::parse("create"), Some(CrudVerb::Create));
        assert_eq!(CrudVerb::parse("update"), Some(CrudVerb::Update));
        assert_eq!(CrudVerb::parse("destroy"), Some(CrudVerb::Destroy));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CrudVerb::parse("SHOW"), Some(CrudVerb::Show));
        assert_eq!(CrudVerb::parse("Destroy"), Some(CrudVerb::Destroy));
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(CrudVerb::parse("publish"), None);
        assert_eq!(CrudVerb::parse(""), None);
    }

    #[test]
    fn test_all_lists_verbs_in_derivation_order() {
        let verbs: Vec<&str> = CrudVerb::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(verbs, ["show", "index", "create", "update", "destroy"]);
    }

    #[test]
    fn test_read_verbs_generate_queries() {
        assert_eq!(CrudVerb::Show.kind(), ActionKind::Query);
        assert_eq!(CrudVerb::Index.kind(), ActionKind::Query);
    }

    #[test]
    fn test_write_verbs_generate_mutations() {
        assert_eq!(CrudVerb::Create.kind(), ActionKind::Mutation);
        assert_eq!(CrudVerb::Update.kind(), ActionKind::Mutation);
        assert_eq!(CrudVerb::Destroy.kind(), ActionKind::Mutation);
    }

    #[test]
    fn test_only_index_addresses_the_collection() {
        assert_eq!(CrudVerb::Index.cardinality(), Cardinality::Collection);
        for verb in [CrudVerb::Show, CrudVerb::Create, CrudVerb::Update, CrudVerb::Destroy] {
            assert_eq!(verb.cardinality(), Cardinality::Member);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", CrudVerb::Show), "show");
        assert_eq!(format!("{}", CrudVerb::Destroy), "destroy");
    }
}
