//! Singular forms for English resource names
//!
//! Rule-based inflection covering the common English plural endings.
//! Action naming only ever needs the singular direction: member actions
//! are named after one item of the resource, collection actions keep the
//! resource name as declared.

/// Convert a plural resource name to its singular form
///
/// Words that do not look plural are returned unchanged, so the function
/// is total over arbitrary resource names (including the empty string).
///
/// # Examples
///
/// ```
/// use acta::core::inflect::singularize;
///
/// assert_eq!(singularize("posts"), "post");
/// assert_eq!(singularize("companies"), "company");
/// assert_eq!(singularize("addresses"), "address");
/// assert_eq!(singularize("session"), "session");
/// ```
pub fn singularize(plural: &str) -> String {
    // companies -> company
    if let Some(stem) = plural.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }

    // wolves -> wolf
    if let Some(stem) = plural.strip_suffix("ves") {
        if !stem.is_empty() {
            return format!("{}f", stem);
        }
    }

    // Sibilant and o endings pluralize with "es" (addresses, boxes, heroes)
    let es_plural = ["ses", "shes", "ches", "xes", "zes", "oes"]
        .iter()
        .any(|suffix| plural.ends_with(suffix));
    if es_plural && plural.len() > 3 {
        return plural[..plural.len() - 2].to_string();
    }

    // ss endings are already singular (address, class)
    if plural.ends_with("ss") {
        return plural.to_string();
    }

    // posts -> post
    if let Some(stem) = plural.strip_suffix('s') {
        if !stem.is_empty() {
            return stem.to_string();
        }
    }

    plural.to_string()
}
