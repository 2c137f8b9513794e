//! Exclusion filter

use std::collections::HashSet;

use crate::model::Submodule;

/// Drop submodules whose name appears in the exclusion set.
///
/// Matching is case-sensitive and exact, relative order is preserved, and
/// an empty name in the set matches nothing (submodule names are never
/// empty).
pub fn filter_excluded(submodules: Vec<Submodule>, exclude: &HashSet<String>) -> Vec<Submodule> {
    submodules
        .into_iter()
        .filter(|s| !exclude.contains(&s.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(paths: &[&str]) -> Vec<Submodule> {
        paths.iter().map(|p| Submodule::new(*p)).collect()
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_excluded_names_are_dropped() {
        let result = filter_excluded(subs(&["alpha", "beta", "gamma"]), &set(&["beta"]));
        let names: Vec<_> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["alpha", "gamma"]);
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let result = filter_excluded(subs(&["alpha", "beta"]), &HashSet::new());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let result = filter_excluded(subs(&["c", "a", "b"]), &set(&["a"]));
        let names: Vec<_> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["c", "b"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let result = filter_excluded(subs(&["Alpha"]), &set(&["alpha"]));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_match_is_on_name_not_path() {
        let result = filter_excluded(subs(&["libs/alpha"]), &set(&["alpha"]));
        assert!(result.is_empty());

        let result = filter_excluded(subs(&["libs/alpha"]), &set(&["libs/alpha"]));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_names_in_set_are_ignored() {
        let result = filter_excluded(subs(&["alpha"]), &set(&[""]));
        assert_eq!(result.len(), 1);
    }
}
