//! Module resolution: preset modules plus include, minus exclude

use std::collections::HashSet;

/// Compute the resolved module set.
///
/// Preset order is preserved with repeats collapsed to their first
/// occurrence, includes not yet present are appended in order, and anything
/// in `exclude` is dropped. Exclude always wins.
pub fn resolve<P, I, E>(preset_modules: &[P], include: &[I], exclude: &[E]) -> Vec<String>
where
    P: AsRef<str>,
    I: AsRef<str>,
    E: AsRef<str>,
{
    let excluded: HashSet<&str> = exclude.iter().map(AsRef::as_ref).collect();
    let mut seen = HashSet::new();

    preset_modules
        .iter()
        .map(AsRef::as_ref)
        .chain(include.iter().map(AsRef::as_ref))
        .filter(|module| seen.insert(*module))
        .filter(|module| !excluded.contains(module))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: &[&str] = &[];

    #[test]
    fn test_include_appends_after_preset() {
        let resolved = resolve(&["skills/a", "rules/b"], &["workflows/c"], NONE);
        assert_eq!(resolved, vec!["skills/a", "rules/b", "workflows/c"]);
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let resolved = resolve(&["skills/a"], &["skills/b"], &["skills/b", "skills/a"]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let resolved = resolve(&["skills/a", "rules/b", "skills/a"], &["rules/b", "skills/c"], NONE);
        assert_eq!(resolved, vec!["skills/a", "rules/b", "skills/c"]);
    }
}
