use std::collections::BTreeMap;

use crate::fragment::{ConfigFragment, LoaderRule};

/// Loader rules after appending a fragment: existing rules first, fragment
/// rules after, fragment order preserved. Append, not set-union: re-applying
/// the same fragment duplicates its rules.
pub fn appended_rules(existing: &[LoaderRule], fragment: &[LoaderRule]) -> Vec<LoaderRule> {
    let mut out = existing.to_vec();
    out.extend(fragment.iter().cloned());
    out
}

/// Alias map after merging a fragment: fragment entries win on key
/// collision.
pub fn merged_alias(
    existing: &BTreeMap<String, String>,
    fragment: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut out = existing.clone();
    for (name, target) in fragment {
        out.insert(name.clone(), target.clone());
    }
    out
}

/// Splice one fragment into the host's fields in place, honoring the two
/// gates. The merge itself stays pure above; this is the write boundary.
pub fn splice_fragment(
    rules: &mut Vec<LoaderRule>,
    alias: &mut BTreeMap<String, String>,
    fragment: &ConfigFragment,
    with_loader: bool,
    with_alias: bool,
) {
    if with_loader {
        *rules = appended_rules(rules, &fragment.module.rules);
    }
    if with_alias {
        *alias = merged_alias(alias, &fragment.resolve.alias);
    }
}
