//! Product id helpers.
//!
//! Product ids come straight from a hand-maintained CSV, so they can hold
//! spaces, slashes, or accents. Detail pages are written to disk under a
//! name derived from the id.

use std::collections::{HashMap, HashSet};

/// Derive a file-safe page name from a product id.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces every run of characters outside `[a-z0-9_-]` with one hyphen
/// 4. Strips leading/trailing hyphens
///
/// Returns `None` when nothing usable is left.
///
/// # Examples
///
/// ```
/// use vitrina_core::util::ids::page_slug;
///
/// assert_eq!(page_slug("7"), Some("7".to_string()));
/// assert_eq!(page_slug("  SKU 12/B "), Some("sku-12-b".to_string()));
/// assert_eq!(page_slug("CB_001"), Some("cb_001".to_string()));
/// assert_eq!(page_slug("///"), None);
/// ```
pub fn page_slug(id: &str) -> Option<String> {
    let mut slug = String::with_capacity(id.len());
    let mut pending_hyphen = false;

    for c in id.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() { None } else { Some(slug) }
}

/// Assign every id a page name no other id in the batch shares.
///
/// Ids are taken in order. The first id to claim a slug keeps it; later ids
/// mapping to the same slug get `-2`, `-3`, ... appended, skipping names
/// already in use. Repeated ids share their first assignment, and ids with
/// no usable characters are left out.
///
/// # Examples
///
/// ```
/// use vitrina_core::util::ids::assign_page_slugs;
///
/// let slugs = assign_page_slugs(["AB", "ab", "7"]);
/// assert_eq!(slugs["AB"], "ab");
/// assert_eq!(slugs["ab"], "ab-2");
/// assert_eq!(slugs["7"], "7");
/// ```
pub fn assign_page_slugs<'a, I>(ids: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assigned = HashMap::new();
    let mut taken = HashSet::new();

    for id in ids {
        if assigned.contains_key(id) {
            continue;
        }
        let Some(base) = page_slug(id) else {
            continue;
        };
        let mut slug = base.clone();
        let mut n = 2;
        while taken.contains(&slug) {
            slug = format!("{base}-{n}");
            n += 1;
        }
        taken.insert(slug.clone());
        assigned.insert(id.to_string(), slug);
    }
    assigned
}
