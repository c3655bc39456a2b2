use crate::site::Site;

/// Case-insensitive, unanchored match of `search` against the identifier.
///
/// Records without an identifier never match, not even an empty search.
pub fn matches_search(site: &Site, search: &str) -> bool {
    identifier_contains(site, &search.to_lowercase())
}

/// Keeps the sites whose identifier contains `search`, in their original order.
pub fn filter_sites<'a>(sites: &'a [Site], search: &str) -> Vec<&'a Site> {
    let needle = search.to_lowercase();
    sites
        .iter()
        .filter(|site| identifier_contains(site, &needle))
        .collect()
}

fn identifier_contains(site: &Site, needle: &str) -> bool {
    site.has_identifier() && site.identifier.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_sites, matches_search};
    use crate::site::Site;
    use pretty_assertions::assert_eq;

    fn site(identifier: &str) -> Site {
        Site {
            identifier: identifier.to_string(),
            ..Site::default()
        }
    }

    fn directory() -> Vec<Site> {
        vec![
            site("AB-North"),
            site("Cabin"),
            site("Depot"),
            site(""),
            site("ab-south"),
        ]
    }

    fn identifiers<'a>(sites: &[&'a Site]) -> Vec<&'a str> {
        sites.iter().map(|site| site.identifier.as_str()).collect()
    }

    #[test]
    fn empty_search_keeps_every_identified_site_in_order() {
        let sites = directory();

        assert_eq!(
            identifiers(&filter_sites(&sites, "")),
            vec!["AB-North", "Cabin", "Depot", "ab-south"]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let sites = directory();

        assert_eq!(filter_sites(&sites, "AB"), filter_sites(&sites, "ab"));
        assert_eq!(
            identifiers(&filter_sites(&sites, "aB")),
            vec!["AB-North", "Cabin", "ab-south"]
        );
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let sites = directory();
        for term in ["", "ab", "SOUTH", "zzz", "-"] {
            let once: Vec<Site> = filter_sites(&sites, term).into_iter().cloned().collect();
            let twice = filter_sites(&once, term);

            assert_eq!(identifiers(&twice), identifiers(&once.iter().collect::<Vec<_>>()));
        }
    }

    #[test]
    fn match_is_unanchored() {
        assert!(matches_search(&site("Warehouse 12"), "use 1"));
        assert!(!matches_search(&site("Warehouse 12"), "13"));
    }

    #[test]
    fn site_without_identifier_never_matches() {
        assert!(!matches_search(&site(""), ""));
    }

    #[test]
    fn no_match_gives_empty_result() {
        assert!(filter_sites(&directory(), "nowhere").is_empty());
    }
}
