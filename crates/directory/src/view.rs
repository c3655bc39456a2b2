use crate::filter::filter_sites;
use crate::site::Site;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading site data. Check console for details.";
pub const NO_RESULTS_MESSAGE: &str = "No sites found matching your search.";

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// A selectable row in the list. It carries the whole record so selecting it
/// needs no second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub site: Site,
}

impl ListRow {
    pub fn heading(&self) -> String {
        format!("{} • {}", self.site.identifier, self.site.city)
    }

    /// Device text on one line; the list has no room for line breaks.
    pub fn devices(&self) -> String {
        format!("Devices: {}", self.site.device_lines().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub search: String,
    pub rows: Vec<ListRow>,
    /// Shown in place of the rows when nothing matched.
    pub message: Option<&'static str>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub map_url: String,
    pub device_lines: Vec<String>,
    pub other_detail_lines: Vec<String>,
    pub coordinates: String,
}

impl DetailView {
    pub fn from_site(site: &Site) -> Self {
        Self {
            title: format!("Details for {}", site.identifier),
            identifier: site.identifier.clone(),
            name: site.name.clone(),
            address: site.address.clone(),
            map_url: site.map_url(),
            device_lines: site.device_lines(),
            other_detail_lines: site.other_detail_lines(),
            coordinates: site.coordinates(),
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Loading,
    LoadFailed(&'static str),
    List(ListView),
    Detail(DetailView),
}

impl ViewModel {
    pub const fn load_failed() -> Self {
        Self::LoadFailed(LOAD_ERROR_MESSAGE)
    }

    pub const fn screen(&self) -> Screen {
        match self {
            Self::Detail(_) => Screen::Detail,
            Self::Loading | Self::LoadFailed(_) | Self::List(_) => Screen::List,
        }
    }

    /// The search input is hidden while a detail view is open.
    pub const fn shows_search(&self) -> bool {
        !matches!(self, Self::Detail(_))
    }
}

/// Derives the view for the loaded collection, the current search text and
/// the selected record, if any.
///
/// The list is rebuilt from `search` every time, so closing a detail view
/// shows whatever the search box holds at that moment.
pub fn build_view(sites: &[Site], search: &str, selected: Option<&Site>) -> ViewModel {
    if let Some(site) = selected {
        return ViewModel::Detail(DetailView::from_site(site));
    }

    let rows: Vec<ListRow> = filter_sites(sites, search)
        .into_iter()
        .map(|site| ListRow { site: site.clone() })
        .collect();

    let message = rows.is_empty().then_some(NO_RESULTS_MESSAGE);

    ViewModel::List(ListView {
        search: search.to_string(),
        rows,
        message,
        total: sites.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Site> {
        vec![
            Site {
                identifier: "A1".to_string(),
                city: "X".to_string(),
                devices: "d1".to_string(),
                latitude: "1".to_string(),
                longitude: "2".to_string(),
                name: "n".to_string(),
                address: "addr".to_string(),
                other_details: "od".to_string(),
            },
            Site {
                identifier: "B2".to_string(),
                city: "Y".to_string(),
                devices: "d2\nd3".to_string(),
                ..Site::default()
            },
        ]
    }

    fn list(view: ViewModel) -> ListView {
        match view {
            ViewModel::List(list) => list,
            other => panic!("expected list view, got {other:?}"),
        }
    }

    #[test]
    fn list_rows_follow_search() {
        let sites = sample();
        let view = list(build_view(&sites, "a1", None));

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].heading(), "A1 • X");
        assert_eq!(view.rows[0].devices(), "Devices: d1");
        assert_eq!(view.message, None);
        assert_eq!(view.search, "a1");
        assert_eq!(view.total, 2);
    }

    #[test]
    fn empty_search_lists_everything_in_order() {
        let sites = sample();
        let view = list(build_view(&sites, "", None));

        let ids: Vec<&str> = view
            .rows
            .iter()
            .map(|row| row.site.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["A1", "B2"]);
        assert_eq!(view.rows[1].devices(), "Devices: d2 d3");
    }

    #[test]
    fn no_match_shows_message() {
        let sites = sample();
        let view = list(build_view(&sites, "zz", None));

        assert!(view.rows.is_empty());
        assert_eq!(view.message, Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn empty_collection_shows_message() {
        let view = list(build_view(&[], "", None));

        assert_eq!(view.message, Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn selected_site_gives_detail_view() {
        let sites = sample();
        let view = build_view(&sites, "a1", Some(&sites[0]));

        assert_eq!(view.screen(), Screen::Detail);
        assert!(!view.shows_search());
        let ViewModel::Detail(detail) = view else {
            panic!("expected detail view");
        };
        assert_eq!(detail.title, "Details for A1");
        assert!(detail.map_url.contains("query=1,2"));
        assert_eq!(detail.coordinates, "1, 2");
        assert_eq!(detail.other_detail_lines, vec!["od"]);
    }

    #[test]
    fn detail_splits_device_lines() {
        let sites = sample();
        let ViewModel::Detail(detail) = build_view(&sites, "", Some(&sites[1])) else {
            panic!("expected detail view");
        };

        assert_eq!(detail.device_lines, vec!["d2", "d3"]);
    }

    #[test]
    fn deselecting_rebuilds_list_from_current_search() {
        let sites = sample();
        let detail = build_view(&sites, "a", Some(&sites[1]));
        assert_eq!(detail.screen(), Screen::Detail);

        let back = list(build_view(&sites, "b", None));
        assert_eq!(back.rows.len(), 1);
        assert_eq!(back.rows[0].site.identifier, "B2");
    }

    #[test]
    fn load_failure_stays_on_list_screen() {
        let view = ViewModel::load_failed();

        assert_eq!(view.screen(), Screen::List);
        assert!(view.shows_search());
        assert_eq!(view, ViewModel::LoadFailed(LOAD_ERROR_MESSAGE));
    }
}
