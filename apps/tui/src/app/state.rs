use crate::loader::{load_sites, LoadError, SiteSource};
use site_directory::{build_view, filter_sites, Screen, Site, ViewModel};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::oneshot::{self, error::TryRecvError};

type LoadResult = Result<Vec<Site>, LoadError>;

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Site>),
    Failed,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub load_state: LoadState,
    pub search_query: String,
    pub selected_index: usize,
    /// Record shown by the detail view; `None` means the list is showing.
    pub selected_site: Option<Site>,
    pub status_message: String,
    pub show_help: bool,
    pub source_label: String,
    pub throbber: ThrobberState,
    pending_load: Option<oneshot::Receiver<LoadResult>>,
}

impl App {
    pub fn new(source: &SiteSource, search: impl Into<String>) -> Self {
        Self {
            running: true,
            load_state: LoadState::Loading,
            search_query: search.into(),
            selected_index: 0,
            selected_site: None,
            status_message: String::new(),
            show_help: false,
            source_label: source.label(),
            throbber: ThrobberState::default(),
            pending_load: None,
        }
    }

    /// Starts the one-off fetch in the background. The result is picked up
    /// by [`App::poll_loader`] on the event loop.
    pub fn start_loading(&mut self, source: SiteSource) {
        let (tx, rx) = oneshot::channel();
        self.load_state = LoadState::Loading;
        self.pending_load = Some(rx);

        tokio::spawn(async move {
            let result = load_sites(&source).await;
            let _ = tx.send(result);
        });
    }

    /// Applies the load result once it has arrived. Returns `true` when it did.
    pub fn poll_loader(&mut self) -> bool {
        let Some(rx) = self.pending_load.as_mut() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(LoadError::Interrupted),
        };

        self.pending_load = None;
        self.finish_loading(result);
        true
    }

    pub fn finish_loading(&mut self, result: LoadResult) {
        match result {
            Ok(sites) => {
                self.status_message = format!("Loaded {} sites", sites.len());
                self.load_state = LoadState::Loaded(sites);
                self.apply_search_filter();
            }
            Err(e) => {
                tracing::error!("Could not load {}: {e}", self.source_label);
                self.status_message = format!("Could not load {}: {e}", self.source_label);
                self.selected_site = None;
                self.load_state = LoadState::Failed;
            }
        }
    }

    pub fn update(&mut self) {
        if matches!(self.load_state, LoadState::Loading) {
            self.throbber.calc_next();
        }
    }

    pub fn sites(&self) -> &[Site] {
        match &self.load_state {
            LoadState::Loaded(sites) => sites,
            LoadState::Loading | LoadState::Failed => &[],
        }
    }

    pub fn filtered_sites(&self) -> Vec<&Site> {
        filter_sites(self.sites(), &self.search_query)
    }

    pub fn screen(&self) -> Screen {
        if self.selected_site.is_some() {
            Screen::Detail
        } else {
            Screen::List
        }
    }

    pub fn view(&self) -> ViewModel {
        match &self.load_state {
            LoadState::Loading => ViewModel::Loading,
            LoadState::Failed => ViewModel::load_failed(),
            LoadState::Loaded(sites) => {
                build_view(sites, &self.search_query, self.selected_site.as_ref())
            }
        }
    }

    /// Re-derives the list from the search text. Showing the list always
    /// closes the detail view.
    pub fn apply_search_filter(&mut self) {
        self.selected_site = None;
        let total_rows = self.filtered_sites().len();
        if self.selected_index >= total_rows {
            self.selected_index = total_rows.saturating_sub(1);
        }
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.selected_index = 0;
        self.apply_search_filter();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.apply_search_filter();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.selected_index = 0;
        self.apply_search_filter();
    }

    /// Opens the detail view for the highlighted row.
    pub fn open_selected(&mut self) {
        let site = self
            .filtered_sites()
            .get(self.selected_index)
            .map(|&site| site.clone());

        if let Some(site) = site {
            self.show_site_details(site);
        }
    }

    pub fn show_site_details(&mut self, site: Site) {
        tracing::debug!(site = %site.identifier, "showing site details");
        self.status_message.clear();
        self.selected_site = Some(site);
    }

    pub fn go_back_to_list(&mut self) {
        tracing::debug!(search = %self.search_query, "back to site list");
        self.status_message.clear();
        self.apply_search_filter();
    }

    pub fn open_map_link(&mut self) {
        let Some(site) = &self.selected_site else {
            return;
        };

        let url = site.map_url();
        match open::that(&url) {
            Ok(()) => {
                self.status_message = "Opened map in browser".to_string();
            }
            Err(e) => {
                tracing::warn!("Failed to open {url}: {e}");
                self.status_message = format!("Failed to open link: {e}");
            }
        }
    }
}
