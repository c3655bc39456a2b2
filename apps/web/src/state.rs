use ratzilla::event::KeyCode;
use site_directory::{build_view, filter_sites, Site, ViewModel};

#[derive(Debug, Default)]
enum Load {
    #[default]
    Pending,
    Ready(Vec<Site>),
    Failed,
}

/// What the page must do after a key press, beyond redrawing.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    OpenLink(String),
}

#[derive(Debug, Default)]
pub struct WebState {
    load: Load,
    pub search: String,
    pub selected_index: usize,
    selected: Option<Site>,
}

impl WebState {
    pub fn loaded(&mut self, sites: Vec<Site>) {
        self.load = Load::Ready(sites);
        self.show_list();
    }

    pub fn failed(&mut self) {
        self.selected = None;
        self.load = Load::Failed;
    }

    pub fn view(&self) -> ViewModel {
        match &self.load {
            Load::Pending => ViewModel::Loading,
            Load::Failed => ViewModel::load_failed(),
            Load::Ready(sites) => build_view(sites, &self.search, self.selected.as_ref()),
        }
    }

    fn matching(&self) -> Vec<&Site> {
        match &self.load {
            Load::Ready(sites) => filter_sites(sites, &self.search),
            Load::Pending | Load::Failed => Vec::new(),
        }
    }

    fn show_list(&mut self) {
        self.selected = None;
        let rows = self.matching().len();
        if self.selected_index >= rows {
            self.selected_index = rows.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: &KeyCode) -> Option<Effect> {
        if self.selected.is_some() {
            return self.handle_detail_key(key);
        }

        match key {
            KeyCode::Char(ch) => {
                self.search.push(*ch);
                self.selected_index = 0;
                self.show_list();
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.show_list();
            }
            KeyCode::Esc => {
                self.search.clear();
                self.selected_index = 0;
                self.show_list();
            }
            KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.matching().len() {
                    self.selected_index += 1;
                }
            }
            KeyCode::Enter => {
                self.selected = self
                    .matching()
                    .get(self.selected_index)
                    .map(|&site| site.clone());
            }
            _ => {}
        }

        None
    }

    fn handle_detail_key(&mut self, key: &KeyCode) -> Option<Effect> {
        match key {
            KeyCode::Enter | KeyCode::Char('o') => {
                self.selected.as_ref().map(|site| Effect::OpenLink(site.map_url()))
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
                self.show_list();
                None
            }
            _ => None,
        }
    }
}
