//! Core of the site finder: the `Site` record as it appears in `Sites.json`,
//! the identifier search filter, and the view models both front ends render.
//!
//! Nothing in here performs I/O, so the same code runs in the terminal app
//! and in the browser build.

pub mod filter;
pub mod site;
pub mod view;

pub use filter::{filter_sites, matches_search};
pub use site::Site;
pub use view::{
    build_view, DetailView, ListRow, ListView, Screen, ViewModel, LOAD_ERROR_MESSAGE,
    NO_RESULTS_MESSAGE,
};
