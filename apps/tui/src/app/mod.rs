// App module for site_finder
// Owns the loaded directory, the search text and the current screen

pub mod input;
pub mod state;

pub use input::{handle_input, handle_key_event};
pub use state::{App, LoadState};
