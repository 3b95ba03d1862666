//! User interface components for terminal interaction.
//!
//! - [`display`]: file tables, status messages, banner
//! - [`progress`]: spinner shown while a key is derived
//! - [`prompt`]: interactive password, selection and confirmation dialogs

pub mod display;
pub mod progress;
pub mod prompt;

pub use display::{clear_screen, print_banner, show_failure, show_file_info, show_source_deleted, show_success};
