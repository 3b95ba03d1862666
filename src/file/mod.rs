//! File operations for the command-line front end.
//!
//! The engine works on byte buffers; this module supplies them from disk and
//! owns the `.encrypted` naming convention.

pub mod discovery;
pub mod operations;
pub mod validation;

pub use discovery::find_eligible_files;
pub use operations::{delete_file, get_file_info, get_file_info_list, get_output_path, is_encrypted_file, read_file, write_file};
pub use validation::{is_excluded, validate_path};
