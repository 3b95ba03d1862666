//! Global allocator for the command-line binary.
//!
//! The library leaves allocator choice to its users; the binary uses
//! mimalloc, which handles the short-lived buffers of whole-file processing
//! well.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
