//! Generic utility primitives with zero domain knowledge.
//!
//! - `encoding` - Path text decoding for legacy code pages
//! - `io` - File system operations with consistent error handling

pub mod encoding;
pub mod io;
