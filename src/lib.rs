//! Rename files so their names only contain `A-Z a-z 0-9 . _ -`.
//!
//! ```
//! let converter = deblank::NameConverter::default();
//! assert_eq!(converter.convert("file with spaces.txt"), "file_with_spaces.txt");
//! ```

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `deblank::converter` instead of `deblank::core::converter`
pub use self::core::*;
pub use self::utils::*;
