//! Valve Data Format (VDF) parsing
//!
//! Steam ships the same nested key/value document model in two encodings:
//! - text (libraryfolders.vdf, appmanifest_*.acf) — `text` submodule
//! - tagged binary (shortcuts.vdf) — `binary` submodule
//!
//! Both produce the same `VdfMap` tree and both degrade instead of failing:
//! malformed input yields a partial tree, never an error.

pub mod binary;
pub mod text;
pub mod types;

pub use binary::{load_binary, parse_binary};
pub use text::{load_text, parse_text};
pub use types::{VdfMap, VdfValue};
