//! Game discovery — WHAT is in the library
//!
//! Two independent passes build the catalog: installed games from library
//! manifests (text VDF) and non-Steam shortcuts from per-profile
//! shortcuts.vdf files (binary VDF). Every pass returns freshly built
//! entries and records non-fatal problems in the caller's diagnostics sink.

pub mod operations;
pub mod pure;
pub mod types;

pub use operations::manifests::scan_installed;
pub use operations::shortcuts::{resolve_live, scan_shortcuts};
pub use pure::shortcut_id::derive_app_id;
pub use types::GameEntry;
