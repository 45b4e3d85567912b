//! `apisync_core` keeps a markdown API reference in step with the public
//! interface declared in a set of C++ headers. The document's banner carries
//! the version read from a single version file, and every class marker is
//! followed by a fenced block regenerated from that class's header.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Version file
//!   → Version reader (first `// <Product> version: <x>` line)
//! API document
//!   → Document model (ordered lines with range replacement)
//!   → Banner patch (`# <Product> <x>`)
//!   → For each ## Class `<Name>` marker, in order:
//!       Locator (class paragraph through the closing `};`)
//!       → Stripper (drops default-private and `private:` regions)
//!       → Cosmetics (per-class substitutions)
//!       → Splice (replaces the fenced block after the marker)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `apisync.toml`.
//! - [`locator`] — The declaration/terminator micro-grammar.
//! - [`stripper`] — Private region removal.
//!
//! ## Key Types
//!
//! - [`Document`] — The documentation file as a sequence of lines.
//! - [`SyncContext`] — Root directory, config and cosmetic hooks.
//! - [`SyncOutcome`] — The synchronized document and what was rendered.
//! - [`CosmeticRegistry`] — Per-class post-processing hooks.
//! - [`ApiSyncError`] — Every fatal condition.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apisync_core::{SyncContext, sync_file, write_outcome};
//! use std::path::Path;
//!
//! let ctx = SyncContext::from_root(".").unwrap();
//! let outcome = sync_file(Path::new("API.md"), &ctx).unwrap();
//! if outcome.is_changed() {
//!     write_outcome(Path::new("API.md"), &outcome).unwrap();
//! }
//! ```

pub use config::ApiSyncConfig;
pub use cosmetics::*;
pub use document::*;
pub use engine::*;
pub use error::*;
pub use version::*;

pub mod config;
mod cosmetics;
mod document;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod locator;
pub mod stripper;
mod version;

#[cfg(test)]
mod __fixtures;
