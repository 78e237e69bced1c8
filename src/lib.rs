//! Fix API URLs: batch text patcher for the frontend's backend-URL migration.
//!
//! Every frontend page used to pin the backend with a hardcoded
//! `const API_URL = 'http://localhost:5000';` line. This crate rewrites a
//! fixed list of those pages to read `process.env.NEXT_PUBLIC_API_URL` with
//! the localhost value as fallback, and updates the accompanying comment.
//!
//! # Architecture
//!
//! One pipeline: [`patcher::run`] walks an injected, ordered target list and
//! applies an injected, ordered rule list as verbatim substring replace-alls.
//! A file is rewritten only when the accumulated result differs from what was
//! read, which makes runs naturally idempotent - after a successful pass the
//! search literals no longer exist.
//!
//! # Safety
//!
//! - Atomic file writes (tempfile + fsync + rename); no half-written targets
//! - UTF-8 reads; a non-UTF-8 or unreadable target aborts the run
//! - Missing targets are an expected outcome, never an error
//!
//! # Example
//!
//! ```no_run
//! use fix_api_urls::{patcher, rules::default_rules, targets::DEFAULT_TARGETS};
//! use std::path::Path;
//!
//! let result = patcher::run(Path::new("."), DEFAULT_TARGETS, &default_rules())?;
//! println!("rewrote {} files", result.fixed);
//! # Ok::<(), fix_api_urls::patcher::PatchError>(())
//! ```

pub mod patcher;
pub mod report;
pub mod rules;
pub mod targets;

// Re-exports
pub use patcher::{run, FileOutcome, PatchError, RunResult};
pub use rules::{default_rules, ReplacementRule};
pub use targets::DEFAULT_TARGETS;
