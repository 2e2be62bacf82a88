//! Normalized representation of vulnerability scan matches.
//!
//! Scanner output is normalized into [`Normalized`] before the browser starts.
//! The browser itself only ever sees a [`MatchStore`]: the matches, stable-sorted
//! once by package name and vulnerability id, and never mutated afterwards.
//!
//! ```
//! use vex_triage::model::{Match, MatchStore};
//!
//! let store = MatchStore::new(vec![
//!     Match::new("zlib", "CVE-2022-37434"),
//!     Match::new("openssl", "CVE-2023-0286"),
//! ]);
//!
//! assert_eq!(store.get(0).map(|m| m.package.name.as_str()), Some("openssl"));
//! ```

mod matches;
mod severity;
mod store;

pub use matches::*;
pub use severity::*;
pub use store::*;
