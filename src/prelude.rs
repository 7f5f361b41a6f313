// prelude.rs - Convenient re-exports for the common surface.
//
//! # Prelude
//!
//! ```
//! use resub::prelude::*;
//!
//! let p = Pattern::new(r"(\w+)").unwrap();
//! let out = sub("hello world", &p, &Replacement::Template(r"[\1]"));
//! assert_eq!(out, "[hello] world");
//! ```

pub use crate::error::{Error, MatchFault};
pub use crate::escape::escape;
pub use crate::match_data::{MatchData, MatchDataBuilder, Span};
pub use crate::matcher::{last_match, Matcher, Options, Pattern};
pub use crate::subst::{gsub, gsub_literal, sub, sub_literal, Replacement};
pub use crate::template::expand;
