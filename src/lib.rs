//! # Resub
//!
//! Ruby-flavored `MatchData` and `sub`/`gsub` template substitution over a
//! pluggable regex matcher, with backslash scanning accelerated via
//! [`memchr`](https://crates.io/crates/memchr).
//!
//! The substitution engine only talks to the [`matcher::Matcher`] trait;
//! the shipped [`matcher::Pattern`] implementation is backed by the
//! [`regex`](https://crates.io/crates/regex) crate. Match results are
//! immutable [`match_data::MatchData`] values that own a copy of their
//! subject, so they stay valid no matter what the caller does to the
//! original string.
//!
//! ## Quick Start
//!
//! ```rust
//! use resub::prelude::*;
//!
//! let p = Pattern::new(r"(\w+)@(\w+)").unwrap();
//! let out = gsub("alice@example bob@test", &p, &Replacement::Template(r"\2: \1"));
//! assert_eq!(out, "example: alice test: bob");
//! ```
//!
//! Match results carry the full accessor surface:
//!
//! ```rust
//! use resub::prelude::*;
//!
//! let p = Pattern::new(r"(foo)(bar)(BAZ)?").unwrap();
//! let m = p.match_str("foobarbaz").unwrap();
//! assert_eq!(m.get(0), Some("foobar"));
//! assert_eq!(m.get(-2), Some("bar"));
//! assert_eq!(m.captures(), vec![Some("foo"), Some("bar"), None]);
//! assert_eq!(m.pre_match(), "");
//! assert_eq!(m.post_match(), "baz");
//! ```
//!
//! Replacements can also be callbacks, which take precedence over any
//! template interpretation:
//!
//! ```rust
//! use resub::prelude::*;
//!
//! let p = Pattern::new(r"\d+").unwrap();
//! let double = |m: &str| (m.parse::<i64>().unwrap() * 2).to_string();
//! assert_eq!(gsub("1 and 21", &p, &Replacement::Callback(&double)), "2 and 42");
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`match_data`] | Immutable match snapshot, builder, accessor API |
//! | [`template`] | Backreference-template expansion |
//! | [`subst`] | `sub`/`gsub` engines and the literal-needle path |
//! | [`matcher`] | `Matcher` boundary trait, option flags, default `Pattern` |
//! | [`escape`] | Metacharacter escaping for literal pattern use |
//! | [`error`] | Error and matcher-fault types |

pub mod error;
pub mod escape;
pub mod match_data;
pub mod matcher;
pub mod prelude;
pub mod subst;
pub mod template;
