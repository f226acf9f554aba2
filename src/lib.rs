//! # dotjson
//!
//! Read, query, and mutate JSON documents through a simplified dot/bracket
//! path syntax. Built as a lightweight stand-in for a general-purpose JSON
//! query tool in shell-scripted workflows, such as managing API-key
//! configuration files.
//!
//! ## Features
//!
//! - **Dot/bracket paths:** `.keys[0].name` addresses the `name` field of
//!   the first element of the `keys` array; `.` addresses the whole
//!   document.
//! - **Lenient grammar:** path parsing never fails. A fragment the grammar
//!   cannot make sense of is treated as a literal key.
//! - **Auto-vivification:** assigning through missing keys creates the
//!   intermediate objects on the way (objects only, never arrays).
//! - **Order-preserving documents:** object key order survives
//!   load → mutate → save round-trips; freshly inserted keys append at the
//!   end.
//!
//! ## Examples
//!
//! ### Resolving a path
//!
//! ```rust
//! use dotjson::{resolve, JsonPath};
//! use serde_json::json;
//!
//! let doc = json!({"keys": [{"name": "a", "key": "x"}]});
//! let path = JsonPath::from(".keys[0].name");
//!
//! assert_eq!(resolve(&doc, &path), Some(&json!("a")));
//! assert_eq!(resolve(&doc, &JsonPath::from(".keys[7]")), None);
//! ```
//!
//! ### Assigning through missing keys
//!
//! ```rust
//! use dotjson::{assign, JsonPath};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! assign(&mut doc, &JsonPath::from(".auth.default"), json!("project-x"));
//!
//! assert_eq!(doc, json!({"auth": {"default": "project-x"}}));
//! ```
//!
//! ### Working with arrays
//!
//! ```rust
//! use dotjson::{ops, JsonPath};
//! use serde_json::json;
//!
//! let mut doc = json!({"keys": [{"name": "a", "key": "x"}]});
//! let keys = JsonPath::from(".keys");
//!
//! ops::add(&mut doc, &keys, r#"{"name":"b","key":"y"}"#).unwrap();
//! assert_eq!(ops::length(&doc, &keys), 2);
//! assert_eq!(ops::find(&doc, &keys, "name", "b"), r#"{"name":"b","key":"y"}"#);
//! ```
//!
//! The `dotjson` binary wraps these primitives in one command per
//! operation; see the README for the CLI surface.

mod manipulators;
pub mod ops;
mod parse;
pub mod store;
mod types;

pub use manipulators::{assign, remove, resolve, resolve_mut};
pub use types::{Error, JsonPath, PathToken};
