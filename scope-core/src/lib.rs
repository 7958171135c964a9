//! Declarative engine for emitting indented text from a tree of tags.
//!
//! Callers build an [`Expr`] tree with [`tag`], [`repeat`], [`group`],
//! literal strings and the built-in [`indent`] / [`blank_line`] tags. The
//! tree is [`flatten`]ed into a [`Node`] tree and rendered through a
//! [`RenderContext`] to a single string.
//!
//! # Module Organization
//!
//! - [`expr`] - Expression algebra (Pending, Repeat, Group, Literal)
//! - [`flatten`] - Expansion of groups and repeats into concrete nodes
//! - [`node`] - The concrete tree and the [`Tag`] contract
//! - [`context`] - Per-pass output buffer and indentation
//! - [`options`] - Immutable render configuration and namespaced extras
//! - [`builtin`] - Indent and BlankLine tags
//! - [`testing`] - Test utilities (feature-gated)

pub mod builtin;
pub mod context;
pub mod error;
pub mod expr;
pub mod flatten;
pub mod node;
pub mod options;
mod render;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builtin::{BlankLine, Indent, blank_line, indent};
pub use context::RenderContext;
pub use error::{Error, Result};
pub use expr::{Expr, Pending, Repeat, group, repeat, tag};
pub use flatten::{expand, flatten, flatten_pending};
pub use node::{AnyTag, Children, Entry, Node, Tag};
pub use options::{RenderOptions, RenderOptionsBuilder};
pub use render::{Template, render, render_default};
