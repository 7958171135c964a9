//! The concrete, already-flattened render tree.
//!
//! A [`Node`] pairs a [`Tag`] (the node type with its own arguments) with
//! the ordered [`Children`] produced by flattening. Tags only implement
//! [`Tag::render`]; children and the children-defined flag are owned
//! uniformly by `Node`.

use std::{any::Any, fmt, sync::Arc};

use crate::{context::RenderContext, error::Result};

/// Object-safe equality and downcasting for tags.
///
/// Implemented automatically for every `'static` type with `PartialEq`.
pub trait AnyTag: Any {
    fn as_any(&self) -> &dyn Any;

    /// Compare with another tag of possibly different type.
    fn tag_eq(&self, other: &dyn Any) -> bool;
}

impl<T: Any + PartialEq> AnyTag for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn tag_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// A node type: its arguments plus how it renders.
///
/// Implementations write through the context only (`write`, `blank_line`,
/// `indent`, `unindent`, `dispatch`) and reach their children through the
/// `node` they are handed.
///
/// # Example
///
/// ```
/// use scope_core::{Node, RenderContext, Result, Tag};
///
/// #[derive(Debug, PartialEq)]
/// struct Line(String);
///
/// impl Tag for Line {
///     fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
///         cx.write(&self.0);
///         cx.dispatch_all(node.children())
///     }
/// }
/// ```
pub trait Tag: AnyTag + fmt::Debug + Send + Sync {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Children of a node.
///
/// `Undefined` means no children list was ever supplied; `Defined` holds an
/// explicitly supplied list, which may be empty after expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Children {
    #[default]
    Undefined,
    Defined(Vec<Entry>),
}

impl Children {
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    pub fn as_slice(&self) -> &[Entry] {
        match self {
            Self::Undefined => &[],
            Self::Defined(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// A flattened node: a tag and its resolved children.
#[derive(Debug, Clone)]
pub struct Node {
    tag: Arc<dyn Tag>,
    children: Children,
}

impl Node {
    pub fn new(tag: impl Tag) -> Self {
        Self::from_shared(Arc::new(tag), Children::Undefined)
    }

    pub(crate) fn from_shared(tag: Arc<dyn Tag>, children: Children) -> Self {
        Self { tag, children }
    }

    /// Replace the children (used when building trees by hand).
    pub fn with_children(mut self, children: impl IntoIterator<Item = impl Into<Entry>>) -> Self {
        self.children = Children::Defined(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn tag(&self) -> &dyn Tag {
        &*self.tag
    }

    /// The tag as a concrete type, if it is one.
    pub fn downcast<T: Tag>(&self) -> Option<&T> {
        (*self.tag).as_any().downcast_ref::<T>()
    }

    pub fn is<T: Tag>(&self) -> bool {
        self.downcast::<T>().is_some()
    }

    pub fn children(&self) -> &[Entry] {
        self.children.as_slice()
    }

    pub fn children_state(&self) -> &Children {
        &self.children
    }

    /// Whether a children list was supplied, even an empty one.
    pub fn children_defined(&self) -> bool {
        self.children.is_defined()
    }

    pub fn render(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        self.tag.render(self, cx)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        (*self.tag).tag_eq((*other.tag).as_any()) && self.children == other.children
    }
}

/// One child of a node: literal text or another node.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Text(String),
    Node(Node),
}

impl Entry {
    /// The node, if this entry is not text.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }
}

impl From<Node> for Entry {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
