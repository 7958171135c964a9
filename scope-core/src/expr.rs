//! Expression algebra: the tree callers build before flattening.
//!
//! - [`tag`] - a node type with its arguments, optionally given children
//! - [`repeat`] - one child expression per source element, in source order
//! - [`group`] - transparent grouping, spliced into the parent
//! - literal text, from `&str` / `String`
//!
//! # Example
//!
//! ```
//! use scope_core::{Node, RenderContext, Result, Tag, exprs, group, render_default, repeat, tag};
//!
//! #[derive(Debug, PartialEq)]
//! struct Item(String);
//!
//! impl Tag for Item {
//!     fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
//!         cx.write(&self.0);
//!         cx.indented(|cx| cx.dispatch_all(node.children()))
//!     }
//! }
//!
//! let template = tag(Item("root".into())).children(exprs![
//!     repeat(1..=2, |i| tag(Item(format!("item {i}")))),
//!     group(exprs!["text", tag(Item("last".into()))]),
//! ]);
//!
//! let text = render_default(&template).unwrap();
//! assert_eq!(text, "root\n    item 1\n    item 2\n    text\n    last\n");
//! ```

use std::{fmt, sync::Arc};

use crate::node::Tag;

/// A possibly-lazy description of a document fragment.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Literal text, written as one line.
    Literal(String),
    /// A tag awaiting flattening.
    Pending(Pending),
    /// Expands to one expression per source element.
    Repeat(Repeat),
    /// Expands to its contents with no node of its own.
    Group(Arc<[Expr]>),
}

impl Expr {
    /// Short description of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Pending(_) => "tag",
            Self::Repeat(_) => "repeat",
            Self::Group(_) => "group",
        }
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Expr {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<Pending> for Expr {
    fn from(pending: Pending) -> Self {
        Self::Pending(pending)
    }
}

impl From<Repeat> for Expr {
    fn from(repeat: Repeat) -> Self {
        Self::Repeat(repeat)
    }
}

/// A tag and its not-yet-flattened children.
///
/// `children` is `None` until a children list is applied; applying an
/// empty list still marks the children as defined.
#[derive(Debug, Clone)]
pub struct Pending {
    tag: Arc<dyn Tag>,
    children: Option<Arc<[Expr]>>,
}

impl Pending {
    /// Wrap `tag` with no children list; same as [`tag()`].
    pub fn new(tag: impl Tag) -> Self {
        Self {
            tag: Arc::new(tag),
            children: None,
        }
    }

    /// Apply a children list, replacing any previous one.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    /// The node type and its arguments.
    pub fn tag(&self) -> &dyn Tag {
        &*self.tag
    }

    pub(crate) fn shared_tag(&self) -> Arc<dyn Tag> {
        Arc::clone(&self.tag)
    }

    /// The applied children list, or `None` if no list was applied.
    pub fn child_exprs(&self) -> Option<&[Expr]> {
        self.children.as_deref()
    }

    /// Whether a children list was applied, even an empty one.
    pub fn children_defined(&self) -> bool {
        self.children.is_some()
    }
}

/// Create a pending expression for `tag` with no children list.
pub fn tag(tag: impl Tag) -> Pending {
    Pending::new(tag)
}

/// Generates the expressions of a [`Repeat`].
trait Source: Send + Sync {
    fn len(&self) -> usize;
    fn generate(&self) -> Vec<Expr>;
}

struct Mapped<T, F> {
    items: Vec<T>,
    map: F,
}

impl<T, F, E> Source for Mapped<T, F>
where
    T: Send + Sync,
    F: Fn(&T) -> E + Send + Sync,
    E: Into<Expr>,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn generate(&self) -> Vec<Expr> {
        self.items.iter().map(|item| (self.map)(item).into()).collect()
    }
}

/// One child expression per source element.
///
/// The source is collected when the repeat is created; the mapping runs
/// each time the repeat is expanded, so it should be pure.
#[derive(Clone)]
pub struct Repeat {
    source: Arc<dyn Source>,
}

impl Repeat {
    /// Number of source elements.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map every source element, in source order.
    pub fn generate(&self) -> Vec<Expr> {
        self.source.generate()
    }
}

impl fmt::Debug for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeat").field("len", &self.len()).finish()
    }
}

/// Map each element of `items` to a child expression.
///
/// `items` must be finite. The repeat owns its elements and mapping, so both
/// are `'static`: pass owned or cloned model data rather than borrowing it.
///
/// ```
/// use scope_core::{exprs, indent, render_default, repeat};
///
/// let fields = vec![String::from("int x;"), String::from("int y;")];
/// let template = indent().children(exprs![repeat(fields.clone(), |f| f.clone())]);
///
/// assert_eq!(render_default(&template).unwrap(), "    int x;\n    int y;\n");
/// assert_eq!(fields.len(), 2);
/// ```
pub fn repeat<I, F, E>(items: I, map: F) -> Repeat
where
    I: IntoIterator,
    I::Item: Send + Sync + 'static,
    F: Fn(&I::Item) -> E + Send + Sync + 'static,
    E: Into<Expr>,
{
    Repeat {
        source: Arc::new(Mapped {
            items: items.into_iter().collect(),
            map,
        }),
    }
}

/// Group `children` without creating a node; they splice into the parent.
pub fn group<I>(children: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::Group(children.into_iter().map(Into::into).collect())
}

/// Build a `Vec<Expr>` from heterogeneous items.
///
/// ```
/// use scope_core::{Expr, exprs, group};
///
/// let items: Vec<Expr> = exprs!["a", String::from("b"), group(exprs![])];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! exprs {
    () => {
        ::std::vec::Vec::<$crate::Expr>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Expr::from($item)),+]
    };
}
