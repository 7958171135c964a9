//! Tags every template can use.

use crate::{
    context::RenderContext,
    error::Result,
    expr::{Pending, tag},
    node::{Node, Tag},
};

/// Renders its children one level deeper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent;

impl Tag for Indent {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.indented(|cx| cx.dispatch_all(node.children()))
    }
}

/// Writes one empty line, without indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankLine;

impl Tag for BlankLine {
    fn render(&self, _node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.blank_line();
        Ok(())
    }
}

/// An indentation scope; give it children with [`Pending::children`].
pub fn indent() -> Pending {
    tag(Indent)
}

/// A single empty line.
pub fn blank_line() -> Pending {
    tag(BlankLine)
}
