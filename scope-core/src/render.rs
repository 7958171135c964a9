//! Top-level render entry points.

use tracing::{debug, debug_span};

use crate::{
    context::RenderContext,
    error::Result,
    expr::{Expr, Pending},
    flatten::{flatten, flatten_pending},
    node::{Entry, Node},
    options::RenderOptions,
};

/// Anything that can be the root of a render pass.
///
/// Expressions are flattened just before they are dispatched; already
/// flattened nodes and entries are dispatched as they are.
pub trait Template {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()>;
}

impl Template for Expr {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.dispatch(&flatten(self)?)
    }
}

impl Template for Pending {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.dispatch_node(&flatten_pending(self)?)
    }
}

impl Template for Node {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.dispatch_node(self)
    }
}

impl Template for Entry {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.dispatch(self)
    }
}

impl Template for str {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        cx.write(self);
        Ok(())
    }
}

impl<T: Template + ?Sized> Template for &T {
    fn render_into(&self, cx: &mut RenderContext<'_>) -> Result<()> {
        (**self).render_into(cx)
    }
}

/// Render `root` to text.
///
/// The pass is all-or-nothing: on error the partial output is dropped.
pub fn render<T: Template + ?Sized>(root: &T, options: &RenderOptions) -> Result<String> {
    let span = debug_span!(
        "render",
        indent_width = options.indent_width(),
        indent_char = ?options.indent_char()
    );
    let _guard = span.enter();

    let mut cx = RenderContext::new(options);
    root.render_into(&mut cx)?;
    let output = cx.finish()?;
    debug!(bytes = output.len(), lines = output.lines().count(), "render finished");
    Ok(output)
}

/// Render `root` with [`RenderOptions::default`].
pub fn render_default<T: Template + ?Sized>(root: &T) -> Result<String> {
    let options = RenderOptions::default();
    render(root, &options)
}
