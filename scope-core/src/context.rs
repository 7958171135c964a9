//! Per-pass render state.

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::{
    error::{Error, Result},
    node::{Entry, Node},
    options::RenderOptions,
};

/// Output buffer and indentation depth for a single render pass.
///
/// Created fresh by [`render`](crate::render()) and discarded once the text
/// is extracted. Depth is tracked in characters and moves in steps of the
/// configured indentation width.
///
/// # Example
///
/// ```
/// use scope_core::{RenderContext, RenderOptions};
///
/// let options = RenderOptions::default();
/// let mut cx = RenderContext::new(&options);
/// cx.write("fn main() {");
/// cx.indent();
/// cx.write("run();");
/// cx.unindent().unwrap();
/// cx.write("}");
///
/// assert_eq!(cx.finish().unwrap(), "fn main() {\n    run();\n}\n");
/// ```
#[derive(Debug)]
pub struct RenderContext<'a> {
    options: &'a RenderOptions,
    indentation: usize,
    buffer: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            indentation: 0,
            buffer: String::new(),
        }
    }

    /// Write a line at the current indentation.
    pub fn write(&mut self, line: &str) {
        self.buffer
            .extend(std::iter::repeat_n(self.options.indent_char(), self.indentation));
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Write an empty line; indentation is not applied.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.indentation += self.options.indent_width();
    }

    pub fn unindent(&mut self) -> Result<()> {
        let width = self.options.indent_width();
        self.indentation = self.indentation.checked_sub(width).ok_or_else(|| {
            Error::unbalanced(format!(
                "unindent at depth {} with width {width}",
                self.indentation
            ))
        })?;
        Ok(())
    }

    /// Run `f` one level deeper.
    pub fn indented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.indent();
        f(self)?;
        self.unindent()
    }

    /// Render one entry: text is written as a line, nodes render themselves.
    pub fn dispatch(&mut self, entry: &Entry) -> Result<()> {
        match entry {
            Entry::Text(line) => {
                self.write(line);
                Ok(())
            }
            Entry::Node(node) => self.dispatch_node(node),
        }
    }

    /// Render one node. Every node of a pass, the root included, goes through here.
    pub fn dispatch_node(&mut self, node: &Node) -> Result<()> {
        trace!(tag = node.tag().name(), depth = self.indentation, "dispatch");
        node.render(self)
    }

    pub fn dispatch_all<'e>(&mut self, entries: impl IntoIterator<Item = &'e Entry>) -> Result<()> {
        for entry in entries {
            self.dispatch(entry)?;
        }
        Ok(())
    }

    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// Shorthand for [`RenderOptions::extra`] on the active options.
    pub fn extra<T: DeserializeOwned>(&self, namespace: &str, key: &str, default: T) -> Result<T> {
        self.options.extra(namespace, key, default)
    }

    /// Current indentation in characters.
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Current indentation in levels.
    pub fn level(&self) -> usize {
        self.indentation / self.options.indent_width()
    }

    /// Output written so far.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Consume the context and return the output.
    ///
    /// Fails if indentation was left open.
    pub fn finish(self) -> Result<String> {
        if self.indentation != 0 {
            return Err(Error::unbalanced(format!(
                "pass finished at depth {}",
                self.indentation
            )));
        }
        Ok(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_applies_indentation() {
        let options = RenderOptions::default();
        let mut cx = RenderContext::new(&options);
        cx.write("a");
        cx.indent();
        cx.indent();
        cx.write("b");
        assert_eq!(cx.indentation(), 8);
        assert_eq!(cx.level(), 2);
        assert_eq!(cx.output(), "a\n        b\n");
    }

    #[test]
    fn test_blank_line_ignores_indentation() {
        let options = RenderOptions::default();
        let mut cx = RenderContext::new(&options);
        cx.indent();
        cx.blank_line();
        cx.unindent().unwrap();
        assert_eq!(cx.finish().unwrap(), "\n");
    }

    #[test]
    fn test_tab_indentation() {
        let options = RenderOptions::tabs();
        let mut cx = RenderContext::new(&options);
        cx.indented(|cx| {
            cx.write("x");
            Ok(())
        })
        .unwrap();
        assert_eq!(cx.finish().unwrap(), "\tx\n");
    }

    #[test]
    fn test_unindent_below_zero() {
        let options = RenderOptions::default();
        let mut cx = RenderContext::new(&options);
        let err = cx.unindent().unwrap_err();
        assert!(matches!(*err, Error::UnbalancedIndent { .. }));
        assert_eq!(cx.indentation(), 0);
    }

    #[test]
    fn test_finish_with_open_indentation() {
        let options = RenderOptions::default();
        let mut cx = RenderContext::new(&options);
        cx.indent();
        assert!(cx.finish().is_err());
    }

    #[test]
    fn test_dispatch_text() {
        let options = RenderOptions::spaces(2).unwrap();
        let mut cx = RenderContext::new(&options);
        cx.indent();
        cx.dispatch(&Entry::from("line")).unwrap();
        cx.unindent().unwrap();
        assert_eq!(cx.finish().unwrap(), "  line\n");
    }

    #[derive(Debug, PartialEq)]
    struct Header;

    impl crate::node::Tag for Header {
        fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
            cx.write("header");
            cx.indented(|cx| cx.dispatch_all(node.children()))
        }
    }

    #[test]
    fn test_dispatch_node_matches_dispatch_entry() {
        let options = RenderOptions::default();
        let node = Node::new(Header).with_children(["a"]);

        let mut direct = RenderContext::new(&options);
        direct.dispatch_node(&node).unwrap();
        let mut wrapped = RenderContext::new(&options);
        wrapped.dispatch(&Entry::Node(node)).unwrap();

        assert_eq!(direct.finish().unwrap(), "header\n    a\n");
        assert_eq!(wrapped.finish().unwrap(), "header\n    a\n");
    }

    #[test]
    fn test_extra_reads_active_options() {
        let options = RenderOptions::builder()
            .extra("cpp", "brace_style", "next_line")
            .build()
            .unwrap();
        let cx = RenderContext::new(&options);
        assert_eq!(
            cx.extra("cpp", "brace_style", "same_line".to_string()).unwrap(),
            "next_line"
        );
        assert_eq!(cx.extra("cpp", "missing", 3_i64).unwrap(), 3);
    }
}
