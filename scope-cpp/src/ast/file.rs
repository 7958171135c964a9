use scope_core::{Node, RenderContext, Result, Tag};

/// A source file: renders its children in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CppFile {
    pragma_once: bool,
}

impl CppFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the file with `#pragma once`, for headers.
    pub fn header() -> Self {
        Self { pragma_once: true }
    }
}

impl Tag for CppFile {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        if self.pragma_once {
            cx.write("#pragma once");
            cx.blank_line();
        }
        cx.dispatch_all(node.children())
    }
}
