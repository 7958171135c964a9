use scope_core::{Node, RenderContext, Result, Tag};

use crate::style::Style;

/// A named or anonymous namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    name: Option<String>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Tag for Namespace {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        let style = Style::from_context(cx)?;
        let label = match &self.name {
            Some(name) => format!("namespace {name}"),
            None => "namespace".to_string(),
        };

        style.open(cx, &label);
        cx.indented(|cx| cx.dispatch_all(node.children()))?;
        style.close(cx, "}", &label);
        Ok(())
    }
}
