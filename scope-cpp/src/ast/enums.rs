use scope_core::{Node, RenderContext, Result, Tag};

use crate::{Visibility, style::Style};

/// An enumeration; its values are arguments, not children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    name: String,
    values: Vec<String>,
    visibility: Visibility,
}

impl Enum {
    /// An empty enum; public when nested in a class unless changed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    /// Append one enumerator.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append several enumerators in order.
    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Section the enum is listed under inside a class.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The visibility set with [`visibility`](Self::visibility).
    pub fn access(&self) -> Visibility {
        self.visibility
    }
}

impl Tag for Enum {
    fn render(&self, _node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        let Some((last, rest)) = self.values.split_last() else {
            cx.write(&format!("enum {} {{}};", self.name));
            return Ok(());
        };

        let style = Style::from_context(cx)?;
        style.open(cx, &format!("enum {}", self.name));
        cx.indented(|cx| {
            for value in rest {
                cx.write(&format!("{value},"));
            }
            cx.write(last);
            Ok(())
        })?;
        cx.write("};");
        Ok(())
    }
}
