use scope_core::{Node, RenderContext, Result, Tag};

use crate::Visibility;

/// A data member or variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    ty: String,
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_const: bool,
    default_value: Option<String>,
}

impl Attribute {
    /// A declaration `ty name;`.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            visibility: Visibility::Default,
            is_static: false,
            is_const: false,
            default_value: None,
        }
    }

    /// Section the attribute is listed under inside a class.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Prefix the declaration with `static`.
    pub fn make_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Prefix the declaration with `const`.
    pub fn make_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Initializer written after ` = `.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
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

impl Tag for Attribute {
    fn render(&self, _node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        let mut line = String::new();
        if self.is_static {
            line.push_str("static ");
        }
        if self.is_const {
            line.push_str("const ");
        }
        line.push_str(&format!("{} {}", self.ty, self.name));
        if let Some(value) = &self.default_value {
            line.push_str(&format!(" = {value}"));
        }
        line.push(';');

        cx.write(&line);
        Ok(())
    }
}
