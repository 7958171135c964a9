use scope_core::{Children, Node, RenderContext, Result, Tag};

use crate::{Visibility, style::Style};

/// What kind of function a [`Method`] declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    Function { return_type: String },
    Constructor,
    Destructor,
}

/// A function, method, constructor or destructor.
///
/// The body follows the node's children: without a children list the
/// method is only declared (`f();`), an empty list gives an empty body
/// (`f() {}`), anything else is rendered inside braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    kind: MethodKind,
    name: String,
    args: Vec<String>,
    visibility: Visibility,
    is_virtual: bool,
    is_const: bool,
}

impl Method {
    /// A free function or method returning `return_type`.
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(
            MethodKind::Function {
                return_type: return_type.into(),
            },
            name.into(),
        )
    }

    /// Constructor of `class_name`.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Constructor, class_name.into())
    }

    /// Destructor of `class_name`; the `~` is added here.
    pub fn destructor(class_name: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Destructor, format!("~{}", class_name.into()))
    }

    fn with_kind(kind: MethodKind, name: String) -> Self {
        Self {
            kind,
            name,
            args: Vec::new(),
            visibility: Visibility::Default,
            is_virtual: false,
            is_const: false,
        }
    }

    /// Add a parameter, e.g. `"const std::string& name"`.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several parameters in order.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Section the method is listed under inside a class.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Prefix the signature with `virtual`.
    pub fn make_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Mark the method `const`.
    pub fn make_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn kind(&self) -> &MethodKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The visibility set with [`visibility`](Self::visibility).
    pub fn access(&self) -> Visibility {
        self.visibility
    }

    fn signature(&self) -> String {
        let mut sig = String::new();
        if self.is_virtual {
            sig.push_str("virtual ");
        }
        if let MethodKind::Function { return_type } = &self.kind {
            sig.push_str(return_type);
            sig.push(' ');
        }
        sig.push_str(&format!("{}({})", self.name, self.args.join(", ")));
        if self.is_const {
            sig.push_str(" const");
        }
        sig
    }
}

impl Tag for Method {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        let signature = self.signature();

        match node.children_state() {
            Children::Undefined => cx.write(&format!("{signature};")),
            Children::Defined(body) if body.is_empty() => cx.write(&format!("{signature} {{}}")),
            Children::Defined(body) => {
                let style = Style::from_context(cx)?;
                style.open(cx, &signature);
                cx.indented(|cx| cx.dispatch_all(body))?;
                cx.write("}");
            }
        }
        Ok(())
    }
}
