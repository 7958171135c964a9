use scope_core::{Entry, Error, Node, RenderContext, Result, Tag};
use tracing::trace;

use super::{Attribute, Enum, Method};
use crate::{Visibility, style::Style};

/// A class or struct.
///
/// Members are grouped by visibility: those with the unit's default
/// visibility come first without a label, then the other of
/// `public`/`private`, then `protected`. Order within a group is the order
/// of the children. Without a children list only a forward declaration is
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    unit: &'static str,
    default_visibility: Visibility,
    name: String,
    superclasses: Vec<(Visibility, String)>,
    visibility: Visibility,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_unit("class", Visibility::Private, name.into())
    }

    /// A `struct`, whose members default to public.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::with_unit("struct", Visibility::Public, name.into())
    }

    fn with_unit(unit: &'static str, default_visibility: Visibility, name: String) -> Self {
        Self {
            unit,
            default_visibility,
            name,
            superclasses: Vec::new(),
            visibility: Visibility::Default,
        }
    }

    /// Inherit from `name`; the visibility must be explicit.
    pub fn superclass(mut self, visibility: Visibility, name: impl Into<String>) -> Self {
        self.superclasses.push((visibility, name.into()));
        self
    }

    /// Visibility of this class when nested in another one.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> Visibility {
        self.visibility
    }

    fn header(&self) -> Result<String> {
        let mut header = format!("{} {}", self.unit, self.name);
        if self.superclasses.is_empty() {
            return Ok(header);
        }

        let bases = self
            .superclasses
            .iter()
            .map(|(visibility, name)| match visibility.keyword() {
                Some(keyword) => Ok(format!("{keyword} {name}")),
                None => Err(Error::tag(
                    "Class",
                    format!("superclass '{name}' of '{}' needs an explicit visibility", self.name),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        header.push_str(" : ");
        header.push_str(&bases.join(", "));
        Ok(header)
    }

    /// Sections in output order, with the label written before each.
    fn sections(&self) -> [(Visibility, Option<&'static str>); 3] {
        match self.default_visibility {
            Visibility::Public => [
                (Visibility::Public, None),
                (Visibility::Private, Some("private:")),
                (Visibility::Protected, Some("protected:")),
            ],
            _ => [
                (Visibility::Private, None),
                (Visibility::Public, Some("public:")),
                (Visibility::Protected, Some("protected:")),
            ],
        }
    }

    fn in_section(&self, entry: &Entry, section: Visibility) -> bool {
        let visibility = member_visibility(entry);
        if section == self.default_visibility {
            visibility == section || visibility == Visibility::Default
        } else {
            visibility == section
        }
    }
}

/// Visibility declared by a member; text and unknown tags use the default.
fn member_visibility(entry: &Entry) -> Visibility {
    let Some(node) = entry.as_node() else {
        return Visibility::Default;
    };

    if let Some(method) = node.downcast::<Method>() {
        method.access()
    } else if let Some(attribute) = node.downcast::<Attribute>() {
        attribute.access()
    } else if let Some(class) = node.downcast::<Class>() {
        class.access()
    } else if let Some(e) = node.downcast::<Enum>() {
        e.access()
    } else {
        Visibility::Default
    }
}

impl Tag for Class {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Result<()> {
        let header = self.header()?;
        if !node.children_defined() {
            cx.write(&format!("{header};"));
            return Ok(());
        }

        let style = Style::from_context(cx)?;
        style.open(cx, &header);

        for (section, label) in self.sections() {
            let members: Vec<&Entry> = node
                .children()
                .iter()
                .filter(|entry| self.in_section(entry, section))
                .collect();
            if members.is_empty() {
                continue;
            }

            trace!(class = %self.name, ?section, members = members.len(), "section");
            if let Some(label) = label {
                cx.write(label);
            }
            cx.indented(|cx| cx.dispatch_all(members))?;
        }

        style.close(cx, "};", &format!("{} {}", self.unit, self.name));
        Ok(())
    }
}
