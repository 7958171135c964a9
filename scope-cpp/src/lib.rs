//! C++ tags for the scope text emitter.
//!
//! Build templates from [`scope_core::tag`] with the tags in [`ast`]:
//!
//! ```
//! use scope_core::{exprs, render_default, tag};
//! use scope_cpp::{Class, Method, Namespace, Visibility};
//!
//! let template = tag(Namespace::new("app")).children(exprs![
//!     tag(Class::new("Greeter")).children(exprs![
//!         tag(Method::new("void", "greet").visibility(Visibility::Public)).children(exprs![]),
//!     ]),
//! ]);
//!
//! let text = render_default(&template).unwrap();
//! assert!(text.contains("    public:\n        void greet() {}\n"));
//! ```
//!
//! Output variants are read from the `cpp` namespace of the render options'
//! extras; see [`Style`].

pub mod ast;
mod style;
mod visibility;

pub use ast::{Attribute, Class, CppFile, Enum, Method, MethodKind, Namespace};
pub use style::{BraceStyle, NAMESPACE, Style};
pub use visibility::Visibility;
