//! C++ tags.
//!
//! Each type holds the arguments of one construct and renders it through
//! the render context; wrap them with [`scope_core::tag`] to use them in a
//! template.

mod attribute;
mod class;
mod enums;
mod file;
mod method;
mod namespace;

pub use attribute::Attribute;
pub use class::Class;
pub use enums::Enum;
pub use file::CppFile;
pub use method::{Method, MethodKind};
pub use namespace::Namespace;
