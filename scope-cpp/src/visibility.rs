/// Access level of a class member or base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Private,
    Protected,
    /// Whatever the enclosing class defaults to.
    #[default]
    Default,
}

impl Visibility {
    /// The C++ keyword, or `None` for [`Visibility::Default`].
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Private => Some("private"),
            Self::Protected => Some("protected"),
            Self::Default => None,
        }
    }
}
