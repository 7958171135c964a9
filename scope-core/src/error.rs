use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for scope operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse render options")]
    #[diagnostic(code(scope::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid indentation width {width}")]
    #[diagnostic(
        code(scope::invalid_indent_width),
        help("indentation width must be at least 1")
    )]
    InvalidIndentWidth { width: usize },

    #[error("invalid indentation character {ch:?}")]
    #[diagnostic(
        code(scope::invalid_indent_char),
        help("use a space, a tab, or another printable character")
    )]
    InvalidIndentChar { ch: char },

    #[error("unbalanced indentation: {message}")]
    #[diagnostic(
        code(scope::unbalanced_indent),
        help("indent and unindent must be paired inside a single tag's render method")
    )]
    UnbalancedIndent { message: String },

    #[error("a {kind} cannot be rendered on its own")]
    #[diagnostic(
        code(scope::transparent_root),
        help("wrap the {kind} in a tag's children so its entries have a parent")
    )]
    TransparentRoot { kind: &'static str },

    #[error("option '{namespace}.{key}' is not a valid {expected}")]
    #[diagnostic(code(scope::extra_type))]
    ExtraType {
        namespace: String,
        key: String,
        expected: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("{tag}: {message}")]
    #[diagnostic(code(scope::tag_error))]
    Tag { tag: &'static str, message: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an unbalanced indentation error
    pub fn unbalanced(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnbalancedIndent {
            message: message.into(),
        })
    }

    /// Create an error raised by a tag's render method
    pub fn tag(tag: &'static str, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Tag {
            tag,
            message: message.into(),
        })
    }
}
