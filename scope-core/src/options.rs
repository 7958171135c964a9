//! Render configuration.
//!
//! [`RenderOptions`] is immutable once built. It carries the indentation
//! unit and a map of namespaced extras that tag implementations query to
//! pick between output variants (brace placement, trailing comments, ...)
//! without the engine knowing those keys exist.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Options for a render pass.
///
/// # Example
///
/// ```
/// use scope_core::RenderOptions;
///
/// let options = RenderOptions::builder()
///     .indent_char('\t')
///     .indent_width(1)
///     .extra("cpp", "brace_style", "next_line")
///     .build()
///     .unwrap();
///
/// assert_eq!(options.indent_unit(), "\t");
/// assert_eq!(options.extra("cpp", "brace_style", String::new()).unwrap(), "next_line");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct RenderOptions {
    indent_char: char,
    indent_width: usize,
    extras: IndexMap<String, toml::Table>,
}

impl RenderOptions {
    pub const DEFAULT_INDENT_CHAR: char = ' ';
    pub const DEFAULT_INDENT_WIDTH: usize = 4;

    /// Start building options from the defaults.
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Indentation with `width` spaces per level.
    pub fn spaces(width: usize) -> Result<Self> {
        Self::builder().indent_width(width).build()
    }

    /// Indentation with one tab per level.
    pub fn tabs() -> Self {
        Self {
            indent_char: '\t',
            indent_width: 1,
            extras: IndexMap::new(),
        }
    }

    /// Parse options from a TOML document, reporting errors against `filename`.
    pub fn from_toml(src: &str, filename: &str) -> Result<Self> {
        let raw: RawOptions = toml::from_str(src).map_err(|e| Error::parse(e, src, filename))?;
        Self::try_from(raw)
    }

    pub fn indent_char(&self) -> char {
        self.indent_char
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// One indentation level as a string.
    pub fn indent_unit(&self) -> String {
        self.indent_char.to_string().repeat(self.indent_width)
    }

    /// Options registered under `namespace`, if any.
    pub fn namespace(&self, namespace: &str) -> Option<&toml::Table> {
        self.extras.get(namespace)
    }

    /// Look up `namespace.key`, falling back to `default` when either is absent.
    ///
    /// A value that is present but cannot be read as `T` is an error: it is
    /// never coerced or silently replaced by the default.
    pub fn extra<T: DeserializeOwned>(&self, namespace: &str, key: &str, default: T) -> Result<T> {
        let Some(value) = self.namespace(namespace).and_then(|table| table.get(key)) else {
            return Ok(default);
        };

        toml::Value::try_into::<T>(value.clone()).map_err(|source| {
            Box::new(Error::ExtraType {
                namespace: namespace.to_string(),
                key: key.to_string(),
                expected: std::any::type_name::<T>(),
                source,
            })
        })
    }

    fn validate(&self) -> Result<()> {
        if self.indent_width == 0 {
            return Err(Box::new(Error::InvalidIndentWidth {
                width: self.indent_width,
            }));
        }
        let ch = self.indent_char;
        if ch == '\n' || ch == '\r' || (ch.is_control() && ch != '\t') {
            return Err(Box::new(Error::InvalidIndentChar { ch }));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_char: Self::DEFAULT_INDENT_CHAR,
            indent_width: Self::DEFAULT_INDENT_WIDTH,
            extras: IndexMap::new(),
        }
    }
}

impl FromStr for RenderOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml(s, "options.toml")
    }
}

/// Builder for [`RenderOptions`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn indent_char(mut self, ch: char) -> Self {
        self.options.indent_char = ch;
        self
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.options.indent_width = width;
        self
    }

    /// Set a single extra option under `namespace`.
    pub fn extra(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<toml::Value>,
    ) -> Self {
        self.options
            .extras
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Merge a whole table of options into `namespace`.
    pub fn extras(mut self, namespace: impl Into<String>, table: toml::Table) -> Self {
        self.options
            .extras
            .entry(namespace.into())
            .or_default()
            .extend(table);
        self
    }

    pub fn build(self) -> Result<RenderOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// On-disk shape of the options; every key is optional.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOptions {
    indent_char: char,
    indent_width: usize,
    extras: IndexMap<String, toml::Table>,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            indent_char: RenderOptions::DEFAULT_INDENT_CHAR,
            indent_width: RenderOptions::DEFAULT_INDENT_WIDTH,
            extras: IndexMap::new(),
        }
    }
}

impl TryFrom<RawOptions> for RenderOptions {
    type Error = Box<Error>;

    fn try_from(raw: RawOptions) -> Result<Self> {
        let options = Self {
            indent_char: raw.indent_char,
            indent_width: raw.indent_width,
            extras: raw.extras,
        };
        options.validate()?;
        Ok(options)
    }
}
