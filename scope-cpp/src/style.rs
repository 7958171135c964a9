//! Output variants selected through render option extras.

use scope_core::{RenderContext, Result};
use serde::Deserialize;

/// Extras namespace read by the C++ tags.
pub const NAMESPACE: &str = "cpp";

/// Where opening braces go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BraceStyle {
    #[default]
    SameLine,
    NextLine,
}

/// C++ output style, read from the `cpp` extras.
///
/// | key                | type                            | default       |
/// |--------------------|---------------------------------|---------------|
/// | `brace_style`      | `"same_line"` / `"next_line"`   | `"same_line"` |
/// | `closing_comments` | bool                            | `true`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub brace_style: BraceStyle,
    pub closing_comments: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            brace_style: BraceStyle::SameLine,
            closing_comments: true,
        }
    }
}

impl Style {
    pub fn from_context(cx: &RenderContext<'_>) -> Result<Self> {
        let default = Self::default();
        Ok(Self {
            brace_style: cx.extra(NAMESPACE, "brace_style", default.brace_style)?,
            closing_comments: cx.extra(NAMESPACE, "closing_comments", default.closing_comments)?,
        })
    }

    /// Write `header` followed by an opening brace.
    pub(crate) fn open(&self, cx: &mut RenderContext<'_>, header: &str) {
        match self.brace_style {
            BraceStyle::SameLine => cx.write(&format!("{header} {{")),
            BraceStyle::NextLine => {
                cx.write(header);
                cx.write("{");
            }
        }
    }

    /// Write a closing line with an optional trailing `// comment`.
    pub(crate) fn close(&self, cx: &mut RenderContext<'_>, close: &str, comment: &str) {
        if self.closing_comments {
            cx.write(&format!("{close} // {comment}"));
        } else {
            cx.write(close);
        }
    }
}
