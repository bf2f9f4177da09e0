//! Layout configuration.

use serde::{Deserialize, Serialize};

/// Settings for the list layout toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Line break inserted before each continuation item when expanding.
    #[serde(alias = "line_ending")]
    pub line_ending: LineEnding,
}

/// Line-break marker used when expanding a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// The document's first line break, or `\n` if it has none.
    #[default]
    Auto,
}

impl LineEnding {
    /// Returns the concrete marker to insert into `text`.
    #[must_use]
    pub fn resolve(self, text: &str) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Auto => match text.find('\n') {
                Some(index) if text[..index].ends_with('\r') => "\r\n",
                _ => "\n",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_first_line_break() {
        assert_eq!(LineEnding::Auto.resolve("a\r\nb\nc"), "\r\n");
        assert_eq!(LineEnding::Auto.resolve("a\nb\r\nc"), "\n");
        assert_eq!(LineEnding::Auto.resolve("single line"), "\n");
    }

    #[test]
    fn explicit_endings_ignore_document() {
        assert_eq!(LineEnding::Lf.resolve("a\r\nb"), "\n");
        assert_eq!(LineEnding::CrLf.resolve("a\nb"), "\r\n");
    }

    #[test]
    fn deserializes_from_toml() {
        let config: LayoutConfig = toml::from_str("line_ending = \"crlf\"").expect("config");
        assert_eq!(config.line_ending, LineEnding::CrLf);

        let config: LayoutConfig = toml::from_str("lineEnding = \"lf\"").expect("config");
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config: LayoutConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.line_ending, LineEnding::Auto);
    }
}
