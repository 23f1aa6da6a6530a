use crate::error::CapError;
use crate::locale::LocaleFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `capconvert.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocaleConfig {
    // Overrides OS detection
    pub tag: Option<String>,
    pub decimal_separator: Option<char>,
    pub grouping_separator: Option<char>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatConfig {
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,

    #[serde(default = "default_grouping")]
    pub grouping: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
            grouping: default_grouping(),
        }
    }
}

fn default_max_fraction_digits() -> usize {
    6
}

fn default_grouping() -> bool {
    true
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CapError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, CapError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<(), CapError> {
        if let Some(sep) = self.locale.decimal_separator {
            if sep != '.' && sep != ',' {
                return Err(CapError::Config(format!(
                    "decimal_separator must be '.' or ',', got '{}'",
                    sep
                )));
            }
        }

        if let Some(sep) = self.locale.grouping_separator {
            if sep.is_ascii_digit() || sep == '-' || sep == '+' {
                return Err(CapError::Config(format!(
                    "'{}' cannot be used as a grouping separator",
                    sep
                )));
            }
        }

        if self.format.max_fraction_digits > 15 {
            return Err(CapError::Config(format!(
                "max_fraction_digits must be at most 15, got {}",
                self.format.max_fraction_digits
            )));
        }

        Ok(())
    }

    /// Resolve the session's locale.
    ///
    /// Precedence: `tag_override` (CLI flag), then `[locale] tag`, then the OS
    /// locale. Explicit separators in the file win over the tag's. The merged
    /// separators must differ, otherwise formatted output would not read back.
    pub fn resolve_locale(&self, tag_override: Option<&str>) -> Result<LocaleFormat, CapError> {
        let mut locale = match tag_override.or(self.locale.tag.as_deref()) {
            Some(tag) => LocaleFormat::from_tag(tag),
            None => LocaleFormat::detect(),
        };

        if let Some(sep) = self.locale.decimal_separator {
            locale.decimal_separator = sep;
        }
        if let Some(sep) = self.locale.grouping_separator {
            locale.grouping_separator = sep;
        }
        locale.max_fraction_digits = self.format.max_fraction_digits;
        locale.grouping = self.format.grouping;

        if locale.decimal_separator == locale.grouping_separator {
            return Err(CapError::Config(format!(
                "decimal and grouping separators are both '{}' for locale '{}'",
                locale.decimal_separator, locale.tag
            )));
        }

        log::debug!(
            "Locale '{}': decimal {:?}, grouping {:?}",
            locale.tag,
            locale.decimal_separator,
            locale.grouping_separator
        );

        Ok(locale)
    }
}
