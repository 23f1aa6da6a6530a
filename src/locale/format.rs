use serde::Serialize;
use sys_locale::get_locale;

const DEFAULT_TAG: &str = "en-US";
const NO_BREAK_SPACE: char = '\u{a0}';

/// Languages writing "1.234,5"
const COMMA_DECIMAL_DOT_GROUPING: &[&str] = &[
    "de", "es", "it", "pt", "nl", "tr", "id", "da", "el", "ro", "hr", "sl", "sr", "vi", "is",
    "ca", "gl", "eu",
];

/// Languages writing "1 234,5"
const COMMA_DECIMAL_SPACE_GROUPING: &[&str] = &[
    "fr", "ru", "pl", "sv", "nb", "nn", "no", "fi", "cs", "sk", "hu", "uk", "bg", "lt", "lv",
    "et", "be", "kk",
];

/// Separators and display rules of the active locale.
///
/// Derived once at startup and never changed while the screen is alive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleFormat {
    pub tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub max_fraction_digits: usize,
    pub grouping: bool,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::from_tag(DEFAULT_TAG)
    }
}

impl LocaleFormat {
    /// Read the OS locale (then `LANG`), falling back to en-US when none is reported
    pub fn detect() -> Self {
        match get_locale().or_else(|| std::env::var("LANG").ok()) {
            Some(tag) => {
                log::debug!("Detected OS locale '{}'", tag);
                Self::from_tag(&tag)
            }
            None => {
                log::warn!("No OS locale reported, using {}", DEFAULT_TAG);
                Self::default()
            }
        }
    }

    /// Build from a BCP-47 or POSIX tag ("de-DE", "fr_FR.UTF-8", "C")
    pub fn from_tag(tag: &str) -> Self {
        let (language, region) = split_tag(tag);

        let (decimal_separator, grouping_separator) = match (language.as_str(), region.as_deref())
        {
            // Swiss German and Italian keep the period
            ("de" | "it", Some("CH" | "LI")) => ('.', '\''),
            ("es", Some("MX" | "US" | "PR" | "GT" | "HN" | "NI" | "PA" | "SV" | "DO")) => ('.', ','),
            (lang, _) if COMMA_DECIMAL_DOT_GROUPING.contains(&lang) => (',', '.'),
            (lang, _) if COMMA_DECIMAL_SPACE_GROUPING.contains(&lang) => (',', NO_BREAK_SPACE),
            _ => ('.', ','),
        };

        Self {
            tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            max_fraction_digits: 6,
            grouping: true,
        }
    }

    pub fn uses_decimal_comma(&self) -> bool {
        self.decimal_separator == ','
    }

    /// Render `value` with at most `max_fraction_digits` fractional digits,
    /// trailing zeros dropped and the integer part grouped in threes.
    ///
    /// Ties round to even. Non-finite values render as "∞", "-∞" and "NaN".
    pub fn format_value(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if value.is_sign_negative() {
            out.push('-');
        }

        if self.grouping {
            let len = int_part.len();
            for (i, digit) in int_part.chars().enumerate() {
                if i > 0 && (len - i) % 3 == 0 {
                    out.push(self.grouping_separator);
                }
                out.push(digit);
            }
        } else {
            out.push_str(int_part);
        }

        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }

        out
    }
}

/// "fr_FR.UTF-8@euro" -> ("fr", Some("FR"))
fn split_tag(tag: &str) -> (String, Option<String>) {
    let base = tag.split(['.', '@']).next().unwrap_or("");
    let mut parts = base.split(['-', '_']);
    let language = parts.next().unwrap_or("").to_lowercase();

    // Skip a script subtag such as "Latn" in "sr-Latn-RS"
    let region = parts
        .find(|p| p.len() == 2 || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit())))
        .map(|p| p.to_uppercase());

    (language, region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_period_locales() {
        let us = LocaleFormat::from_tag("en-US");
        assert_eq!(us.decimal_separator, '.');
        assert_eq!(us.grouping_separator, ',');

        let ch = LocaleFormat::from_tag("de-CH");
        assert_eq!(ch.decimal_separator, '.');
        assert_eq!(ch.grouping_separator, '\'');

        let mx = LocaleFormat::from_tag("es_MX.UTF-8");
        assert_eq!(mx.decimal_separator, '.');

        let posix = LocaleFormat::from_tag("C");
        assert_eq!(posix.decimal_separator, '.');
    }

    #[test]
    fn test_from_tag_comma_locales() {
        let de = LocaleFormat::from_tag("de-DE");
        assert_eq!(de.decimal_separator, ',');
        assert_eq!(de.grouping_separator, '.');
        assert!(de.uses_decimal_comma());

        let fr = LocaleFormat::from_tag("fr_FR.UTF-8@euro");
        assert_eq!(fr.decimal_separator, ',');
        assert_eq!(fr.grouping_separator, NO_BREAK_SPACE);

        let sr = LocaleFormat::from_tag("sr-Latn-RS");
        assert_eq!(sr.decimal_separator, ',');
    }

    #[test]
    fn test_format_groups_and_trims() {
        let us = LocaleFormat::from_tag("en-US");
        assert_eq!(us.format_value(1_000_000.0), "1,000,000");
        assert_eq!(us.format_value(1.0), "1");
        assert_eq!(us.format_value(0.001), "0.001");
        assert_eq!(us.format_value(2500.0), "2,500");
        assert_eq!(us.format_value(0.0025), "0.0025");
        assert_eq!(us.format_value(123.0), "123");
        assert_eq!(us.format_value(0.0), "0");
        assert_eq!(us.format_value(-1234.5), "-1,234.5");
    }

    #[test]
    fn test_format_rounds_to_six_digits() {
        let us = LocaleFormat::from_tag("en-US");
        assert_eq!(us.format_value(0.000_000_4), "0");
        assert_eq!(us.format_value(1.234_567_89), "1.234568");
        assert_eq!(us.format_value(1e-9), "0");
    }

    #[test]
    fn test_format_comma_locale() {
        let de = LocaleFormat::from_tag("de-DE");
        assert_eq!(de.format_value(1_234_567.25), "1.234.567,25");

        let fr = LocaleFormat::from_tag("fr-FR");
        assert_eq!(fr.format_value(2500.5), "2\u{a0}500,5");
    }

    #[test]
    fn test_format_without_grouping() {
        let mut us = LocaleFormat::from_tag("en-US");
        us.grouping = false;
        assert_eq!(us.format_value(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_non_finite() {
        let us = LocaleFormat::default();
        assert_eq!(us.format_value(f64::INFINITY), "∞");
        assert_eq!(us.format_value(f64::NEG_INFINITY), "-∞");
        assert_eq!(us.format_value(f64::NAN), "NaN");
    }
}
