use crate::locale::format::LocaleFormat;

/// What a field's text means once grouping separators are gone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// Empty, a lone separator, or a number still being typed ("1.", ",").
    /// Counts as zero.
    Incomplete,
    Number(f64),
    Unparsable,
}

impl InputKind {
    pub fn value(self) -> Option<f64> {
        match self {
            InputKind::Incomplete => Some(0.0),
            InputKind::Number(v) => Some(v),
            InputKind::Unparsable => None,
        }
    }
}

impl LocaleFormat {
    /// Interpret raw field text.
    ///
    /// Grouping separators are removed first. Then the locale parser runs on the
    /// text with the foreign decimal separator mapped to the locale one, and if
    /// that fails the text is read again as a plain dot-decimal number.
    pub fn classify_input(&self, text: &str) -> InputKind {
        let stripped: String = text
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .collect();

        if stripped.is_empty() || stripped.ends_with('.') || stripped.ends_with(',') {
            return InputKind::Incomplete;
        }

        if let Some(v) = self.parse_localized(&stripped) {
            return InputKind::Number(v);
        }

        match parse_dot_decimal(&stripped) {
            Some(v) => InputKind::Number(v),
            None => InputKind::Unparsable,
        }
    }

    /// Locale-aware parse of the longest numeric prefix.
    ///
    /// Accepts an optional '-', digits, one decimal separator (either '.' or ','
    /// is taken as the locale's) and an optional `E` exponent. Anything after the
    /// prefix is ignored. Fails only when no digit is found.
    pub fn parse_localized(&self, text: &str) -> Option<f64> {
        let normalized: String = if self.uses_decimal_comma() {
            text.replace('.', ",")
        } else {
            text.replace(',', ".")
        };

        let chars: Vec<char> = normalized.chars().collect();
        let mut pos = 0;
        // Rebuilt in Rust float syntax
        let mut literal = String::with_capacity(chars.len());

        if chars.first() == Some(&'-') {
            literal.push('-');
            pos += 1;
        }

        let mut digits = 0;
        while let Some(c) = chars.get(pos).filter(|c| c.is_ascii_digit()) {
            literal.push(*c);
            digits += 1;
            pos += 1;
        }

        if chars.get(pos) == Some(&self.decimal_separator) {
            literal.push('.');
            pos += 1;
            while let Some(c) = chars.get(pos).filter(|c| c.is_ascii_digit()) {
                literal.push(*c);
                digits += 1;
                pos += 1;
            }
        }

        if digits == 0 {
            return None;
        }

        // Only consumed when followed by at least one digit
        if chars.get(pos) == Some(&'E') {
            let mut exp = String::from("e");
            let mut p = pos + 1;
            if let Some(sign) = chars.get(p).filter(|c| **c == '-' || **c == '+') {
                exp.push(*sign);
                p += 1;
            }
            let start = p;
            while let Some(c) = chars.get(p).filter(|c| c.is_ascii_digit()) {
                exp.push(*c);
                p += 1;
            }
            if p > start {
                literal.push_str(&exp);
            }
        }

        literal.parse::<f64>().ok()
    }
}

/// Lenient second stage: ',' becomes '.', surrounding whitespace is trimmed and
/// the rest must be a complete float literal.
///
/// Non-finite values are only spelled "Infinity" and "NaN" (with an optional
/// sign); lowercase forms such as "inf" or "nan" are rejected.
pub fn parse_dot_decimal(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    let trimmed = normalized.trim();

    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    match unsigned {
        "Infinity" | "NaN" => trimmed.parse::<f64>().ok(),
        _ if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) => None,
        _ => trimmed.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> LocaleFormat {
        LocaleFormat::from_tag("en-US")
    }

    fn de() -> LocaleFormat {
        LocaleFormat::from_tag("de-DE")
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(us().classify_input("1000"), InputKind::Number(1000.0));
        assert_eq!(us().classify_input("2.5"), InputKind::Number(2.5));
        assert_eq!(us().classify_input("-3"), InputKind::Number(-3.0));
        assert_eq!(us().classify_input(".5"), InputKind::Number(0.5));
    }

    #[test]
    fn test_grouping_is_stripped() {
        assert_eq!(us().classify_input("1,000,000"), InputKind::Number(1e6));
        assert_eq!(de().classify_input("1.000.000"), InputKind::Number(1e6));
        assert_eq!(de().classify_input("2.500,5"), InputKind::Number(2500.5));
    }

    #[test]
    fn test_incomplete_decimal_counts_as_zero() {
        assert_eq!(us().classify_input("1."), InputKind::Incomplete);
        assert_eq!(us().classify_input("."), InputKind::Incomplete);
        assert_eq!(us().classify_input(""), InputKind::Incomplete);
        assert_eq!(de().classify_input("1,"), InputKind::Incomplete);
        assert_eq!(de().classify_input(","), InputKind::Incomplete);
        assert_eq!(InputKind::Incomplete.value(), Some(0.0));
    }

    #[test]
    fn test_foreign_separator_is_accepted() {
        // '.' is grouping under de-DE and goes away before parsing
        assert_eq!(de().classify_input("1.5"), InputKind::Number(15.0));

        let fr = LocaleFormat::from_tag("fr-FR");
        assert_eq!(fr.classify_input("1.5"), InputKind::Number(1.5));
        assert_eq!(fr.classify_input("1,5"), InputKind::Number(1.5));
    }

    #[test]
    fn test_trailing_garbage_after_prefix_is_ignored() {
        assert_eq!(us().classify_input("12abc"), InputKind::Number(12.0));
        assert_eq!(us().classify_input("1.2.3"), InputKind::Number(1.2));
        assert_eq!(us().classify_input("3E"), InputKind::Number(3.0));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(us().classify_input("1E3"), InputKind::Number(1000.0));
        assert_eq!(us().classify_input("2.5E-3"), InputKind::Number(0.0025));
    }

    #[test]
    fn test_fallback_stage() {
        // No locale prefix, but a valid float literal
        assert_eq!(us().classify_input("+5"), InputKind::Number(5.0));
        assert_eq!(us().classify_input(" 7"), InputKind::Number(7.0));
        assert_eq!(
            us().classify_input("Infinity"),
            InputKind::Number(f64::INFINITY)
        );
        assert_eq!(
            us().classify_input("-Infinity"),
            InputKind::Number(f64::NEG_INFINITY)
        );
        assert!(matches!(us().classify_input("NaN"), InputKind::Number(v) if v.is_nan()));
    }

    #[test]
    fn test_fallback_rejects_other_non_finite_spellings() {
        for text in ["inf", "-inf", "infinity", "INFINITY", "nan", "NAN", "+inf"] {
            assert_eq!(us().classify_input(text), InputKind::Unparsable, "{}", text);
        }
    }

    #[test]
    fn test_garbage_is_unparsable() {
        assert_eq!(us().classify_input("abc"), InputKind::Unparsable);
        assert_eq!(us().classify_input("-"), InputKind::Unparsable);
        assert_eq!(de().classify_input("x,5x"), InputKind::Unparsable);
        assert_eq!(InputKind::Unparsable.value(), None);
    }
}
