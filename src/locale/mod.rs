// Locale-dependent number formatting and the two-stage input parser

pub mod format;
pub mod parse;

pub use format::LocaleFormat;
pub use parse::{parse_dot_decimal, InputKind};
