// Capacitance units and the linear converter between them

pub mod converter;
pub mod detector;
pub mod types;

pub use converter::{convert, Conversion};
pub use detector::{looks_like_quantity, parse_quantity};
pub use types::Unit;
