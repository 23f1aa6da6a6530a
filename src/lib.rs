pub mod config;
pub mod error;
pub mod locale;
pub mod sync;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::CapError;
pub use locale::LocaleFormat;
pub use sync::{FieldView, SyncOutcome, Synchronizer};
pub use units::{convert, Conversion, Unit};
