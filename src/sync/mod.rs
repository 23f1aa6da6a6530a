pub mod fields;
pub mod guard;
pub mod synchronizer;


pub use fields::{Field, FieldState};
pub use guard::SyncGuard;
pub use synchronizer::{FieldView, FieldWrite, NullView, SyncOutcome, Synchronizer};
