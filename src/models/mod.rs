pub mod collection;
pub mod entry;

pub use collection::CollectionKind;
pub use entry::{EntryPatch, PaymentEntry};
