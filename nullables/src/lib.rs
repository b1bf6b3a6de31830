//! Nullable infrastructure - in-memory substitutes for the external
//! datastore, used by tests and embeddable wherever a throwaway backend is
//! enough.

pub mod store;

pub use store::NullStore;
