//! User profiles and their keyed store

mod record;
mod store;

pub use record::Profile;
pub use store::ProfileStore;
