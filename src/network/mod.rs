//! Network manager: profiles and friendships kept in lockstep

mod error;
mod import;
mod manager;

pub use error::{NetworkError, NetworkResult};
pub use import::{ImportSummary, FRIEND_SEPARATOR};
pub use manager::NetworkManager;
