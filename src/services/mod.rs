// Service exports
pub mod session;

pub use session::{SessionError, SessionStats, SessionStore};
