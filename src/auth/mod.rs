//! Authentication and session management

pub mod jwt;
pub mod models;
pub mod roster;
pub mod session;
pub mod storage;

pub use jwt::{Claims, SessionSigner};
pub use models::{LoginRequest, Role, SessionUser, SignupFields, SignupRequest};
pub use roster::{Roster, DEMO_ACCOUNTS};
pub use session::{SessionEvent, SessionState, SessionStore, STORAGE_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};
