pub mod extractors;
pub mod session;

pub use extractors::AuthSession;
pub use session::{session_cookie, SessionToken, SESSION_COOKIE};
