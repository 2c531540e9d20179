pub mod error;
pub mod password;
pub mod session_registry;
pub mod session_token;

pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session_registry::SessionRegistry;
pub use session_token::SessionToken;
