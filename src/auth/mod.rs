pub mod extractors;
pub mod middleware;
pub mod token;

pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use token::{generate_token, verify_token, Claims};
