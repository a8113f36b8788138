pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::DEFAULT_TOKEN_LIFETIME_MINUTES;
pub use errors::JwtError;
pub use handler::parse_algorithm;
pub use handler::JwtHandler;
