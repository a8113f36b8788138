pub mod comment;
pub mod event;
pub mod user;

pub use comment::PostgresCommentRepository;
pub use event::PostgresEventRepository;
pub use user::PostgresUserRepository;
