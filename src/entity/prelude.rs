pub use super::comment::Entity as Comment;
pub use super::user::Entity as User;
