pub use super::articles::Entity as Articles;
pub use super::authors::Entity as Authors;
pub use super::comments::Entity as Comments;
