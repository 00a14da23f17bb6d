pub mod prelude;

pub mod articles;
pub mod authors;
pub mod comments;
