pub mod errors;
pub mod page;
pub mod record;
