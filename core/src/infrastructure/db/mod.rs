pub mod postgres;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
