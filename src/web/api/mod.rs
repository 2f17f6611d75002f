pub mod error;
pub mod trajectory;
