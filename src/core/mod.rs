pub mod error;
pub mod models;

pub use error::BoardError;
