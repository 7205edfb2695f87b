pub mod board;

pub use board::{Board, Container, EntityKind, Item};
