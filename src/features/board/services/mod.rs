pub mod drag_operations;

pub use drag_operations::*;
