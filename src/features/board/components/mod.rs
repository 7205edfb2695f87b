pub mod board;
pub mod column;
pub mod item_card;

pub use board::BoardGrid;
pub use column::ContainerColumn;
pub use item_card::ItemCard;
