pub mod collision;
pub mod context;
pub mod geometry;
pub mod keyboard;
pub mod overlay;
pub mod sortable;

pub use collision::CollisionStrategy;
pub use context::{DndProvider, DragOverEvent, DragStartEvent};
pub use overlay::DragOverlay;
pub use sortable::Sortable;
