use super::collision::{CollisionStrategy, Droppable};
use super::geometry::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press means to the keyboard sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Space or Enter: pick up when idle, drop when dragging.
    Toggle,
    Cancel,
    Move(Direction),
}

impl KeyboardAction {
    /// Maps a `KeyboardEvent.code` value.
    pub fn from_code(code: &str) -> Option<KeyboardAction> {
        match code {
            "Space" | "Enter" | "NumpadEnter" => Some(KeyboardAction::Toggle),
            "Escape" => Some(KeyboardAction::Cancel),
            "ArrowUp" => Some(KeyboardAction::Move(Direction::Up)),
            "ArrowDown" => Some(KeyboardAction::Move(Direction::Down)),
            "ArrowLeft" => Some(KeyboardAction::Move(Direction::Left)),
            "ArrowRight" => Some(KeyboardAction::Move(Direction::Right)),
            _ => None,
        }
    }
}

/// Where the dragged rect should jump for an arrow key press.
///
/// Only droppables lying strictly in `direction` from the current collision
/// rect are candidates, the active one excluded; among them the closest by
/// corners wins and the rect snaps onto its origin. `None` when nothing lies
/// that way.
pub fn next_coordinates(
    direction: Direction,
    collision_rect: &Rect,
    active_id: &str,
    droppables: &[Droppable],
) -> Option<Point> {
    let candidates: Vec<Droppable> = droppables
        .iter()
        .filter(|d| d.id != active_id)
        .filter(|d| match direction {
            Direction::Down => d.rect.top > collision_rect.top,
            Direction::Up => d.rect.top < collision_rect.top,
            Direction::Right => d.rect.left > collision_rect.left,
            Direction::Left => d.rect.left < collision_rect.left,
        })
        .cloned()
        .collect();

    let target = CollisionStrategy::ClosestCorners.detect(collision_rect, &candidates)?;
    candidates
        .iter()
        .find(|d| d.id == target)
        .map(|d| d.rect.origin())
}
