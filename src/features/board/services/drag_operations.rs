use crate::core::models::{Board, EntityKind};
use crate::core::BoardError;

/// What a drag event did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Item moved inside its own container.
    ReorderedItem,
    /// Item moved into another container in front of the target item.
    MovedItem,
    /// Item dropped onto a container and appended to it.
    AppendedItem,
    /// Containers reordered.
    MovedContainer,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Move,
    End,
}

// Called continuously while dragging. Item moves commit live so the list
// previews the drop; container order is left alone until release.
pub fn handle_drag_move(board: &mut Board, active: Option<&str>, over: Option<&str>) -> DragOutcome {
    match (active, over) {
        (Some(active), Some(over)) => apply(board, active, over, Phase::Move),
        _ => DragOutcome::Ignored,
    }
}

/// Handles release. The caller clears the active selection afterwards no
/// matter what this returns.
pub fn handle_drag_end(board: &mut Board, active: Option<&str>, over: Option<&str>) -> DragOutcome {
    match (active, over) {
        (Some(active), Some(over)) => apply(board, active, over, Phase::End),
        _ => DragOutcome::Ignored,
    }
}

fn apply(board: &mut Board, active: &str, over: &str, phase: Phase) -> DragOutcome {
    if active == over {
        return DragOutcome::Ignored;
    }

    let result = match (EntityKind::of(active), EntityKind::of(over)) {
        (Some(EntityKind::Item), Some(EntityKind::Item)) => move_item_onto_item(board, active, over),
        (Some(EntityKind::Item), Some(EntityKind::Container)) => move_item_into_container(board, active, over),
        (Some(EntityKind::Container), Some(EntityKind::Container)) if phase == Phase::End => {
            move_container_onto_container(board, active, over)
        }
        _ => Ok(DragOutcome::Ignored),
    };

    result.unwrap_or_else(|err| {
        tracing::debug!(%active, %over, ?phase, error = %err, "drag event ignored");
        DragOutcome::Ignored
    })
}

fn move_item_onto_item(board: &mut Board, active: &str, over: &str) -> Result<DragOutcome, BoardError> {
    let from = board.locate_item(active)?;
    let to = board.locate_item(over)?;

    if from.container == to.container {
        board.move_item_within_container(from.container, from.item, to.item)?;
        Ok(DragOutcome::ReorderedItem)
    } else {
        board.move_item_across_containers(from.container, from.item, to.container, Some(to.item))?;
        Ok(DragOutcome::MovedItem)
    }
}

fn move_item_into_container(board: &mut Board, active: &str, over: &str) -> Result<DragOutcome, BoardError> {
    let from = board.locate_item(active)?;
    let to = board.container_index(over)?;

    board.move_item_across_containers(from.container, from.item, to, None)?;
    Ok(DragOutcome::AppendedItem)
}

fn move_container_onto_container(board: &mut Board, active: &str, over: &str) -> Result<DragOutcome, BoardError> {
    let from = board.container_index(active)?;
    let to = board.container_index(over)?;

    board.move_container(from, to)?;
    Ok(DragOutcome::MovedContainer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Container, Item};

    fn item(id: &str) -> Item {
        Item { id: format!("item-{id}"), title: id.to_string() }
    }

    fn container(id: &str, items: Vec<Item>) -> Container {
        Container { id: format!("container-{id}"), title: id.to_string(), items }
    }

    fn item_ids(board: &Board, container: usize) -> Vec<String> {
        board.containers[container].items.iter().map(|i| i.id.clone()).collect()
    }

    fn container_ids(board: &Board) -> Vec<String> {
        board.containers.iter().map(|c| c.id.clone()).collect()
    }

    fn scenario() -> Board {
        Board::new(vec![
            container("c1", vec![item("a"), item("b")]),
            container("c2", vec![item("c")]),
        ])
    }

    #[test]
    fn item_over_item_in_same_container_reorders_live() {
        let mut board = scenario();
        let outcome = handle_drag_move(&mut board, Some("item-a"), Some("item-b"));
        assert_eq!(outcome, DragOutcome::ReorderedItem);
        assert_eq!(item_ids(&board, 0), ["item-b", "item-a"]);
    }

    #[test]
    fn item_dropped_on_container_is_appended() {
        let mut board = scenario();
        handle_drag_move(&mut board, Some("item-a"), Some("item-b"));

        let outcome = handle_drag_end(&mut board, Some("item-b"), Some("container-c2"));
        assert_eq!(outcome, DragOutcome::AppendedItem);
        assert_eq!(item_ids(&board, 0), ["item-a"]);
        assert_eq!(item_ids(&board, 1), ["item-c", "item-b"]);
    }

    #[test]
    fn item_over_item_in_other_container_takes_its_index() {
        let mut board = scenario();
        let outcome = handle_drag_move(&mut board, Some("item-b"), Some("item-c"));
        assert_eq!(outcome, DragOutcome::MovedItem);
        assert_eq!(item_ids(&board, 0), ["item-a"]);
        assert_eq!(item_ids(&board, 1), ["item-b", "item-c"]);
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn item_over_container_during_move_appends() {
        let mut board = scenario();
        let outcome = handle_drag_move(&mut board, Some("item-a"), Some("container-c2"));
        assert_eq!(outcome, DragOutcome::AppendedItem);
        assert_eq!(item_ids(&board, 1), ["item-c", "item-a"]);
    }

    #[test]
    fn containers_only_reorder_on_release() {
        let mut board = Board::new(vec![container("c1", vec![]), container("c2", vec![])]);

        for _ in 0..3 {
            let outcome = handle_drag_move(&mut board, Some("container-c1"), Some("container-c2"));
            assert_eq!(outcome, DragOutcome::Ignored);
        }
        assert_eq!(container_ids(&board), ["container-c1", "container-c2"]);

        let outcome = handle_drag_end(&mut board, Some("container-c1"), Some("container-c2"));
        assert_eq!(outcome, DragOutcome::MovedContainer);
        assert_eq!(container_ids(&board), ["container-c2", "container-c1"]);
    }

    #[test]
    fn absent_ids_never_mutate() {
        let mut board = scenario();
        let before = board.clone();
        assert_eq!(handle_drag_end(&mut board, Some("item-a"), None), DragOutcome::Ignored);
        assert_eq!(handle_drag_end(&mut board, None, Some("item-a")), DragOutcome::Ignored);
        assert_eq!(handle_drag_move(&mut board, None, None), DragOutcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn unmatched_combinations_are_ignored() {
        let mut board = scenario();
        let before = board.clone();
        let cases = [
            ("item-a", "item-a"),
            ("container-c1", "item-a"),
            ("container-c1", "container-c1"),
            ("item-missing", "item-a"),
            ("item-a", "container-missing"),
            ("card-1", "item-a"),
        ];
        for (active, over) in cases {
            assert_eq!(handle_drag_move(&mut board, Some(active), Some(over)), DragOutcome::Ignored);
            assert_eq!(handle_drag_end(&mut board, Some(active), Some(over)), DragOutcome::Ignored);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn item_over_its_own_container_moves_it_to_the_end() {
        let mut board = scenario();
        let outcome = handle_drag_end(&mut board, Some("item-a"), Some("container-c1"));
        assert_eq!(outcome, DragOutcome::AppendedItem);
        assert_eq!(item_ids(&board, 0), ["item-b", "item-a"]);
    }
}
