use leptos::prelude::*;
use crate::core::models::Board;
use crate::dnd::{DragOverEvent, DragStartEvent};
use crate::features::board::services::{handle_drag_end, handle_drag_move, DragOutcome};

pub struct BoardHook {
    pub board: ReadSignal<Board>,
    /// Id of the item or container being dragged.
    pub active_id: ReadSignal<Option<String>>,
    pub on_drag_start: Callback<DragStartEvent>,
    pub on_drag_move: Callback<DragOverEvent>,
    pub on_drag_end: Callback<DragOverEvent>,
}

pub fn use_board(initial: Board) -> BoardHook {
    let board = RwSignal::new(initial);
    let active_id = RwSignal::new(None::<String>);

    let on_drag_start = Callback::new(move |ev: DragStartEvent| {
        active_id.set(Some(ev.active));
    });

    // Only notify subscribers when the board actually changed, move events
    // arrive on every pointer move.
    let on_drag_move = Callback::new(move |ev: DragOverEvent| {
        board.maybe_update(|b| {
            let outcome = handle_drag_move(b, ev.active.as_deref(), ev.over.as_deref());
            if outcome != DragOutcome::Ignored {
                tracing::debug!(?outcome, active = ?ev.active, over = ?ev.over, "drag move applied");
            }
            outcome != DragOutcome::Ignored
        });
    });

    let on_drag_end = Callback::new(move |ev: DragOverEvent| {
        board.maybe_update(|b| {
            let outcome = handle_drag_end(b, ev.active.as_deref(), ev.over.as_deref());
            tracing::debug!(?outcome, active = ?ev.active, over = ?ev.over, "drag end applied");
            outcome != DragOutcome::Ignored
        });
        active_id.set(None);
    });

    BoardHook {
        board: board.read_only(),
        active_id: active_id.read_only(),
        on_drag_start,
        on_drag_move,
        on_drag_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Container, Item};
    use leptos::reactive::owner::Owner;

    fn board() -> Board {
        Board::new(vec![
            Container {
                id: "container-c1".into(),
                title: "C1".into(),
                items: vec![
                    Item { id: "item-a".into(), title: "A".into() },
                    Item { id: "item-b".into(), title: "B".into() },
                ],
            },
            Container { id: "container-c2".into(), title: "C2".into(), items: vec![] },
        ])
    }

    fn over(active: &str, over: Option<&str>) -> DragOverEvent {
        DragOverEvent { active: Some(active.to_string()), over: over.map(str::to_string) }
    }

    #[test]
    fn drag_lifecycle_sets_and_clears_selection() {
        let owner = Owner::new();
        owner.set();
        let hook = use_board(board());

        hook.on_drag_start.run(DragStartEvent { active: "item-a".into() });
        assert_eq!(hook.active_id.get_untracked(), Some("item-a".to_string()));

        hook.on_drag_move.run(over("item-a", Some("item-b")));
        let titles: Vec<String> = hook
            .board
            .with_untracked(|b| b.containers[0].items.iter().map(|i| i.title.clone()).collect());
        assert_eq!(titles, ["B", "A"]);

        hook.on_drag_end.run(over("item-a", Some("container-c2")));
        assert_eq!(hook.active_id.get_untracked(), None);
        assert_eq!(hook.board.with_untracked(|b| b.container_title("container-c2")), "C2");
        assert_eq!(hook.board.with_untracked(|b| b.container_items("container-c2").len()), 1);
    }

    #[test]
    fn drag_end_without_target_only_clears_selection() {
        let owner = Owner::new();
        owner.set();
        let hook = use_board(board());
        let before = hook.board.get_untracked();

        hook.on_drag_start.run(DragStartEvent { active: "container-c1".into() });
        hook.on_drag_end.run(over("container-c1", None));

        assert_eq!(hook.active_id.get_untracked(), None);
        assert_eq!(hook.board.get_untracked(), before);
    }
}
