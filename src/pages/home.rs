use leptos::prelude::*;
use crate::core::models::{Board, EntityKind, Item};
use crate::dnd::{DndProvider, DragOverlay, Sortable};
use crate::features::board::{use_board, BoardGrid, BoardHook, ContainerColumn, ItemCard};

#[component]
pub fn Home() -> impl IntoView {
    let BoardHook { board, active_id, on_drag_start, on_drag_move, on_drag_end } = use_board(Board::seeded());

    // Keyed by id, so a column is reused across reorders and reads its items from the board
    let containers = move || {
        board.with(|b| {
            b.containers
                .iter()
                .map(|c| (c.id.clone(), c.title.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Dnd Board"</h1>
            </header>
            <div class="board-wrapper">
                <DndProvider
                    on_drag_start=on_drag_start
                    on_drag_move=on_drag_move
                    on_drag_end=on_drag_end
                >
                    <BoardGrid>
                        <For
                            each=containers
                            key=|(id, _)| id.clone()
                            children=move |(id, title)| sortable_container(board, id, title)
                        />
                    </BoardGrid>
                    <DragOverlay>
                        {move || active_id.get().map(|id| overlay_content(board, id))}
                    </DragOverlay>
                </DndProvider>
            </div>
        </div>
    }
}

fn sortable_container(board: ReadSignal<Board>, id: String, title: String) -> impl IntoView {
    let count = {
        let id = id.clone();
        Signal::derive(move || board.with(|b| b.container_items(&id).len()))
    };
    let items = {
        let id = id.clone();
        move || board.with(|b| b.container_items(&id).to_vec())
    };

    view! {
        <Sortable id=id class="container-sortable">
            <ContainerColumn title=title count=count>
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item: Item| {
                        view! {
                            <Sortable id=item.id class="item-sortable">
                                <ItemCard title=item.title />
                            </Sortable>
                        }
                    }
                />
            </ContainerColumn>
        </Sortable>
    }
}

// Overlay copies are plain cards; they must not register as sortables.
fn overlay_content(board: ReadSignal<Board>, id: String) -> AnyView {
    match EntityKind::of(&id) {
        Some(EntityKind::Item) => {
            let title = board.with(|b| b.item_title(&id));
            view! { <ItemCard title=title /> }.into_any()
        }
        Some(EntityKind::Container) => {
            let (title, items) = board.with(|b| (b.container_title(&id), b.container_items(&id).to_vec()));
            let len = items.len();
            let count = Signal::derive(move || len);
            view! {
                <ContainerColumn title=title count=count>
                    {items.into_iter().map(|item| view! { <ItemCard title=item.title /> }).collect::<Vec<_>>()}
                </ContainerColumn>
            }.into_any()
        }
        None => view! {}.into_any(),
    }
}
