use leptos::prelude::*;

use super::context::use_dnd;

/// Fixed layer that follows the dragged entity. Renders its children only
/// while a drag is active.
#[component]
pub fn DragOverlay(children: ChildrenFn) -> impl IntoView {
    let dnd = use_dnd();
    let style = move || {
        dnd.overlay_rect()
            .map(|rect| {
                format!(
                    "position: fixed; left: {}px; top: {}px; width: {}px; pointer-events: none;",
                    rect.left, rect.top, rect.width
                )
            })
            .unwrap_or_default()
    };

    view! {
        <Show when=move || dnd.is_dragging()>
            <div class="drag-overlay" style=style>
                {children()}
            </div>
        </Show>
    }
}
