use leptos::ev;
use leptos::prelude::*;

use super::context::use_dnd;

/// A region that can be dragged and dropped onto. Nested sortables stop the
/// pointerdown from bubbling so only the innermost one picks up.
#[component]
pub fn Sortable(
    #[prop(into)] id: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let dnd = use_dnd();
    let is_dragging = {
        let id = id.clone();
        move || dnd.is_active(&id)
    };
    let on_pointer_down = {
        let id = id.clone();
        move |e: ev::PointerEvent| {
            e.stop_propagation();
            dnd.pointer_down(&id, &e);
        }
    };
    let on_key_down = {
        let id = id.clone();
        move |e: ev::KeyboardEvent| dnd.key_down(&id, &e)
    };

    view! {
        <div
            class=format!("sortable {}", class)
            class:dragging=is_dragging
            data-dnd-id=id
            tabindex="0"
            on:pointerdown=on_pointer_down
            on:keydown=on_key_down
        >
            {children()}
        </div>
    }
}
