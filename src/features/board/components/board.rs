use leptos::prelude::*;

#[component]
pub fn BoardGrid(children: Children) -> impl IntoView {
    view! { <div class="board-grid">{children()}</div> }
}
