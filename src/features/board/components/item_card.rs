use leptos::prelude::*;
// Visual only; dragging comes from the Sortable around it

#[component]
pub fn ItemCard(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="item-card">
            <h4>{title}</h4>
        </div>
    }
}
