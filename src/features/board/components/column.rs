use leptos::prelude::*;

#[component]
pub fn ContainerColumn(
    #[prop(into)] title: String,
    count: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="container-column">
            <div class="column-header">
                <h3>{title}</h3>
                <span class="item-count">{move || count.get()}</span>
            </div>
            <div class="column-content">{children()}</div>
        </div>
    }
}
