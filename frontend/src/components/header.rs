use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-cat"></i> {" MeowScan"}</h1>
            <p class="subtitle">{"Cat skin disease detection powered by a YOLOv11 model"}</p>
        </header>
    }
}
