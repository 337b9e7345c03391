use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-magnifying-glass"></i> {" NewsDetector"}</h1>
            <p class="subtitle">{"Choose your input method below."}</p>
        </header>
    }
}
