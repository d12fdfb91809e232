use yew::prelude::*;

use crate::taxonomy::CATEGORIES;

/// One card per registry entry, driven directly off the static taxonomy so
/// the overview and the result panel can never disagree.
pub fn render_info_cards() -> Html {
    html! {
        <div class="info-grid">
            { for CATEGORIES.iter().map(|category| html! {
                <div class={classes!("info-card", category.panel_class)} key={category.title}>
                    <h3>{ category.title }</h3>
                    <p>{ category.description }</p>
                </div>
            })}
        </div>
    }
}
