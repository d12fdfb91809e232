use yew::prelude::*;

use crate::components::utils::format_confidence;
use crate::taxonomy;
use crate::{Model, Msg};

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(response) = &model.result else {
        return html! {};
    };

    let diagnostic = taxonomy::resolve(response);

    html! {
        <div class="results-container">
            <h2>{"Classification Result"}</h2>

            <div class="result-header">
                <span class="result-caption">{"Diagnosis:"}</span>
                <span class={classes!("diagnosis-badge", diagnostic.badge_class)}>
                    { diagnostic.title }
                </span>
            </div>

            <div class="confidence-meter">
                <div class="meter-label">{"Confidence:"}</div>
                <div class="meter">
                    <div
                        class={classes!("meter-fill", diagnostic.tier.css_class())}
                        style={format!("width: {}%", response.confidence * 100.0)}
                    ></div>
                </div>
                <div class={classes!("meter-value", diagnostic.tier.css_class())}>
                    { format_confidence(response.confidence) }
                </div>
            </div>

            <div class={classes!("result-details", diagnostic.panel_class)}>
                <h3>{"Condition Details"}</h3>
                <p>{ diagnostic.description }</p>
            </div>

            <button
                class="analyze-btn"
                onclick={ctx.link().callback(|_| Msg::Reset)}
            >
                <i class="fa-solid fa-rotate"></i>{" Classify Another"}
            </button>
        </div>
    }
}
