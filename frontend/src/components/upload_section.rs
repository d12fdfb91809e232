use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|list| list.item(0))
            .map(GlooFile::from);

        // Clear the input so reselecting the same file fires a change event.
        input.set_value("");

        Msg::FileChosen(file)
    });

    html! {
        <div class="upload-section">
            <h2>{"Upload Image"}</h2>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                onchange={handle_change}
            />

            { render_preview(model, ctx) }

            <button
                class="analyze-btn"
                onclick={link.callback(|_| Msg::Submit)}
                disabled={model.selection.is_none() || model.in_flight}
            >
                {
                    if model.in_flight {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Classify Image"}</> }
                    }
                }
            </button>
        </div>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(selection) = &model.selection else {
        return html! {};
    };

    html! {
        <div class="preview-area">
            <div class="preview-frame">
                <img
                    src={selection.preview_url.to_string()}
                    alt="Preview"
                    class="image-preview"
                />
                <span class="preview-label">{"Preview"}</span>
            </div>
            <button
                class="remove-btn"
                onclick={ctx.link().callback(|_| Msg::Reset)}
            >
                <i class="fa-solid fa-trash"></i>{" Remove Image"}
            </button>
        </div>
    }
}
