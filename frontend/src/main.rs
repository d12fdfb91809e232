use gloo_file::{File as GlooFile, ObjectUrl};
use shared::ClassificationResponse;
use yew::prelude::*;

mod api;
mod components;
mod error;
mod taxonomy;

use components::{handlers, header, info_cards, results, upload_section, utils};
use error::OperationError;

/// A validated upload. The preview URL lives exactly as long as the file it
/// renders; dropping the selection revokes it.
pub struct Selection {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    FileChosen(Option<GlooFile>),
    Submit,
    ClassificationDone(u64, Result<ClassificationResponse, OperationError>),
    Reset,
}

/// Session state. `result` and `error` are never both `Some`; `in_flight`
/// holds only while exactly one classification request is outstanding.
#[derive(Default)]
pub struct Model {
    pub selection: Option<Selection>,
    pub result: Option<ClassificationResponse>,
    pub error: Option<OperationError>,
    pub in_flight: bool,
    /// Aborts the outstanding request when the selection it was issued for
    /// is reset or replaced.
    pub abort: Option<web_sys::AbortController>,
    /// Bumped on reset and on every new selection. A completion whose
    /// captured generation no longer matches is stale and gets dropped.
    pub generation: u64,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::ClassificationDone(generation, outcome) => {
                handlers::handle_classification_done(self, generation, outcome)
            }
            Msg::Reset => handlers::handle_reset(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                    { info_cards::render_info_cards() }
                    { upload_section::render_upload_section(self, ctx) }
                    { utils::render_error_message(self) }
                    { results::render_results(self, ctx) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
