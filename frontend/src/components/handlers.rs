use gloo_file::{File as GlooFile, ObjectUrl};
use shared::ClassificationResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::utils::{self, MSG_NO_SELECTION};
use crate::error::OperationError;
use crate::{Model, Msg, Selection};

pub fn handle_file_chosen(model: &mut Model, file: Option<GlooFile>) -> bool {
    let Some(file) = file else {
        return false;
    };

    if let Err(err) = utils::validate_file(&file) {
        log::warn!("Rejected file {}: {}", file.name(), err);
        model.result = None;
        model.error = Some(err);
        return true;
    }

    supersede_outstanding(model);

    let preview_url = ObjectUrl::from(file.clone());
    model.selection = Some(Selection { file, preview_url });
    model.result = None;
    model.error = None;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.in_flight {
        return false;
    }

    let Some(selection) = &model.selection else {
        model.error = Some(OperationError::Validation(MSG_NO_SELECTION));
        return true;
    };

    let abort = web_sys::AbortController::new().ok();
    model.in_flight = true;
    model.error = None;
    send_classify_request(ctx, selection.file.clone(), model.generation, abort.clone());
    model.abort = abort;
    true
}

fn send_classify_request(
    ctx: &Context<Model>,
    file: GlooFile,
    generation: u64,
    abort: Option<web_sys::AbortController>,
) {
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = api::classify(&file, abort.as_ref()).await;
        link.send_message(Msg::ClassificationDone(generation, outcome));
    });
}

pub fn handle_classification_done(
    model: &mut Model,
    generation: u64,
    outcome: Result<ClassificationResponse, OperationError>,
) -> bool {
    // Stale: superseded by reset or reselection.
    if generation != model.generation || !model.in_flight {
        return false;
    }

    model.in_flight = false;
    model.abort = None;
    match outcome {
        Ok(response) => {
            model.result = Some(response);
            model.error = None;
        }
        Err(err) => {
            model.result = None;
            model.error = Some(err);
        }
    }
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    supersede_outstanding(model);
    model.selection = None;
    model.result = None;
    model.error = None;
    true
}

// Cancels the outstanding request, if any, and makes its eventual
// completion stale.
fn supersede_outstanding(model: &mut Model) {
    if let Some(abort) = model.abort.take() {
        abort.abort();
    }
    model.in_flight = false;
    model.generation += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ringworm_response() -> ClassificationResponse {
        ClassificationResponse {
            prediction: "Ringworm".to_string(),
            confidence: 0.92,
        }
    }

    #[test]
    fn successful_completion_retains_the_result() {
        let mut model = Model::default();
        model.in_flight = true;

        assert!(handle_classification_done(&mut model, 0, Ok(ringworm_response())));
        assert!(!model.in_flight);
        assert_eq!(model.result, Some(ringworm_response()));
        assert_eq!(model.error, None);
    }

    #[test]
    fn failed_completion_retains_the_typed_error() {
        let mut model = Model::default();
        model.in_flight = true;
        model.result = Some(ringworm_response());

        assert!(handle_classification_done(&mut model, 0, Err(OperationError::Timeout)));
        assert!(!model.in_flight);
        assert_eq!(model.result, None);
        assert_eq!(model.error, Some(OperationError::Timeout));
    }

    #[test]
    fn server_error_completion_sets_server_error_kind() {
        let mut model = Model::default();
        model.in_flight = true;

        handle_classification_done(&mut model, 0, Err(OperationError::ServerError));
        assert_eq!(model.error, Some(OperationError::ServerError));
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let mut model = Model::default();
        model.in_flight = true;
        let issued_generation = model.generation;

        handle_reset(&mut model);

        assert!(!handle_classification_done(
            &mut model,
            issued_generation,
            Ok(ringworm_response())
        ));
        assert_eq!(model.result, None);
        assert_eq!(model.error, None);
        assert!(!model.in_flight);
    }

    #[test]
    fn completion_after_reselection_is_discarded() {
        let mut model = Model::default();
        model.in_flight = true;
        let issued_generation = model.generation;

        // A new valid selection supersedes the outstanding request.
        supersede_outstanding(&mut model);
        model.result = None;
        model.error = None;

        assert!(!handle_classification_done(
            &mut model,
            issued_generation,
            Ok(ringworm_response())
        ));
        assert_eq!(model.result, None);
        assert_eq!(model.error, None);
        assert!(!model.in_flight);
        assert_eq!(model.generation, issued_generation + 1);
    }

    #[test]
    fn completion_without_outstanding_request_is_discarded() {
        let mut model = Model::default();

        assert!(!handle_classification_done(&mut model, 0, Ok(ringworm_response())));
        assert_eq!(model.result, None);
    }

    #[test]
    fn reset_clears_the_whole_session() {
        let mut model = Model::default();
        model.result = Some(ringworm_response());
        model.error = None;
        model.in_flight = false;

        assert!(handle_reset(&mut model));
        assert!(model.selection.is_none());
        assert_eq!(model.result, None);
        assert_eq!(model.error, None);
        assert!(!model.in_flight);
        assert_eq!(model.generation, 1);
    }

    #[test]
    fn result_and_error_stay_mutually_exclusive() {
        let mut model = Model::default();
        model.in_flight = true;
        handle_classification_done(&mut model, 0, Ok(ringworm_response()));
        assert!(model.result.is_some() && model.error.is_none());

        model.in_flight = true;
        handle_classification_done(&mut model, 0, Err(OperationError::NetworkOrUnknown));
        assert!(model.result.is_none() && model.error.is_some());
    }
}
