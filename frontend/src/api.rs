use futures::future::{Either, select};
use futures::pin_mut;
use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared::ClassificationResponse;
use web_sys::AbortController;

use crate::error::OperationError;

/// Fixed inference endpoint; expects a single multipart part named `file`.
pub const CLASSIFY_ENDPOINT: &str = "https://oqi121-klasifikasi-penyakit-kucing.hf.space/predict";

/// Hard deadline for one classification round trip.
pub const CLASSIFY_TIMEOUT_MS: u32 = 30_000;

/// Sends one image to the inference service and decodes the reply.
///
/// The send future is raced against [`CLASSIFY_TIMEOUT_MS`]; when the
/// deadline wins, `abort` cancels the underlying fetch before the timeout
/// error is returned. A decodable 2xx body is returned as-is; label and
/// confidence are interpreted downstream.
pub async fn classify(
    file: &GlooFile,
    abort: Option<&AbortController>,
) -> Result<ClassificationResponse, OperationError> {
    let form_data = web_sys::FormData::new().map_err(|_| OperationError::NetworkOrUnknown)?;
    form_data
        .append_with_blob("file", file.as_ref())
        .map_err(|_| OperationError::NetworkOrUnknown)?;

    let signal = abort.map(|controller| controller.signal());
    let request = Request::post(CLASSIFY_ENDPOINT)
        .abort_signal(signal.as_ref())
        .body(form_data)
        .map_err(|_| OperationError::NetworkOrUnknown)?;

    let send = request.send();
    let deadline = TimeoutFuture::new(CLASSIFY_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(deadline);

    let response = match select(send, deadline).await {
        Either::Left((sent, _)) => sent.map_err(|err| {
            error!(format!("Classification request failed: {:?}", err));
            OperationError::NetworkOrUnknown
        })?,
        Either::Right(_) => {
            if let Some(controller) = abort {
                controller.abort();
            }
            return Err(OperationError::Timeout);
        }
    };

    if !response.ok() {
        return Err(error_for_status(response.status()));
    }

    response
        .json::<ClassificationResponse>()
        .await
        .map_err(|err| {
            error!(format!("Malformed classification response: {:?}", err));
            OperationError::NetworkOrUnknown
        })
}

/// Only HTTP 500 is reported as a server error; every other failing status
/// is folded into the generic network kind.
pub fn error_for_status(status: u16) -> OperationError {
    if status == 500 {
        OperationError::ServerError
    } else {
        OperationError::NetworkOrUnknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_500_maps_to_server_error() {
        assert_eq!(error_for_status(500), OperationError::ServerError);
    }

    #[test]
    fn other_error_statuses_map_to_network_or_unknown() {
        for status in [400, 404, 422, 502, 503] {
            assert_eq!(error_for_status(status), OperationError::NetworkOrUnknown);
        }
    }
}
