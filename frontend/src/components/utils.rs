use gloo_file::File as GlooFile;
use yew::prelude::*;

use crate::Model;
use crate::error::OperationError;

/// Uploads larger than this are rejected; exactly this size still passes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const MSG_NOT_AN_IMAGE: &str = "please choose a valid image file.";
pub const MSG_TOO_LARGE: &str = "file size must be under 5MB.";
pub const MSG_NO_SELECTION: &str = "please select an image first.";

/// Type and size policy for a candidate upload, on the declared media type
/// and byte size alone.
pub fn validate_candidate(mime_type: &str, size_bytes: u64) -> Result<(), OperationError> {
    if !mime_type.starts_with("image/") {
        return Err(OperationError::Validation(MSG_NOT_AN_IMAGE));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(OperationError::Validation(MSG_TOO_LARGE));
    }
    Ok(())
}

pub fn validate_file(file: &GlooFile) -> Result<(), OperationError> {
    validate_candidate(&file.raw_mime_type(), file.size())
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(err) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ err.to_string() }</p>
            </div>
        }
    } else {
        html! {}
    }
}
