use serde::{Deserialize, Serialize};

/// Raw payload returned by the inference endpoint.
///
/// `prediction` is free text chosen by the remote model and `confidence` is
/// nominally in `[0, 1]`; neither is validated or clamped on this side. The
/// frontend's taxonomy layer is responsible for degrading gracefully when a
/// label falls outside the known vocabulary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationResponse {
    pub prediction: String,
    pub confidence: f32,
}
