use super::model::AttachRequest;
use crate::shared::api_utils::{self, ApiError};

/// Adds one line to an order
pub async fn attach(request: AttachRequest) -> Result<(), ApiError> {
    api_utils::post(request.path(), &request).await
}
