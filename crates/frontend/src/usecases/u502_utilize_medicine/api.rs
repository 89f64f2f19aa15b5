use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a004_utilization::UtilizeMedicineRequest;

/// Moves part of a medicine's stock into the utilization register
pub async fn utilize(request: UtilizeMedicineRequest) -> Result<(), ApiError> {
    api_utils::post("utylizacja/from-medicine", &request).await
}
