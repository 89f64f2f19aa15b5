use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a004_utilization::UtilizationRecord;

pub async fn fetch_all() -> Result<Vec<UtilizationRecord>, ApiError> {
    api_utils::get_json("utylizacja").await
}
