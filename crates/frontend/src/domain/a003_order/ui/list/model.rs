use crate::shared::api_utils::{self, ApiError};
use contracts::domain::a003_order::{CreateOrderRequest, CreatedOrder, Order, OrderDetails, OrderId};

pub async fn fetch_all() -> Result<Vec<Order>, ApiError> {
    api_utils::get_json("zamowienia").await
}

pub async fn fetch_details(id: OrderId) -> Result<OrderDetails, ApiError> {
    api_utils::get_json(&format!("zamowienia/{}", id)).await
}

/// Creates an order and returns the id assigned by the backend
pub async fn create(request: CreateOrderRequest) -> Result<OrderId, ApiError> {
    let created: CreatedOrder = api_utils::post_json("zamowienia", &request).await?;
    log::info!("order {} created", created.id);
    Ok(created.id)
}
