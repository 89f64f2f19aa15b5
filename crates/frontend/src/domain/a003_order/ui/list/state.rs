use contracts::domain::a003_order::Order;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderListState {
    pub search: String,
    /// Status label; empty means all
    pub status: String,
    pub new_name: String,
}

impl OrderListState {
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.trim().to_lowercase();
        let name_ok = needle.is_empty() || order.name.to_lowercase().contains(&needle);
        let status_ok = self.status.is_empty() || order.status.as_str() == self.status;
        name_ok && status_ok
    }
}

/// Newest first; orders without a date go last
pub fn sorted(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    orders
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
