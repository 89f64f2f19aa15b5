use crate::shared::dates::option_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type OrderId = i64;

// ============================================================================
// Status
// ============================================================================

/// Order status as the backend spells it. Unknown labels are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    New,
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::New => "Nowe",
            OrderStatus::Pending => "Oczekujące",
            OrderStatus::InProgress => "W realizacji",
            OrderStatus::Completed => "Zrealizowane",
            OrderStatus::Cancelled => "Anulowane",
            OrderStatus::Other(s) => s.as_str(),
        }
    }

    /// Known statuses in workflow order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    /// Whether new lines may still be attached. Terminal and in-progress
    /// orders are closed for attachment.
    pub fn accepts_lines(&self) -> bool {
        !matches!(
            self,
            OrderStatus::InProgress | OrderStatus::Completed | OrderStatus::Cancelled
        )
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "Nowe" => OrderStatus::New,
            "Oczekujące" => OrderStatus::Pending,
            "W realizacji" => OrderStatus::InProgress,
            "Zrealizowane" => OrderStatus::Completed,
            "Anulowane" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::New
    }
}

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "nazwa")]
    pub name: String,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(rename = "data_utworzenia", default, with = "option_date")]
    pub created_at: Option<NaiveDate>,
}

/// Line of an order: exactly one of `medicine_id` / `equipment_id` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub id: i64,

    #[serde(rename = "id_leku", default)]
    pub medicine_id: Option<i64>,

    #[serde(rename = "id_sprzetu", default)]
    pub equipment_id: Option<i64>,

    #[serde(rename = "nazwa", default)]
    pub name: String,

    #[serde(rename = "ilosc", default)]
    pub quantity: i32,
}

impl OrderLine {
    pub fn kind_label(&self) -> &'static str {
        if self.medicine_id.is_some() {
            "Lek"
        } else if self.equipment_id.is_some() {
            "Sprzęt"
        } else {
            "—"
        }
    }
}

/// `GET zamowienia/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,

    #[serde(rename = "pozycje", default)]
    pub lines: Vec<OrderLine>,
}

/// Orders an item may still be attached to, in backend order
pub fn open_orders(orders: &[Order]) -> Vec<&Order> {
    orders.iter().filter(|o| o.status.accepts_lines()).collect()
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST zamowienia`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "nazwa")]
    pub name: String,

    pub status: OrderStatus,
}

impl CreateOrderRequest {
    pub fn new(name: &str) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Podaj nazwę zamówienia".to_string());
        }
        Ok(Self {
            name: name.to_string(),
            status: OrderStatus::New,
        })
    }
}

/// Response of `POST zamowienia`. Only the id is relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    #[serde(alias = "id_zamowienia")]
    pub id: OrderId,
}

/// Body of `POST zamowienia/lek`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachMedicineRequest {
    #[serde(rename = "id_zamowienia")]
    pub order_id: OrderId,

    #[serde(rename = "id_leku")]
    pub medicine_id: i64,

    #[serde(rename = "ilosc")]
    pub quantity: i32,
}

/// Body of `POST zamowienia/sprzet`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachEquipmentRequest {
    #[serde(rename = "id_zamowienia")]
    pub order_id: OrderId,

    #[serde(rename = "id_sprzetu")]
    pub equipment_id: i64,

    #[serde(rename = "ilosc")]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: i64, status: &str) -> Order {
        serde_json::from_value(json!({"id": id, "nazwa": format!("Z{}", id), "status": status}))
            .unwrap()
    }

    #[test]
    fn test_status_round_trip() {
        for status in OrderStatus::all() {
            let s: String = status.clone().into();
            assert_eq!(OrderStatus::from(s), status);
        }
        let other = OrderStatus::from("Wstrzymane".to_string());
        assert_eq!(other, OrderStatus::Other("Wstrzymane".to_string()));
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("Wstrzymane"));
    }

    #[test]
    fn test_open_orders_excludes_terminal_and_in_progress() {
        let orders = vec![
            order(1, "Nowe"),
            order(2, "W realizacji"),
            order(3, "Zrealizowane"),
            order(4, "Anulowane"),
            order(5, "Oczekujące"),
            order(6, "Wstrzymane"),
        ];
        let ids: Vec<i64> = open_orders(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 5, 6]);
    }

    #[test]
    fn test_attach_medicine_body_shape() {
        let body = AttachMedicineRequest {
            order_id: 8,
            medicine_id: 12,
            quantity: 3,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"id_zamowienia": 8, "id_leku": 12, "ilosc": 3})
        );
    }

    #[test]
    fn test_created_order_accepts_either_id_name() {
        let a: CreatedOrder = serde_json::from_value(json!({"id": 5, "nazwa": "X"})).unwrap();
        let b: CreatedOrder = serde_json::from_value(json!({"id_zamowienia": 6})).unwrap();
        assert_eq!((a.id, b.id), (5, 6));
    }

    #[test]
    fn test_order_details_with_lines() {
        let details: OrderDetails = serde_json::from_value(json!({
            "id": 1,
            "nazwa": "Zamówienie portowe",
            "status": "Nowe",
            "data_utworzenia": "2025-06-01T08:00:00",
            "pozycje": [
                {"id": 1, "id_leku": 12, "nazwa": "Paracetamol", "ilosc": 3},
                {"id": 2, "id_sprzetu": 4, "nazwa": "Nosze", "ilosc": 1}
            ]
        }))
        .unwrap();
        assert_eq!(details.order.created_at, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(details.lines.len(), 2);
        assert_eq!(details.lines[0].kind_label(), "Lek");
        assert_eq!(details.lines[1].kind_label(), "Sprzęt");
    }

    #[test]
    fn test_create_order_requires_name() {
        assert!(CreateOrderRequest::new("  ").is_err());
        let req = CreateOrderRequest::new(" Gdynia 06/2025 ").unwrap();
        assert_eq!(req.name, "Gdynia 06/2025");
        assert_eq!(req.status, OrderStatus::New);
    }
}
