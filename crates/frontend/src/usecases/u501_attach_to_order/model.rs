//! State of the "add to order" workflow.
//!
//! The target order is either picked from the open orders or created
//! inline. An inline order only counts once the backend has returned its
//! id; until then submitting stays blocked.

use contracts::domain::a003_order::{AttachEquipmentRequest, AttachMedicineRequest, OrderId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub enum AttachTarget {
    Medicine { id: i64, name: String },
    Equipment { id: i64, name: String },
}

impl AttachTarget {
    pub fn name(&self) -> &str {
        match self {
            AttachTarget::Medicine { name, .. } | AttachTarget::Equipment { name, .. } => name,
        }
    }

    pub fn request(&self, order_id: OrderId, quantity: i32) -> AttachRequest {
        match self {
            AttachTarget::Medicine { id, .. } => AttachRequest::Medicine(AttachMedicineRequest {
                order_id,
                medicine_id: *id,
                quantity,
            }),
            AttachTarget::Equipment { id, .. } => AttachRequest::Equipment(AttachEquipmentRequest {
                order_id,
                equipment_id: *id,
                quantity,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttachRequest {
    Medicine(AttachMedicineRequest),
    Equipment(AttachEquipmentRequest),
}

impl AttachRequest {
    pub fn path(&self) -> &'static str {
        match self {
            AttachRequest::Medicine(_) => "zamowienia/lek",
            AttachRequest::Equipment(_) => "zamowienia/sprzet",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderSource {
    #[default]
    Existing,
    New,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttachForm {
    pub source: OrderSource,
    pub selected: Option<OrderId>,
    pub new_name: String,
    /// Id returned by the backend for the inline order
    pub created: Option<OrderId>,
    pub creating: bool,
    pub quantity: i32,
}

impl Default for AttachForm {
    fn default() -> Self {
        Self {
            source: OrderSource::Existing,
            selected: None,
            new_name: String::new(),
            created: None,
            creating: false,
            quantity: 1,
        }
    }
}

impl AttachForm {
    pub fn target_order(&self) -> Option<OrderId> {
        match self.source {
            OrderSource::Existing => self.selected,
            OrderSource::New => self.created,
        }
    }

    pub fn can_create(&self) -> bool {
        self.source == OrderSource::New
            && self.created.is_none()
            && !self.creating
            && !self.new_name.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.creating && self.quantity >= 1 && self.target_order().is_some()
    }

    pub fn build(&self, target: &AttachTarget) -> Result<AttachRequest, String> {
        let order_id = self
            .target_order()
            .ok_or_else(|| "Wybierz lub utwórz zamówienie".to_string())?;
        if self.quantity < 1 {
            return Err("Ilość musi wynosić co najmniej 1".to_string());
        }
        Ok(target.request(order_id, self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn medicine() -> AttachTarget {
        AttachTarget::Medicine { id: 12, name: "Paracetamol".into() }
    }

    #[test]
    fn test_existing_order_with_amount_builds_medicine_line() {
        let form = AttachForm {
            selected: Some(8),
            quantity: 3,
            ..Default::default()
        };
        assert!(form.can_submit());
        let request = form.build(&medicine()).unwrap();
        assert_eq!(request.path(), "zamowienia/lek");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"id_zamowienia": 8, "id_leku": 12, "ilosc": 3})
        );
    }

    #[test]
    fn test_equipment_line_goes_to_equipment_endpoint() {
        let target = AttachTarget::Equipment { id: 4, name: "Nosze".into() };
        let form = AttachForm { selected: Some(2), ..Default::default() };
        let request = form.build(&target).unwrap();
        assert_eq!(request.path(), "zamowienia/sprzet");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"id_zamowienia": 2, "id_sprzetu": 4, "ilosc": 1})
        );
    }

    #[test]
    fn test_new_order_blocks_submit_until_id_returned() {
        let mut form = AttachForm {
            source: OrderSource::New,
            selected: Some(8),
            ..Default::default()
        };
        assert!(!form.can_create());
        assert!(!form.can_submit());

        form.new_name = "Gdynia 06/2025".into();
        assert!(form.can_create());

        form.creating = true;
        assert!(!form.can_create());
        assert!(!form.can_submit());

        form.creating = false;
        form.created = Some(31);
        assert!(!form.can_create());
        assert!(form.can_submit());
        assert_eq!(form.target_order(), Some(31));
    }

    #[test]
    fn test_amount_below_one_rejected() {
        let form = AttachForm {
            selected: Some(1),
            quantity: 0,
            ..Default::default()
        };
        assert!(!form.can_submit());
        assert!(form.build(&medicine()).is_err());
    }
}
