use contracts::domain::a001_medicine::Medicine;
use contracts::domain::a004_utilization::UtilizeMedicineRequest;

pub const REASONS: [&str; 3] = ["Przeterminowany", "Uszkodzony", "Zużyty"];

#[derive(Clone, Debug, PartialEq)]
pub struct UtilizeForm {
    pub quantity: i32,
    pub reason: String,
    pub group: String,
}

impl UtilizeForm {
    /// Whole stock of an expired medicine is the usual case
    pub fn for_medicine(medicine: &Medicine) -> Self {
        Self {
            quantity: medicine.quantity.max(1),
            reason: REASONS[0].to_string(),
            group: String::new(),
        }
    }

    pub fn build(&self, medicine: &Medicine) -> Result<UtilizeMedicineRequest, String> {
        UtilizeMedicineRequest::new(medicine, self.quantity, &self.reason, &self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn medicine(quantity: i32) -> Medicine {
        serde_json::from_value(json!({"id": 7, "nazwa": "Ketonal", "ilosc": quantity})).unwrap()
    }

    #[test]
    fn test_defaults_to_whole_stock() {
        let form = UtilizeForm::for_medicine(&medicine(5));
        assert_eq!(form.quantity, 5);
        assert_eq!(form.reason, "Przeterminowany");
        let request = form.build(&medicine(5)).unwrap();
        assert_eq!(request.medicine_id, 7);
        assert_eq!(request.group, None);
    }

    #[test]
    fn test_quantity_bounded_by_stock() {
        let mut form = UtilizeForm::for_medicine(&medicine(2));
        form.quantity = 3;
        assert!(form.build(&medicine(2)).is_err());
        form.quantity = 0;
        assert!(form.build(&medicine(2)).is_err());
        form.quantity = 2;
        form.group = " 2025/06 ".into();
        assert_eq!(form.build(&medicine(2)).unwrap().group.as_deref(), Some("2025/06"));
    }

    #[test]
    fn test_blank_reason_rejected() {
        let mut form = UtilizeForm::for_medicine(&medicine(2));
        form.reason = "  ".into();
        assert!(form.build(&medicine(2)).is_err());
    }
}
