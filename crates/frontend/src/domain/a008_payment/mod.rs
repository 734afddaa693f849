pub mod ui;

use contracts::domain::a008_payment::Payment;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/payments";
pub const PERMISSION: &str = "payments";

pub fn api() -> RestResource<Payment> {
    RestResource::new("/api/payments")
}

impl ResourceRow for Payment {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "reference" => CellValue::opt_text(self.reference.as_deref()),
            "customer" => CellValue::opt_text(self.customer_name.as_deref()),
            "amount" => CellValue::Money(self.amount),
            "method" => CellValue::opt_text(self.method.as_deref()),
            "state" => CellValue::opt_text(self.state.as_deref()),
            "paid_at" => CellValue::Date(self.paid_at.map(|t| t.to_rfc3339())),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_at_becomes_a_date_cell() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "pay_1",
            "amount": 250.5,
            "paidAt": "2024-05-01T10:30:00Z",
            "state": "captured"
        }))
        .unwrap();
        assert_eq!(payment.cell("amount"), CellValue::Money(250.5));
        assert_eq!(payment.cell("state"), CellValue::text("captured"));
        match payment.cell("paid_at") {
            CellValue::Date(Some(raw)) => {
                assert_eq!(crate::shared::format::format_datetime(&raw), "01.05.2024 10:30")
            }
            other => panic!("unexpected cell {:?}", other),
        }
    }
}
