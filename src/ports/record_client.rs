//! Record-service port definition.

use crate::domain::{
    AppError, Complexity, NetworkEquipment, Peripherals, Placement, Snapshot, Station,
    derive_complexity, derive_network_equipment, format_order_text,
};

/// Fully-formed payload for creating an order record in the external
/// record-keeping service.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub customer_name: String,
    pub stations: Vec<Station>,
    pub peripherals: Peripherals,
    pub placements: Vec<Placement>,
    pub equipment: NetworkEquipment,
    pub complexity: Complexity,
    pub order_text: String,
}

impl OrderRecord {
    /// Derive the complete record from a snapshot.
    ///
    /// This is the submission gate: a missing customer name blocks the
    /// record here, while local derivation elsewhere still runs on
    /// partial data.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, AppError> {
        if snapshot.customer_name.trim().is_empty() {
            return Err(AppError::MissingCustomerName);
        }
        let equipment = derive_network_equipment(snapshot);
        let complexity = derive_complexity(snapshot, &equipment);
        let order_text = format_order_text(snapshot, &equipment, &complexity);
        Ok(Self {
            customer_name: snapshot.customer_name.clone(),
            stations: snapshot.stations.clone(),
            peripherals: snapshot.peripherals,
            placements: snapshot.placements.clone(),
            equipment,
            complexity,
            order_text,
        })
    }

    pub fn pos_ipads(&self) -> u32 {
        self.stations.iter().filter(|s| s.has_pos).count() as u32
    }

    pub fn cds_ipads(&self) -> u32 {
        self.stations.iter().filter(|s| s.has_cds).count() as u32
    }
}

/// Confirmation returned by the record service.
#[derive(Debug, Clone)]
pub struct RecordReceipt {
    /// Locator for the created record, when the service provides one.
    pub record_url: Option<String>,
}

/// Port for the external record-keeping service.
pub trait RecordClient {
    /// Create an order record. A single attempt; failures surface the
    /// underlying reason and are never retried.
    fn create_order(&self, record: &OrderRecord) -> Result<RecordReceipt, AppError>;
}

/// Mock client for testing without network calls.
#[derive(Debug, Clone, Default)]
pub struct MockRecordClient;

impl RecordClient for MockRecordClient {
    fn create_order(&self, record: &OrderRecord) -> Result<RecordReceipt, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would create order record:");
        println!("  Customer: {}", record.customer_name);
        println!("  Stations: {}", record.stations.len());
        println!("  Printers: {}", record.placements.len());
        println!("  Complexity: {} ({})", record.complexity.level, record.complexity.time);
        Ok(RecordReceipt {
            record_url: Some(format!("mock://orders/{}", chrono::Utc::now().timestamp())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PrinterType;

    #[test]
    fn record_requires_customer_name() {
        let snapshot = Snapshot::new();
        assert!(matches!(
            OrderRecord::from_snapshot(&snapshot),
            Err(AppError::MissingCustomerName)
        ));

        let mut named = Snapshot::new();
        named.customer_name = "   ".to_string();
        assert!(OrderRecord::from_snapshot(&named).is_err());
    }

    #[test]
    fn record_carries_derived_artifacts() {
        let mut snapshot = Snapshot::new();
        snapshot.customer_name = "Waffle Cafe".to_string();
        snapshot.stations[0].has_pos = true;
        snapshot.set_printer_count(PrinterType::Receipt, 1);

        let record = OrderRecord::from_snapshot(&snapshot).unwrap();
        assert_eq!(record.pos_ipads(), 1);
        assert_eq!(record.cds_ipads(), 0);
        assert!(!record.equipment.router.is_empty());
        assert!(record.order_text.contains("CUSTOMER: Waffle Cafe"));
    }
}
