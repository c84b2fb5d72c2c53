//! Shipment command and query handlers.

mod create_shipment;
mod delete_shipment;
mod find_by_tracking_number;
mod get_shipment;
mod get_status_stats;
mod list_shipments;
mod save_shipment;
mod search_shipments;
mod toggle_express;
mod update_shipment;

pub use create_shipment::{CreateShipmentCommand, CreateShipmentHandler};
pub use delete_shipment::{DeleteShipmentCommand, DeleteShipmentHandler};
pub use find_by_tracking_number::{FindByTrackingNumberHandler, FindByTrackingNumberQuery};
pub use get_shipment::{GetShipmentHandler, GetShipmentQuery};
pub use get_status_stats::{GetStatusStatsHandler, GetStatusStatsQuery};
pub use list_shipments::{ListShipmentsHandler, ListShipmentsQuery, PageSizePolicy};
pub use save_shipment::{generate_unique_tracking_number, ShipmentSaver};
pub use search_shipments::{SearchShipmentsHandler, SearchShipmentsQuery};
pub use toggle_express::{ToggleExpressCommand, ToggleExpressHandler};
pub use update_shipment::{UpdateShipmentCommand, UpdateShipmentHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::ShipmentSaver;
    use crate::adapters::memory::InMemoryShipmentStore;
    use crate::adapters::tracking::RandomTrackingNumbers;
    use crate::domain::foundation::UserId;
    use crate::domain::shipment::{Priority, Shipment, ShipmentDetails, ShipmentStatus};

    pub fn details(sender: &str) -> ShipmentDetails {
        ShipmentDetails {
            sender_name: sender.to_string(),
            sender_address: "123 Main St, New York, NY 10001".to_string(),
            recipient_name: "Jane Smith".to_string(),
            recipient_address: "456 Oak Ave, Los Angeles, CA 90210".to_string(),
            package_description: Some("Electronics - Laptop".to_string()),
            weight: Some(2.0),
            status: ShipmentStatus::Pending,
            priority: Priority::Standard,
            is_express: false,
        }
    }

    pub fn seeded() -> (Arc<InMemoryShipmentStore>, ShipmentSaver) {
        let store = Arc::new(InMemoryShipmentStore::new());
        let saver = ShipmentSaver::new(store.clone(), Arc::new(RandomTrackingNumbers::new()));
        (store, saver)
    }

    pub async fn seed(saver: &ShipmentSaver, user_id: UserId, details: ShipmentDetails) -> Shipment {
        let mut shipment = Shipment::new(user_id, details).unwrap();
        saver.save(&mut shipment).await.unwrap();
        shipment
    }
}
