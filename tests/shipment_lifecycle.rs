//! End-to-end lifecycle tests over the in-memory persistence gateway.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use shipment_tracker::adapters::memory::InMemoryShipmentStore;
use shipment_tracker::adapters::tracking::RandomTrackingNumbers;
use shipment_tracker::application::handlers::shipment::{
    generate_unique_tracking_number, CreateShipmentCommand, CreateShipmentHandler,
    DeleteShipmentCommand, DeleteShipmentHandler, FindByTrackingNumberHandler,
    FindByTrackingNumberQuery, GetShipmentHandler, GetShipmentQuery, GetStatusStatsHandler,
    GetStatusStatsQuery, ListShipmentsHandler, ListShipmentsQuery, PageSizePolicy,
    SearchShipmentsHandler, SearchShipmentsQuery, ShipmentSaver, UpdateShipmentCommand,
    UpdateShipmentHandler,
};
use shipment_tracker::domain::foundation::UserId;
use shipment_tracker::domain::shipment::{
    Priority, Shipment, ShipmentDetails, ShipmentError, ShipmentFilter, ShipmentStatus,
    TrackingNumber,
};
use shipment_tracker::ports::{ShipmentRepository, TrackingNumberSource};

/// Replays a fixed list of suffixes, cycling when exhausted.
struct ScriptedTrackingNumbers {
    suffixes: Vec<u32>,
    cursor: Mutex<usize>,
}

impl ScriptedTrackingNumbers {
    fn new(suffixes: Vec<u32>) -> Self {
        Self {
            suffixes,
            cursor: Mutex::new(0),
        }
    }
}

impl TrackingNumberSource for ScriptedTrackingNumbers {
    fn next_candidate(&self) -> TrackingNumber {
        let mut cursor = self.cursor.lock().unwrap();
        let suffix = self.suffixes[*cursor % self.suffixes.len()];
        *cursor += 1;
        TrackingNumber::from_low_digits(suffix)
    }
}

fn user(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

fn details(sender: &str) -> ShipmentDetails {
    ShipmentDetails {
        sender_name: sender.to_string(),
        sender_address: "123 Main St, New York, NY 10001".to_string(),
        recipient_name: "Jane Smith".to_string(),
        recipient_address: "456 Oak Ave, Los Angeles, CA 90210".to_string(),
        package_description: Some("Electronics - Laptop".to_string()),
        weight: Some(2.5),
        status: ShipmentStatus::Pending,
        priority: Priority::Standard,
        is_express: false,
    }
}

struct Fixture {
    store: Arc<InMemoryShipmentStore>,
    saver: ShipmentSaver,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(InMemoryShipmentStore::new());
        let saver = ShipmentSaver::new(store.clone(), Arc::new(RandomTrackingNumbers::new()));
        Self { store, saver }
    }

    async fn create(&self, owner: UserId, details: ShipmentDetails) -> Shipment {
        CreateShipmentHandler::new(self.saver.clone())
            .handle(CreateShipmentCommand {
                user_id: owner,
                details,
            })
            .await
            .unwrap()
    }

    fn list_handler(&self) -> ListShipmentsHandler {
        ListShipmentsHandler::new(self.store.clone(), PageSizePolicy::default())
    }
}

#[tokio::test]
async fn create_assigns_number_and_derived_cost() {
    let fx = Fixture::new();
    let mut d = details("John Doe");
    d.priority = Priority::Urgent;
    d.is_express = true;

    let created = fx.create(user(1), d).await;

    assert!(created.is_persisted());
    let tracking = created.tracking_number().unwrap().as_str();
    assert_eq!(tracking.len(), 11);
    assert!(tracking.starts_with("SHP"));
    // (5 + 2.5 * 2) * 2.0 * 1.8
    assert_eq!(created.shipping_cost(), 36.0);
}

#[tokio::test]
async fn pagination_splits_five_rows_into_three_pages() {
    let fx = Fixture::new();
    for i in 0..5 {
        fx.create(user(1), details(&format!("Sender {}", i))).await;
    }

    let handler = fx.list_handler();
    let mut seen = Vec::new();
    for page in 1..=3 {
        let result = handler
            .handle(ListShipmentsQuery {
                user_id: user(1),
                filter: ShipmentFilter::default(),
                page: Some(page),
                per_page: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 3);
        seen.extend(result.items.iter().map(|s| s.sender_name().to_string()));
    }

    assert_eq!(
        seen,
        vec!["Sender 4", "Sender 3", "Sender 2", "Sender 1", "Sender 0"]
    );
}

#[tokio::test]
async fn empty_result_set_still_reports_one_page() {
    let fx = Fixture::new();

    let result = fx
        .list_handler()
        .handle(ListShipmentsQuery {
            user_id: user(1),
            filter: ShipmentFilter::default(),
            page: None,
            per_page: None,
        })
        .await
        .unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.total_count, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.per_page, PageSizePolicy::DEFAULT_PER_PAGE);
}

#[tokio::test]
async fn owners_never_see_each_others_shipments() {
    let fx = Fixture::new();
    let mine = fx.create(user(1), details("Alice")).await;
    fx.create(user(2), details("Bob")).await;
    let id = mine.id().unwrap();

    let get = GetShipmentHandler::new(fx.store.clone());
    assert!(matches!(
        get.handle(GetShipmentQuery {
            shipment_id: id,
            user_id: user(2),
        })
        .await,
        Err(ShipmentError::NotFound(_))
    ));

    let update = UpdateShipmentHandler::new(fx.store.clone(), fx.saver.clone());
    assert!(matches!(
        update
            .handle(UpdateShipmentCommand {
                shipment_id: id,
                user_id: user(2),
                details: details("Mallory"),
            })
            .await,
        Err(ShipmentError::NotFound(_))
    ));

    let delete = DeleteShipmentHandler::new(fx.store.clone());
    assert!(!delete
        .handle(DeleteShipmentCommand {
            shipment_id: id,
            user_id: user(2),
        })
        .await
        .unwrap());

    let search = SearchShipmentsHandler::new(fx.store.clone(), PageSizePolicy::default());
    let found = search
        .handle(SearchShipmentsQuery {
            user_id: user(2),
            term: "Alice".to_string(),
            page: None,
            per_page: None,
        })
        .await
        .unwrap();
    assert_eq!(found.total_count, 0);

    let stats = GetStatusStatsHandler::new(fx.store.clone())
        .handle(GetStatusStatsQuery { user_id: user(2) })
        .await
        .unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].count, 1);

    // Still intact for its owner.
    let own = get
        .handle(GetShipmentQuery {
            shipment_id: id,
            user_id: user(1),
        })
        .await
        .unwrap();
    assert_eq!(own.sender_name(), "Alice");
}

#[tokio::test]
async fn tracking_lookup_ignores_case_and_whitespace() {
    let fx = Fixture::new();
    let created = fx.create(user(1), details("John Doe")).await;
    let stored = created.tracking_number().unwrap().as_str().to_string();

    let handler = FindByTrackingNumberHandler::new(fx.store.clone());
    let found = handler
        .handle(FindByTrackingNumberQuery {
            tracking_number: format!("  {}  ", stored.to_lowercase()),
            user_id: Some(user(1)),
        })
        .await
        .unwrap();
    assert_eq!(found.id(), created.id());

    let other_owner = handler
        .handle(FindByTrackingNumberQuery {
            tracking_number: stored,
            user_id: Some(user(2)),
        })
        .await;
    assert!(matches!(
        other_owner,
        Err(ShipmentError::TrackingNumberNotFound(_))
    ));
}

#[tokio::test]
async fn search_ignores_filters_and_matches_description() {
    let fx = Fixture::new();
    let mut delivered = details("John Doe");
    delivered.status = ShipmentStatus::Delivered;
    fx.create(user(1), delivered).await;
    let mut other = details("Someone Else");
    other.package_description = Some("Books".to_string());
    fx.create(user(1), other).await;

    let result = SearchShipmentsHandler::new(fx.store.clone(), PageSizePolicy::default())
        .handle(SearchShipmentsQuery {
            user_id: user(1),
            term: "Laptop".to_string(),
            page: None,
            per_page: None,
        })
        .await
        .unwrap();

    assert_eq!(result.total_count, 1);
    assert_eq!(result.items[0].sender_name(), "John Doe");
}

#[tokio::test]
async fn thousand_generated_numbers_are_unique_and_well_formed() {
    let fx = Fixture::new();
    let source = RandomTrackingNumbers::new();
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let number = generate_unique_tracking_number(&source, fx.store.as_ref())
            .await
            .unwrap();
        let text = number.as_str();
        assert_eq!(text.len(), 11);
        assert!(text.starts_with("SHP"));
        assert!(text[3..].chars().all(|c| c.is_ascii_digit()));
        seen.insert(number);
    }

    assert_eq!(seen.len(), 1000);
}

#[tokio::test]
async fn generation_skips_numbers_already_in_use() {
    let store = Arc::new(InMemoryShipmentStore::new());
    let seeding = ShipmentSaver::new(
        store.clone(),
        Arc::new(ScriptedTrackingNumbers::new(vec![1])),
    );
    let mut existing = Shipment::new(user(1), details("John Doe")).unwrap();
    seeding.save(&mut existing).await.unwrap();

    let source = ScriptedTrackingNumbers::new(vec![1, 1, 2]);
    let number = generate_unique_tracking_number(&source, store.as_ref())
        .await
        .unwrap();

    assert_eq!(number, TrackingNumber::from_digits(2).unwrap());
}

#[tokio::test]
async fn concurrent_saves_with_the_same_number_both_succeed() {
    let store = Arc::new(InMemoryShipmentStore::new());
    let saver = ShipmentSaver::new(
        store.clone(),
        Arc::new(ScriptedTrackingNumbers::new(vec![77])),
    );
    let clash = TrackingNumber::from_digits(12_345_678).unwrap();

    let mut first = Shipment::new(user(1), details("First")).unwrap();
    let mut second = Shipment::new(user(2), details("Second")).unwrap();
    first.assign_tracking_number(clash.clone());
    second.assign_tracking_number(clash.clone());

    let (a, b) = tokio::join!(saver.save(&mut first), saver.save(&mut second));
    a.unwrap();
    b.unwrap();

    assert_eq!(store.len().await, 2);
    let numbers: HashSet<_> = [first.tracking_number(), second.tracking_number()]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    assert_eq!(numbers.len(), 2);
    assert!(numbers.contains(&clash));
    assert!(numbers.contains(&TrackingNumber::from_digits(77).unwrap()));
}

#[tokio::test]
async fn update_reprices_and_keeps_tracking_number() {
    let fx = Fixture::new();
    let created = fx.create(user(1), details("John Doe")).await;
    let mut changed = details("John Doe");
    changed.weight = Some(10.0);
    changed.priority = Priority::Priority;

    let updated = UpdateShipmentHandler::new(fx.store.clone(), fx.saver.clone())
        .handle(UpdateShipmentCommand {
            shipment_id: created.id().unwrap(),
            user_id: user(1),
            details: changed,
        })
        .await
        .unwrap();

    assert_eq!(updated.tracking_number(), created.tracking_number());
    // (5 + 10 * 2) * 1.5
    assert_eq!(updated.shipping_cost(), 37.5);

    let stored = fx
        .store
        .find_by_id(&created.id().unwrap(), &user(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.shipping_cost(), 37.5);
}
