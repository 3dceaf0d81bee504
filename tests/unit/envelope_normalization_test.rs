use serde_json::{json, Value};
use sevadesk::core::{AppError, DeletableRecord, EntityKind, LifecycleState, Listing};
use sevadesk::modules::adapter_for;

fn normalize(kind: EntityKind, raw: Value, listing: Listing) -> Result<Vec<DeletableRecord>, AppError> {
    let adapter = adapter_for(kind);
    let routes = adapter.default_routes();
    adapter.normalize(&raw, &routes.envelope, listing)
}

#[test]
fn test_blog_trash_nested_envelope() {
    let raw = json!({
        "success": true,
        "data": {
            "deletedBlogs": [
                {
                    "_id": "b1",
                    "title": "Ganga Aarti",
                    "author": { "name": "Ravi" },
                    "category": { "_id": "c1", "name": "Festivals" },
                    "isDeleted": true,
                    "deletedAt": "2025-11-01T10:00:00.000Z"
                },
                { "_id": "b2", "title": "Navgraha", "author": "Meera", "isDeleted": true }
            ]
        }
    });

    let records = normalize(EntityKind::Blog, raw, Listing::Deleted).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.id, "b1");
    assert_eq!(first.state, LifecycleState::Deleted);
    assert_eq!(first.field("author"), Some("Ravi"));
    assert_eq!(first.field("category"), Some("Festivals"));
    assert!(first.deleted_at.is_some());

    assert_eq!(records[1].field("author"), Some("Meera"));
}

#[test]
fn test_puja_trash_plain_data_array() {
    let raw = json!({
        "data": [
            { "_id": "p1", "title": "Rudrabhishek", "location": "Kashi", "deletedAt": "2025-10-30T08:15:00Z" }
        ]
    });

    let records = normalize(EntityKind::Puja, raw, Listing::Deleted).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field("title"), Some("Rudrabhishek"));
    assert_eq!(records[0].field("location"), Some("Kashi"));
}

#[test]
fn test_bare_array_body() {
    let raw = json!([
        { "_id": "r1", "name": "Panch Mukhi", "mukhi": 5, "price": 1100 }
    ]);

    let records = normalize(EntityKind::Rudraksha, raw, Listing::Deleted).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field("mukhi"), Some("5"));
    assert_eq!(records[0].field("price"), Some("1100"));
}

#[test]
fn test_booking_deleted_items_envelope() {
    let raw = json!({
        "data": {
            "deletedItems": [
                {
                    "_id": "k1",
                    "fullName": "Asha Verma",
                    "whatsappNumber": "+919800000000",
                    "puja": { "title": "Satyanarayan Katha" },
                    "status": "pending"
                }
            ],
            "total": 1
        }
    });

    let records = normalize(EntityKind::Booking, raw, Listing::Deleted).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field("name"), Some("Asha Verma"));
    assert_eq!(records[0].field("whatsapp"), Some("+919800000000"));
    assert_eq!(records[0].field("puja"), Some("Satyanarayan Katha"));
}

#[test]
fn test_participation_form_fields() {
    let raw = json!({
        "data": {
            "deletedItems": [
                { "_id": "f1", "participantName": "Kiran", "gotra": "Kashyap", "pujaTitle": "Navgraha Shanti" }
            ]
        }
    });

    let records = normalize(EntityKind::ParticipationForm, raw, Listing::Deleted).unwrap();
    assert_eq!(records[0].field("participant"), Some("Kiran"));
    assert_eq!(records[0].field("gotra"), Some("Kashyap"));
    assert_eq!(records[0].field("puja"), Some("Navgraha Shanti"));
}

#[test]
fn test_active_listing_drops_trashed_rows() {
    let raw = json!({
        "data": [
            { "_id": "c1", "name": "Festivals", "slug": "festivals" },
            { "_id": "c2", "name": "Old", "isDeleted": true }
        ]
    });

    let records = normalize(EntityKind::Category, raw, Listing::Active).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "c1");
    assert_eq!(records[0].state, LifecycleState::Active);
}

#[test]
fn test_item_without_id_is_skipped() {
    let raw = json!({ "data": [ { "name": "Tulsi Mala" }, { "_id": "x1", "name": "Karungali" } ] });

    let records = normalize(EntityKind::Bracelet, raw, Listing::Deleted).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "x1");
}

#[test]
fn test_unrecognised_envelope_is_an_error() {
    let raw = json!({ "message": "ok", "items": [] });

    let err = normalize(EntityKind::Bracelet, raw, Listing::Deleted).unwrap_err();
    match err {
        AppError::Envelope(msg) => assert!(msg.contains("items")),
        other => panic!("expected envelope error, got {other:?}"),
    }
}

#[test]
fn test_empty_trash() {
    let raw = json!({ "data": { "deletedBlogs": [] } });
    assert!(normalize(EntityKind::Blog, raw, Listing::Deleted).unwrap().is_empty());
}
