mod support;

use delivery_helpers::application::manager::{load_manager, update_manager};
use delivery_helpers::domain::{DomainError, EmailPattern};
use delivery_helpers::error::{Error, SchemaError};

use support::db::TempDb;

#[test]
fn round_trip_writes_exact_values() {
    let db = TempDb::seeded();
    let store = db.store();

    let message = update_manager(
        &store,
        &EmailPattern::default(),
        "R001",
        Some("Alice"),
        Some("alice@alpha.com"),
        Some(3),
    )
    .unwrap();
    assert_eq!(message, "Updated manager info for RestaurantID=R001");

    let record = load_manager(&store, "R001").unwrap().unwrap();
    assert_eq!(record.manager.as_deref(), Some("Alice"));
    assert_eq!(record.email.as_deref(), Some("alice@alpha.com"));
    assert_eq!(record.years, Some(3));
    assert_eq!(record.restaurant_name.as_deref(), Some("Pasta Place"));
}

#[test]
fn manager_only_update_keeps_email_and_years() {
    let db = TempDb::seeded();
    let store = db.store();

    update_manager(&store, &EmailPattern::default(), "R002", Some("Bea"), None, None).unwrap();

    let record = load_manager(&store, "R002").unwrap().unwrap();
    assert_eq!(record.manager.as_deref(), Some("Bea"));
    assert_eq!(record.email.as_deref(), Some("yan@noodle.com"));
    assert_eq!(record.years, Some(2));
}

#[test]
fn update_touches_only_target_row() {
    let db = TempDb::seeded();
    let before = db.restaurants();

    update_manager(&db.store(), &EmailPattern::default(), "R003", None, None, Some(1)).unwrap();

    let after = db.restaurants();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2].years, Some(1));
    assert_eq!(after[2].manager, None);
}

#[test]
fn unknown_restaurant_is_not_found_and_nothing_changes() {
    let db = TempDb::seeded();
    let before = db.restaurants();

    let err = update_manager(
        &db.store(),
        &EmailPattern::default(),
        "R404",
        Some("Alice"),
        Some("alice@alpha.com"),
        Some(3),
    )
    .unwrap_err();

    assert!(matches!(err, Error::NotFound { ref restaurant_id } if restaurant_id == "R404"));
    assert_eq!(db.restaurants(), before);
}

#[test]
fn update_without_fields_still_checks_existence() {
    let db = TempDb::seeded();
    let store = db.store();
    let before = db.restaurants();

    update_manager(&store, &EmailPattern::default(), "R001", None, None, None).unwrap();
    assert_eq!(db.restaurants(), before);

    let err = update_manager(&store, &EmailPattern::default(), "R404", None, None, None).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn invalid_email_fails_before_touching_database() {
    let dir = tempfile::tempdir().unwrap();
    // The path does not exist, so any database access would be a connection error.
    let store = delivery_helpers::adapter::outbound::sqlite::SqliteDeliveryStore::new(
        dir.path().join("never-created.db"),
    );

    for email in ["al1ce@alpha.com", "alice@alpha", "alicealpha.com", "alice@sub.alpha.com"] {
        let err = update_manager(&store, &EmailPattern::default(), "R001", None, Some(email), None)
            .unwrap_err();
        assert!(
            matches!(err, Error::Domain(DomainError::InvalidEmail { .. })),
            "{email}: unexpected {err}"
        );
    }
    assert!(!dir.path().join("never-created.db").exists());
}

#[test]
fn missing_id_fails_before_touching_database() {
    let dir = tempfile::tempdir().unwrap();
    let store = delivery_helpers::adapter::outbound::sqlite::SqliteDeliveryStore::new(
        dir.path().join("never-created.db"),
    );

    let err = update_manager(&store, &EmailPattern::default(), "", Some("Alice"), None, None)
        .unwrap_err();
    assert_eq!(err.to_string(), "restaurant_id is required");
}

#[test]
fn invalid_email_leaves_row_unchanged() {
    let db = TempDb::seeded();
    let before = db.restaurants();

    let err = update_manager(
        &db.store(),
        &EmailPattern::default(),
        "R001",
        Some("Alice"),
        Some("alice99@alpha.com"),
        None,
    )
    .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(db.restaurants(), before);
}

#[test]
fn missing_column_is_reported_as_schema_error() {
    let db = TempDb::with_sql(
        "CREATE TABLE Restaurants (RestaurantID TEXT PRIMARY KEY, RestaurantName TEXT, Manager TEXT, Email TEXT);
         INSERT INTO Restaurants VALUES ('R001', 'Pasta Place', NULL, NULL);",
    );

    let err = update_manager(&db.store(), &EmailPattern::default(), "R001", Some("Alice"), None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::MissingColumn {
            table: "Restaurants",
            column: "Years_as_manager",
        })
    ));
}

#[test]
fn load_manager_returns_none_for_unknown_id() {
    let db = TempDb::seeded();
    assert!(load_manager(&db.store(), "R404").unwrap().is_none());
}

#[test]
fn custom_email_pattern_is_enforced() {
    let db = TempDb::seeded();
    let pattern = EmailPattern::new(r"^[a-z]+@pasta\.com$").unwrap();

    update_manager(&db.store(), &pattern, "R001", None, Some("chef@pasta.com"), None).unwrap();
    let err = update_manager(&db.store(), &pattern, "R001", None, Some("alice@alpha.com"), None)
        .unwrap_err();

    assert!(err.is_validation());
    let record = load_manager(&db.store(), "R001").unwrap().unwrap();
    assert_eq!(record.email.as_deref(), Some("chef@pasta.com"));
}

#[test]
fn empty_email_clears_stored_email() {
    let db = TempDb::seeded();
    let store = db.store();

    update_manager(&store, &EmailPattern::default(), "R001", None, Some(""), None).unwrap();

    let record = load_manager(&store, "R001").unwrap().unwrap();
    assert_eq!(record.email.as_deref(), Some(""));
    assert_eq!(record.manager.as_deref(), Some("Zed"));
    assert_eq!(record.years, Some(7));
}
