use std::path::{Path, PathBuf};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use tempfile::TempDir;

use delivery_helpers::adapter::outbound::sqlite::SqliteDeliveryStore;

pub const SCHEMA: &str = "
    CREATE TABLE Restaurants (
        RestaurantID TEXT PRIMARY KEY,
        RestaurantName TEXT,
        Manager TEXT,
        Email TEXT,
        Years_as_manager INTEGER
    );
    CREATE TABLE Orders (
        OrderID INTEGER PRIMARY KEY,
        RestaurantID TEXT,
        DeliveryTimeMins REAL,
        CustomerRatingFood INTEGER
    );
";

/// Restaurants R001-R003 plus orders, one of which references the unknown R999.
///
/// Expected ratings: R002 5.0 (2 orders), R001 4.5 (3), R999 3.0 (1),
/// R003 unrated (1). Six orders carry a delivery time.
pub const SEED: &str = "
    INSERT INTO Restaurants VALUES ('R001', 'Pasta Place', 'Zed', 'zed@pasta.com', 7);
    INSERT INTO Restaurants VALUES ('R002', 'Noodle Bar', 'Yan', 'yan@noodle.com', 2);
    INSERT INTO Restaurants VALUES ('R003', 'Taco Stand', NULL, NULL, NULL);

    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R001', 25, 4);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R001', 30.5, 5);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R001', NULL, NULL);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R002', 18, 5);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R002', 22, 5);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R003', 41, NULL);
    INSERT INTO Orders (RestaurantID, DeliveryTimeMins, CustomerRatingFood) VALUES ('R999', 35, 3);
";

/// Temporary delivery service database for integration tests.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

#[derive(QueryableByName, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantSnapshot {
    #[diesel(sql_type = Text, column_name = "RestaurantID")]
    pub restaurant_id: String,
    #[diesel(sql_type = Nullable<Text>, column_name = "Manager")]
    pub manager: Option<String>,
    #[diesel(sql_type = Nullable<Text>, column_name = "Email")]
    pub email: Option<String>,
    #[diesel(sql_type = Nullable<Integer>, column_name = "Years_as_manager")]
    pub years: Option<i32>,
}

impl TempDb {
    /// Database with arbitrary DDL/DML and nothing else.
    pub fn with_sql(sql: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("delivery_service.db");

        let mut conn = SqliteConnection::establish(&path.to_string_lossy())
            .expect("create sqlite database");
        conn.batch_execute(sql).expect("prepare database");

        Self { _dir: dir, path }
    }

    /// Expected schema with no rows.
    pub fn empty() -> Self {
        Self::with_sql(SCHEMA)
    }

    /// Expected schema with the standard seed rows.
    pub fn seeded() -> Self {
        Self::with_sql(&format!("{SCHEMA}{SEED}"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> SqliteDeliveryStore {
        SqliteDeliveryStore::new(&self.path)
    }

    pub fn execute(&self, sql: &str) {
        self.connection().batch_execute(sql).expect("execute sql");
    }

    /// All restaurants ordered by id.
    pub fn restaurants(&self) -> Vec<RestaurantSnapshot> {
        diesel::sql_query(
            "SELECT RestaurantID, Manager, Email, Years_as_manager FROM Restaurants ORDER BY RestaurantID",
        )
        .load(&mut self.connection())
        .expect("load restaurants")
    }

    fn connection(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.path.to_string_lossy()).expect("open sqlite database")
    }
}
