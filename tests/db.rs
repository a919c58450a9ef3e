use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct Pragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_migrated_database() {
    let test_db = common::TestDb::new("test_creates_migrated_database.db");
    let mut conn = test_db.pool().get().unwrap();

    conn.batch_execute("SELECT id, name, email, phone, contact_type FROM contacts")
        .unwrap();
    conn.batch_execute(
        "SELECT id, contact_id, image_data, file_name, content_type, uploaded_at FROM contact_images",
    )
    .unwrap();
}

#[test]
fn test_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_connections_enforce_foreign_keys.db");
    let mut conn = test_db.pool().get().unwrap();

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .unwrap();
    assert_eq!(pragma.foreign_keys, 1);

    let orphan = conn.batch_execute(
        "INSERT INTO contact_images (contact_id, image_data) VALUES (42, 'aGVsbG8=')",
    );
    assert!(orphan.is_err());
}
