use pretty_assertions::assert_eq;
use rowmap::{Mapper, Scheme};
use std::sync::Arc;
use tests::{assert_err, sqlite_users, users_scheme, DriverOp, LoggingConnection};

#[tokio::test]
async fn compiles_fixed_statements_in_order() {
    let connection = LoggingConnection::new(sqlite_users());
    let mut log = connection.log();

    Mapper::new(Arc::new(connection), "users", users_scheme())
        .await
        .unwrap();

    assert_eq!(
        log.pop(),
        DriverOp::Prepare {
            sql: "SELECT id_field AS id, login_field AS login, pass_field AS pass FROM users WHERE id_field = :id".into()
        }
    );
    assert_eq!(
        log.pop(),
        DriverOp::Prepare {
            sql: "INSERT INTO users (id_field, login_field, pass_field) VALUES (:id, :login, :pass)"
                .into()
        }
    );
    assert_eq!(
        log.pop(),
        DriverOp::Prepare {
            sql: "UPDATE users SET id_field = :id, login_field = :login, pass_field = :pass WHERE id_field = :id".into()
        }
    );
    assert_eq!(
        log.pop(),
        DriverOp::Prepare {
            sql: "DELETE FROM users WHERE id_field = :id".into()
        }
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn missing_id_fails_before_compiling() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();

    let err = assert_err!(
        Mapper::new(
            Arc::new(connection),
            "users",
            Scheme::from([("login", "login_field")]),
        )
        .await
    );

    assert!(err.is_invalid_scheme());
    assert!(log.is_empty());
}

#[tokio::test]
async fn compile_failure_is_a_storage_error() {
    // No such table
    let err = assert_err!(Mapper::new(sqlite_users(), "missing", users_scheme()).await);

    assert!(err.is_storage());
    assert_eq!(err.storage_code(), Some("1"));
    assert_eq!(err.storage_message(), Some("no such table: missing"));
}

#[tokio::test]
async fn malformed_condition_is_a_storage_error() {
    let mapper = Mapper::new(sqlite_users(), "users", users_scheme())
        .await
        .unwrap();

    let err = assert_err!(mapper.select("WHERE !login = = :login", ()).await);
    assert!(err.is_storage());
    assert_eq!(err.storage_code(), Some("1"));
    assert_eq!(err.storage_message(), Some("near \"=\": syntax error"));

    let err = assert_err!(mapper.count("ORDER BY", ()).await);
    assert_eq!(err.storage_code(), Some("1"));
    assert_eq!(mapper.cached_statements().await, 0);
}

#[tokio::test]
async fn accessors() {
    let connection = sqlite_users();
    let mapper = Mapper::new(connection.clone(), "users", users_scheme())
        .await
        .unwrap();

    assert_eq!(mapper.table(), "users");
    assert_eq!(mapper.scheme(), &users_scheme());
    assert_eq!(mapper.prototype(), "rowmap::record::Record");
    assert_eq!(
        mapper.statements().select,
        "SELECT id_field AS id, login_field AS login, pass_field AS pass FROM users"
    );
    assert_eq!(
        mapper.statements().count,
        "SELECT COUNT(*) AS count FROM users"
    );

    let users = mapper.with_prototype::<tests::models::User>();
    assert_eq!(users.prototype(), "tests::models::User");
}

#[tokio::test]
async fn field_list_scheme() {
    let sqlite = sqlite_users();
    sqlite
        .execute_batch("CREATE TABLE tags (id INTEGER PRIMARY KEY, name TEXT)")
        .unwrap();

    let mapper = Mapper::new(sqlite, "tags", Scheme::from_fields(["id", "name"]))
        .await
        .unwrap();

    assert_eq!(
        mapper.statements().update,
        "UPDATE tags SET id = :id, name = :name WHERE id = :id"
    );
}
