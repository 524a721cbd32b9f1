use rowmap::{stmt::Row, Mapper};
use std::sync::Arc;
use tests::{
    assert_err, assert_none,
    mock::{MockConnection, Outcome},
    models::User,
    sqlite_users, users_scheme,
};

async fn mock_users() -> (MockConnection, Mapper<User>) {
    let mock = MockConnection::new();
    let mapper = Mapper::new(Arc::new(mock.clone()), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();
    (mock, mapper)
}

fn user_row(id: i64, login: &str) -> Row {
    Row::from_pairs([
        ("id", rowmap::stmt::Value::from(id)),
        ("login", login.into()),
        ("pass", rowmap::stmt::Value::Null),
    ])
}

#[tokio::test]
async fn zero_rows_is_not_found() {
    let (mock, mapper) = mock_users().await;
    let fetch = mapper.statements().fetch.clone();

    assert_none!(mapper.fetch(1).await);
    assert_eq!(mock.cursor_closes(&fetch), 1);
}

#[tokio::test]
async fn one_row_is_hydrated() {
    let (mock, mapper) = mock_users().await;
    let fetch = mapper.statements().fetch.clone();
    mock.push(&fetch, Outcome::Rows(vec![user_row(1, "admin")]));

    let user = mapper.fetch(1).await.unwrap().unwrap();

    assert_eq!(
        user,
        User {
            id: Some(1),
            login: "admin".into(),
            pass: None,
        }
    );
    assert_eq!(mock.cursor_closes(&fetch), 1);
}

#[tokio::test]
async fn several_rows_violate_uniqueness() {
    let (mock, mapper) = mock_users().await;
    let fetch = mapper.statements().fetch.clone();
    mock.push(
        &fetch,
        Outcome::Rows(vec![user_row(1, "a"), user_row(1, "b")]),
    );

    let err = assert_err!(mapper.fetch(1).await);

    assert!(err.is_uniqueness_violation());
    assert_eq!(
        err.to_string(),
        "uniqueness violation: id is not unique; table=users rows=2"
    );
    assert_eq!(mock.cursor_closes(&fetch), 1);
}

#[tokio::test]
async fn missing_reported_row_is_an_error() {
    let (mock, mapper) = mock_users().await;
    let fetch = mapper.statements().fetch.clone();
    // One row counted, none delivered
    mock.push(&fetch, Outcome::Affected(1));

    let err = assert_err!(mapper.fetch(1).await);
    assert!(err.is_adhoc());
    assert_eq!(
        err.to_string(),
        "driver reported one row but returned none; table=users"
    );
    assert_eq!(mock.cursor_closes(&fetch), 1);
}

#[tokio::test]
async fn negative_count_is_a_conversion_error() {
    let (mock, mapper) = mock_users().await;
    mock.push(
        &format!("{} ", mapper.statements().count),
        Outcome::Rows(vec![Row::from_pairs([("count", -1)])]),
    );

    let err = assert_err!(mapper.count("", ()).await);
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to u64");
}

#[tokio::test]
async fn execution_failure_is_surfaced() {
    let (mock, mapper) = mock_users().await;
    mock.push(
        &mapper.statements().fetch,
        Outcome::fail("HY000", "general error"),
    );

    let err = assert_err!(mapper.fetch(1).await);

    assert_eq!(err.storage_code(), Some("HY000"));
    assert_eq!(err.storage_message(), Some("general error"));
}

#[tokio::test]
async fn hydration_type_mismatch() {
    let (mock, mapper) = mock_users().await;
    mock.push(
        &mapper.statements().fetch,
        Outcome::Rows(vec![Row::from_pairs([("id", 1), ("login", 5)])]),
    );

    let err = assert_err!(mapper.fetch(1).await);
    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn duplicate_ids_in_sqlite() {
    let sqlite = sqlite_users();
    sqlite
        .execute_batch(
            "CREATE TABLE legacy (id_field INTEGER, login_field TEXT, pass_field TEXT);
             INSERT INTO legacy VALUES (7, 'a', NULL), (7, 'b', NULL), (8, 'c', 'x');",
        )
        .unwrap();

    let mapper = Mapper::new(sqlite, "legacy", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();

    assert!(assert_err!(mapper.fetch(7).await).is_uniqueness_violation());
    assert_eq!(mapper.fetch(8).await.unwrap().unwrap().login, "c");
    assert_none!(mapper.fetch(9).await);
}
