use pretty_assertions::assert_eq;
use rowmap::{params, stmt::Params, Mapper, Scheme};
use std::sync::Arc;
use tests::{models::User, sqlite_users, users_scheme, LoggingConnection};

async fn seed(mapper: &Mapper<User>) {
    for (login, pass) in [("alice", "a"), ("bob", "b"), ("carol", "c")] {
        mapper.insert(&mut User::new(login, pass)).await.unwrap();
    }
}

#[tokio::test]
async fn select_translates_condition() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();
    let mapper = Mapper::new(Arc::new(connection), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();
    seed(&mapper).await;

    let users = mapper
        .select("WHERE !login <> :login ORDER BY !id DESC", params! { "login" => "bob" })
        .await
        .unwrap();

    let logins: Vec<_> = users.iter().map(|user| user.login.as_str()).collect();
    assert_eq!(logins, ["carol", "alice"]);
    assert_eq!(
        log.prepared().last().map(String::as_str),
        Some(
            "SELECT id_field AS id, login_field AS login, pass_field AS pass FROM users \
             WHERE users.login_field <> :login ORDER BY users.id_field DESC"
        )
    );
}

#[tokio::test]
async fn select_without_matches_is_empty() {
    let mapper = Mapper::new(sqlite_users(), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();

    let users = mapper
        .select("WHERE !login = :login", params! { "login" => "nobody" })
        .await
        .unwrap();
    assert!(users.is_empty());

    // An empty condition selects the whole table
    seed(&mapper).await;
    assert_eq!(mapper.select("", ()).await.unwrap().len(), 3);
}

#[tokio::test]
async fn conditioned_statements_are_compiled_once() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();
    let mapper = Mapper::new(Arc::new(connection), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();
    seed(&mapper).await;

    for login in ["alice", "bob"] {
        let users = mapper
            .select("WHERE !login = :login", params! { "login" => login })
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login, login);
    }
    for _ in 0..2 {
        assert_eq!(mapper.count("WHERE !pass IS NOT NULL", ()).await.unwrap(), 3);
    }

    // fetch, insert, update, delete, one select, one count
    let prepared = log.prepared();
    assert_eq!(prepared.len(), 6);
    assert_eq!(mapper.cached_statements().await, 2);

    let select = &prepared[4];
    assert_eq!(
        log.executions(select),
        [
            params! { "login" => "alice" },
            params! { "login" => "bob" }
        ]
    );
    assert_eq!(log.executions(&prepared[5]).len(), 2);
}

#[tokio::test]
async fn cache_survives_prototype_switch() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();
    let records = Mapper::new(Arc::new(connection), "users", users_scheme())
        .await
        .unwrap();

    records.select("WHERE !id > :id", params! { "id" => 0 }).await.unwrap();
    assert_eq!(log.prepared().len(), 5);

    let users = records.with_prototype::<User>();
    assert_eq!(users.cached_statements().await, 1);

    users.select("WHERE !id > :id", params! { "id" => 0 }).await.unwrap();
    assert_eq!(log.prepared().len(), 5);
}

#[tokio::test]
async fn bounded_cache_evicts_oldest() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();
    let mapper = Mapper::builder(Arc::new(connection), "users", users_scheme())
        .statement_cache_capacity(1)
        .build::<User>()
        .await
        .unwrap();

    mapper.select("WHERE !id = 1", ()).await.unwrap();
    mapper.select("WHERE !id = 2", ()).await.unwrap();
    assert_eq!(mapper.cached_statements().await, 1);

    // The first condition was evicted and is compiled again
    mapper.select("WHERE !id = 1", ()).await.unwrap();
    assert_eq!(log.prepared().len(), 7);
}

#[tokio::test]
async fn zero_capacity_disables_cache() {
    let connection = LoggingConnection::new(sqlite_users());
    let log = connection.log();
    let mapper = Mapper::builder(Arc::new(connection), "users", users_scheme())
        .statement_cache_capacity(0)
        .build::<User>()
        .await
        .unwrap();

    for _ in 0..2 {
        mapper.count("", Params::new()).await.unwrap();
    }
    assert_eq!(mapper.cached_statements().await, 0);
    assert_eq!(log.prepared().len(), 6);
}

#[tokio::test]
async fn count_matching_rows() {
    let mapper = Mapper::new(sqlite_users(), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();
    assert_eq!(mapper.count("", ()).await.unwrap(), 0);

    seed(&mapper).await;
    assert_eq!(mapper.count("", ()).await.unwrap(), 3);
    assert_eq!(
        mapper
            .count("WHERE !login IN (:a, :b)", params! { "a" => "alice", "b" => "carol" })
            .await
            .unwrap(),
        2
    );

    // Grouping over no rows produces no count row at all
    assert_eq!(
        mapper
            .count(
                "GROUP BY !login HAVING !login = :login",
                params! { "login" => "dave" }
            )
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn select_through_join() {
    let sqlite = sqlite_users();
    sqlite
        .execute_batch(
            "CREATE TABLE posts (post_id INTEGER PRIMARY KEY, author_field INTEGER, title_field TEXT)",
        )
        .unwrap();

    let users = Mapper::new(sqlite.clone(), "users", users_scheme())
        .await
        .unwrap()
        .with_prototype::<User>();
    let posts = Mapper::new(
        sqlite.clone(),
        "posts",
        Scheme::builder()
            .id("post_id")
            .property("author", "author_field")
            .property("title", "title_field")
            .build(),
    )
    .await
    .unwrap();
    seed(&users).await;
    sqlite
        .execute_batch("INSERT INTO posts (author_field, title_field) VALUES (2, 'hello')")
        .unwrap();

    let join = users.join("INNER", &posts, "id", "author");
    assert_eq!(
        join,
        "INNER JOIN posts ON users.id_field = posts.author_field"
    );

    let condition = format!("{join} WHERE {}", posts.convert("!title = :title"));
    let authors = users
        .select(&condition, params! { "title" => "hello" })
        .await
        .unwrap();

    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].login, "bob");
}

#[tokio::test]
async fn convert_unknown_property() {
    let mapper = Mapper::new(sqlite_users(), "users", users_scheme())
        .await
        .unwrap();

    assert_eq!(
        mapper.convert("WHERE !login = :login AND !created_at > 0"),
        "WHERE users.login_field = :login AND users.created_at > 0"
    );
}
