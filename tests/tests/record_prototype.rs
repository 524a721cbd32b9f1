use rowmap::{stmt::Value, Entity, Mapper, Record, Scheme};
use tests::sqlite_users;

async fn records() -> Mapper {
    let sqlite = sqlite_users();
    sqlite
        .execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, title TEXT, stars INTEGER)")
        .unwrap();

    Mapper::new(sqlite, "notes", Scheme::from_fields(["id", "title", "stars"]))
        .await
        .unwrap()
}

#[tokio::test]
async fn records_round_trip_through_the_table() {
    let mapper = records().await;
    assert_eq!(mapper.prototype(), std::any::type_name::<Record>());

    let mut note = Record::new();
    note.set("title", "groceries").unwrap();
    note.set("stars", 3).unwrap();
    mapper.insert(&mut note).await.unwrap();
    assert_eq!(note.id(), Some(1));

    let fetched = mapper.fetch(1).await.unwrap().unwrap();
    assert_eq!(fetched.id(), Some(1));
    assert_eq!(fetched.get("title"), Some(&Value::from("groceries")));
    assert_eq!(fetched.get("stars"), Some(&Value::I64(3)));
    assert_eq!(fetched, note);
}

#[tokio::test]
async fn records_keep_selected_columns() {
    let mapper = records().await;

    let mut note = Record::new();
    note.set("title", "todo").unwrap();
    mapper.insert(&mut note).await.unwrap();

    let notes = mapper.select("WHERE !stars IS NULL", ()).await.unwrap();
    assert_eq!(notes.len(), 1);

    let properties: Vec<_> = notes[0].properties().map(|(name, _)| name).collect();
    assert_eq!(properties, ["title", "stars"]);
    assert_eq!(notes[0].get("stars"), Some(&Value::Null));
}

#[tokio::test]
async fn record_update_and_delete() {
    let mapper = records().await;

    let mut note = Record::new();
    note.set("title", "draft").unwrap();
    note.set("stars", 1).unwrap();
    mapper.insert(&mut note).await.unwrap();

    note.set("stars", 5).unwrap();
    mapper.update(&note).await.unwrap();
    assert_eq!(mapper.count("WHERE !stars = 5", ()).await.unwrap(), 1);

    mapper.delete(note.id().unwrap()).await.unwrap();
    assert_eq!(mapper.count("", ()).await.unwrap(), 0);
}
