//! Tier 5: Persistence

use crate::test_utils::*;
use quotesearch::{ColumnarTable, Error, JsonTableStore, SearchMode, Session, TableStore};
use tempfile::TempDir;

#[test]
fn tier5_round_trip_through_data_dir() {
    let dir = TempDir::new().unwrap();
    let source = create_test_session();
    source
        .save(&JsonTableStore::new(dir.path().join("quotes.json")))
        .unwrap();

    let reopened = Session::open(dir.path()).unwrap();
    assert_eq!(*reopened.table().unwrap(), quote_table());
    assert_eq!(
        reopened
            .search(SearchMode::Tag, "courage", true, None)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn tier5_columnar_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.json");
    JsonTableStore::new(&path).save(&quote_table()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for column in ["text", "author", "tags"] {
        assert_eq!(raw[column].as_array().unwrap().len(), 8, "column {}", column);
    }
    let columns: ColumnarTable = serde_json::from_value(raw).unwrap();
    assert_eq!(columns.row_count().unwrap(), 8);
}

#[test]
fn tier5_mismatched_columns_are_corruption() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.json");
    std::fs::write(
        &path,
        r#"{"text":["a","b"],"author":["x"],"author_link":[],"tags":[[],[]]}"#,
    )
    .unwrap();
    let err = JsonTableStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::Corruption { .. }));
}

#[test]
fn tier5_missing_table_is_no_data() {
    let dir = TempDir::new().unwrap();
    let session = Session::open(dir.path()).unwrap();
    assert_eq!(
        session.search(SearchMode::Keyword, "x", false, None),
        Err(Error::NoData)
    );
}
