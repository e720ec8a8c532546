use stocksim::history_store::HistoryStore;
use stocksim::model::history::PriceHistory;

#[test]
/// Verifies the first-run case: with no record on disk, load seeds a
/// one-element history at the default price instead of failing.
fn missing_record_returns_seeded_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    let history = store.load("League of Legends").expect("load should succeed");
    assert_eq!(history.prices(), &[0.5]);
    assert_eq!(history.days_open(), 0);
}

#[test]
/// Verifies save then load returns the identical series, bit for bit,
/// including a zero entry.
fn save_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);
    let history = PriceHistory::from_prices(vec![0.5131, 0.498, 0.5, 0.0, 0.25]);

    store.save("Rust", &history).expect("save should succeed");
    let loaded = store.load("Rust").expect("load should succeed");

    assert_eq!(loaded, history);
}

#[test]
/// Verifies a save replaces the whole record: no entries from a longer
/// previous record survive.
fn save_overwrites_whole_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    let long = PriceHistory::from_prices(vec![0.4, 0.41, 0.42, 0.43, 0.44]);
    store.save("Hearthstone", &long).expect("save should succeed");
    let short = PriceHistory::from_prices(vec![0.9]);
    store.save("Hearthstone", &short).expect("save should succeed");

    let loaded = store.load("Hearthstone").expect("load should succeed");
    assert_eq!(loaded, short);
}

#[test]
/// Verifies records are keyed by asset display name and do not alias.
fn records_are_per_asset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    assert!(store.data_path("Rust").ends_with("Rust.data"));

    store
        .save("Rust", &PriceHistory::from_prices(vec![0.1]))
        .expect("save should succeed");
    store
        .save("Hearthstone", &PriceHistory::from_prices(vec![0.2]))
        .expect("save should succeed");

    assert_eq!(store.load("Rust").expect("load").prices(), &[0.1]);
    assert_eq!(store.load("Hearthstone").expect("load").prices(), &[0.2]);
}

#[test]
/// Verifies the temp file used for the atomic replace is gone after a
/// successful save.
fn save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    store
        .save("Rust", &PriceHistory::from_prices(vec![0.5, 0.4]))
        .expect("save should succeed");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("Rust.data")]);
}

#[test]
/// Verifies an undecodable record surfaces an error naming the asset
/// rather than silently falling back to the default history.
fn corrupt_record_errors_with_asset_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    std::fs::write(store.data_path("Rust"), [0xff, 0x01]).expect("write garbage");

    let err = store.load("Rust").expect_err("load should fail");
    assert!(err.to_string().contains("'Rust'"), "got: {err}");
}

#[test]
/// Verifies a structurally valid but empty record is rejected: the
/// non-empty history invariant must hold for every loaded record.
fn empty_record_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    let empty = bincode::serialize(&Vec::<f64>::new()).expect("encode");
    std::fs::write(store.data_path("Rust"), empty).expect("write record");

    let err = store.load("Rust").expect_err("load should fail");
    assert!(err.to_string().contains("empty"), "got: {err}");
}

#[test]
/// Verifies negative prices in a record are rejected on load.
fn negative_price_record_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path(), 0.5);

    let bad = bincode::serialize(&vec![0.5, -0.1]).expect("encode");
    std::fs::write(store.data_path("Rust"), bad).expect("write record");

    let err = store.load("Rust").expect_err("load should fail");
    assert!(err.to_string().contains("'Rust'"), "got: {err}");
}
