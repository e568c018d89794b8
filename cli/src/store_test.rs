use super::*;

fn temp_store() -> FileTokenStore {
    let dir = std::env::temp_dir().join(format!("content-cli-{}", uuid::Uuid::new_v4()));
    FileTokenStore::new(dir.join("token"))
}

#[test]
fn missing_file_means_no_token() {
    assert_eq!(temp_store().load(), None);
}

#[test]
fn save_creates_parent_and_round_trips() {
    let store = temp_store();
    store.save("abc").expect("save");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear().expect("clear");
}

#[test]
fn trailing_newline_is_ignored() {
    let store = temp_store();
    store.save("abc\n").expect("save");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear().expect("clear");
}

#[test]
fn surrounding_whitespace_is_preserved() {
    let store = temp_store();
    store.save("  padded  ").expect("save");
    assert_eq!(store.load().as_deref(), Some("  padded  "));
    store.clear().expect("clear");
}

#[test]
fn crlf_line_ending_is_ignored() {
    let store = temp_store();
    store.save("abc\r\n").expect("save");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear().expect("clear");
}

#[test]
fn empty_or_newline_only_file_counts_as_no_token() {
    let store = temp_store();
    store.save("").expect("save empty");
    assert_eq!(store.load(), None);
    store.save("\n").expect("save newline");
    assert_eq!(store.load(), None);
    store.clear().expect("clear");
}

#[test]
fn clear_removes_file_and_tolerates_absence() {
    let store = temp_store();
    store.save("abc").expect("save");
    store.clear().expect("first clear");
    assert!(!store.path().exists());
    store.clear().expect("second clear");
}
