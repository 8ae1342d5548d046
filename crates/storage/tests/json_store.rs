use std::fs;

use guide_core::model::{ProgressState, QuestionId};
use guide_core::time::fixed_now;
use storage::Store;

#[test]
fn file_store_round_trips_progress_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::json_file(dir.path());

    let mut state = ProgressState::empty(fixed_now());
    state.record_answer(QuestionId::new(1), 1, 1, fixed_now());
    state.record_answer(QuestionId::new(2), 0, 1, fixed_now());

    store.set("quiz-progress", &state).unwrap();
    let back: ProgressState = store.get("quiz-progress").unwrap().unwrap();
    assert_eq!(back, state);
    assert_eq!(back.total_correct(), 1);
    assert_eq!(back.total_incorrect(), 1);
}

#[test]
fn read_after_write_sees_latest_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::json_file(dir.path());

    store.set("entry", &1u32).unwrap();
    store.set("entry", &2u32).unwrap();
    assert_eq!(store.get_or("entry", 0u32), 2);
}

#[test]
fn missing_profile_directory_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::json_file(dir.path().join("never-created"));

    let value: Option<u32> = store.get("entry").unwrap();
    assert_eq!(value, None);
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quiz-progress.json"), "{\"answeredQuestions\":").unwrap();

    let store = Store::json_file(dir.path());
    let fallback = store.get_or("quiz-progress", ProgressState::empty(fixed_now()));
    assert_eq!(fallback.answered_count(), 0);
    assert_eq!(fallback.total_correct(), 0);
}

#[test]
fn mismatched_shape_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quiz-progress.json"), "[1, 2, 3]").unwrap();

    let store = Store::json_file(dir.path());
    let fallback = store.get_or("quiz-progress", ProgressState::empty(fixed_now()));
    assert_eq!(fallback.answered_count(), 0);
}

#[test]
fn remove_deletes_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::json_file(dir.path());

    store.set("favorites", &vec![1u32, 2]).unwrap();
    assert!(dir.path().join("favorites.json").exists());

    store.remove("favorites").unwrap();
    assert!(!dir.path().join("favorites.json").exists());
    let value: Option<Vec<u32>> = store.get("favorites").unwrap();
    assert_eq!(value, None);
}
