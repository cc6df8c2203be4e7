use tempo::profiler::entry::TaskState;
use tempo::{ProfileRecorder, ProfilerConfig, ProfilerError};

#[test]
fn test_duplicate_start_rejected() {
    let mut recorder = ProfileRecorder::new(ProfilerConfig::default());

    recorder.start(7, "compile").expect("first start should succeed");

    let err = recorder
        .start(7, "compile-again")
        .expect_err("second start of the same id must fail");
    assert!(
        matches!(err, ProfilerError::DuplicateTask(7)),
        "Expected DuplicateTask(7), got {:?}",
        err
    );

    // The original entry must be untouched by the failed call.
    let summary = recorder.summary();
    assert_eq!(summary.total, 1, "Failed start should not add an entry");
    assert_eq!(summary.running, 1);
}

#[test]
fn test_stop_without_start_rejected() {
    let mut recorder = ProfileRecorder::new(ProfilerConfig::default());

    let err = recorder
        .stop(99, true)
        .expect_err("stop of an unknown id must fail");
    assert!(
        matches!(err, ProfilerError::UnknownTask(99)),
        "Expected UnknownTask(99), got {:?}",
        err
    );
}

#[test]
fn test_stop_sets_state_per_success_flag() {
    let mut recorder = ProfileRecorder::new(ProfilerConfig::default());

    recorder.start(1, "build").unwrap();
    recorder.start(2, "test").unwrap();
    recorder.start(3, "lint").unwrap();

    recorder.stop(1, true).unwrap();
    recorder.stop(2, false).unwrap();
    // 3 deliberately left running

    let summary = recorder.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 1, "Should count the successful stop");
    assert_eq!(summary.failed, 1, "Should count the failed stop");
    assert_eq!(summary.running, 1, "Unstopped task should still be running");
}

#[test]
fn test_clear_allows_id_reuse() {
    let mut recorder = ProfileRecorder::new(ProfilerConfig::default());

    recorder.start(1, "build").unwrap();
    recorder.stop(1, true).unwrap();

    assert!(
        recorder.start(1, "build").is_err(),
        "Id stays claimed after stop"
    );

    recorder.clear();
    recorder
        .start(1, "build")
        .expect("clear should release all ids");

    assert_eq!(recorder.summary().total, 1);
}

#[test]
fn test_error_messages_name_the_task() {
    assert_eq!(
        ProfilerError::DuplicateTask(5).to_string(),
        "task 5 was already started"
    );
    assert_eq!(
        ProfilerError::UnknownTask(5).to_string(),
        "task 5 was never started"
    );
}

#[test]
fn test_state_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TaskState::Succeeded).unwrap(),
        "\"succeeded\""
    );
    assert_eq!(
        serde_json::to_string(&TaskState::Running).unwrap(),
        "\"running\""
    );
    assert_eq!(
        serde_json::to_string(&TaskState::Failed).unwrap(),
        "\"failed\""
    );
}
