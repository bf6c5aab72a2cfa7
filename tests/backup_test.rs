// ABOUTME: Integration tests for backup export and validated import
// ABOUTME: Moves data between independent stores and checks rejected documents change nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{start_session, TestEnv};
use liftlog::backup;
use liftlog::constants::backup::MAX_WORKOUT_DURATION_SECONDS;
use liftlog::models::SetUpdate;
use liftlog::session::WorkoutSession;

async fn session_with_one_workout(env: &TestEnv) -> WorkoutSession {
    let mut session = env.session().await;
    start_session(&mut session, &["Bench Press"]).await;
    session.update_set(
        0,
        0,
        &SetUpdate {
            weight: Some(80.0),
            reps: Some(8),
            ..SetUpdate::default()
        },
    );
    session.toggle_set_complete(0, 0).await;
    session.finish_workout().await.unwrap();
    session.reset_session().await;
    session
}

#[tokio::test]
async fn test_export_then_import_into_empty_store() {
    let source_env = TestEnv::new();
    let mut source = session_with_one_workout(&source_env).await;
    source.set_selected_exercises(["Bench Press".to_owned()]);
    source.save_template("Push").await.unwrap();

    let json = backup::to_json(&backup::export(&source).await.unwrap()).unwrap();

    let target_env = TestEnv::new();
    let mut target = target_env.session().await;
    let report = backup::import(&mut target, &json).await;
    assert!(report.success, "{}", report.message);

    assert_eq!(target.workout_history(), source.workout_history());
    assert!(target.history().get_exercise_history("Bench Press").is_some());
    assert_eq!(target.templates().await.unwrap().len(), 1);

    let reopened = target_env.session().await;
    assert_eq!(reopened.workout_history().len(), 1);
    assert!(reopened.suggestion_for("Bench Press").is_some());
}

#[tokio::test]
async fn test_importing_twice_does_not_duplicate_workouts() {
    let env = TestEnv::new();
    let mut session = session_with_one_workout(&env).await;
    let json = backup::to_json(&backup::export(&session).await.unwrap()).unwrap();

    let report = backup::import(&mut session, &json).await;
    assert!(report.success);
    assert_eq!(session.workout_history().len(), 1);
}

#[tokio::test]
async fn test_corrupt_backup_changes_nothing() {
    let env = TestEnv::new();
    let mut session = session_with_one_workout(&env).await;
    let before = session.workout_history().to_vec();

    for document in [
        "not json",
        r#"{"version": 99, "exportedAt": "2025-01-01T00:00:00Z", "workouts": [], "exerciseHistory": []}"#,
    ] {
        let report = backup::import(&mut session, document).await;
        assert!(!report.success);
        assert!(!report.message.is_empty());
    }

    let mut bundle = backup::export(&session).await.unwrap();
    bundle.workouts[0].exercises[0].sets[0].weight = -5.0;
    bundle.workouts[0].id = uuid::Uuid::new_v4();
    let report = backup::import(&mut session, &backup::to_json(&bundle).unwrap()).await;
    assert!(!report.success);

    assert_eq!(session.workout_history(), before.as_slice());
    assert_eq!(env.session().await.workout_history().len(), 1);
}

#[tokio::test]
async fn test_implausible_durations_are_rejected_and_stats_stay_sane() {
    let env = TestEnv::new();
    let mut session = session_with_one_workout(&env).await;

    let mut bundle = backup::export(&session).await.unwrap();
    let mut copy = bundle.workouts[0].clone();
    bundle.workouts[0].id = uuid::Uuid::new_v4();
    bundle.workouts[0].duration_seconds = u64::MAX / 2 + 1;
    copy.id = uuid::Uuid::new_v4();
    copy.duration_seconds = u64::MAX / 2 + 1;
    bundle.workouts.push(copy);

    let report = backup::import(&mut session, &backup::to_json(&bundle).unwrap()).await;
    assert!(!report.success);
    assert!(report.message.contains("seconds"));

    let stats = session.stats();
    assert_eq!(stats.total_workouts, 1);
    assert!(stats.total_duration_seconds <= MAX_WORKOUT_DURATION_SECONDS);
}
