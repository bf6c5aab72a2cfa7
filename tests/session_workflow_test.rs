// ABOUTME: Integration tests for the guided workout session orchestrator
// ABOUTME: Covers phase guards, resume after restart, finishing, rest handling, templates and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{start_session, TestEnv, TEST_REST_SECONDS};
use liftlog::constants::session_keys;
use liftlog::errors::ErrorCode;
use liftlog::feedback::HapticPulse;
use liftlog::models::{
    CompletedWorkout, MuscleGroup, PlannedExercise, SessionPhase, SetUpdate, WorkoutPlan,
};
use liftlog::store::{KeyValueStoreExt, Partition, RecordStoreExt};

fn entry(weight: f64, reps: u32) -> SetUpdate {
    SetUpdate {
        weight: Some(weight),
        reps: Some(reps),
        ..SetUpdate::default()
    }
}

#[tokio::test]
async fn test_fresh_session_starts_in_setup() {
    let env = TestEnv::new();
    let session = env.session().await;
    assert_eq!(session.phase(), SessionPhase::Setup);
    assert!(session.muscles().is_empty());
    assert!(session.workout_history().is_empty());
}

#[tokio::test]
async fn test_selection_requires_a_muscle_group() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    assert!(!session.proceed_to_selection());
    assert_eq!(session.phase(), SessionPhase::Setup);

    session.toggle_muscle(MuscleGroup::Back);
    session.toggle_muscle(MuscleGroup::Biceps);
    session.toggle_muscle(MuscleGroup::Back);
    assert_eq!(session.muscles(), &[MuscleGroup::Biceps]);
    assert!(session.proceed_to_selection());
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert_eq!(session.direction(), 1);
}

#[tokio::test]
async fn test_start_without_exercises_is_ignored() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    session.set_muscles([MuscleGroup::Chest]);
    session.proceed_to_selection();
    session.start_workout().await;
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert!(!session.clock().lock().await.workout_active());
}

#[tokio::test]
async fn test_active_without_exercises_falls_back_to_selection_on_reload() {
    let env = TestEnv::new();
    env.store.set_json(session_keys::PHASE, &SessionPhase::Active).unwrap();

    let session = env.session().await;
    assert_eq!(session.phase(), SessionPhase::Selection);
}

#[tokio::test]
async fn test_summary_is_not_restored_after_reload() {
    let env = TestEnv::new();
    {
        let mut session = env.session().await;
        start_session(&mut session, &["Bench Press"]).await;
        session.finish_workout().await.unwrap();
        assert_eq!(session.phase(), SessionPhase::Summary);
    }
    env.store.set_json(session_keys::PHASE, &SessionPhase::Summary).unwrap();

    let session = env.session().await;
    assert_eq!(session.phase(), SessionPhase::Setup);
    assert!(session.completed_workout().is_none());
    assert_eq!(session.workout_history().len(), 1);
}

#[tokio::test]
async fn test_active_session_resumes_after_restart() {
    let env = TestEnv::new();
    {
        let mut session = env.session().await;
        start_session(&mut session, &["Bench Press", "Dips"]).await;
        assert!(session.update_set(0, 0, &entry(80.0, 8)));
        session.add_set(0).unwrap();
        session.toggle_set_complete(0, 0).await.unwrap();
        let clock = session.clock();
        let mut clock = clock.lock().await;
        for _ in 0..42 {
            clock.tick();
        }
    }

    let session = env.session().await;
    assert_eq!(session.phase(), SessionPhase::Active);
    assert_eq!(session.muscles(), &[MuscleGroup::Chest]);
    assert_eq!(session.selected_exercises(), &["Bench Press", "Dips"]);

    let bench = &session.active_exercises()[0];
    assert_eq!(bench.sets.len(), 2);
    assert!(bench.sets[0].completed);
    assert!((bench.sets[1].weight - 80.0).abs() < f64::EPSILON);
    assert_eq!(bench.sets[1].reps, 8);
    assert!(!bench.sets[1].completed);

    let clock = session.clock();
    let clock = clock.lock().await;
    assert_eq!(clock.workout_elapsed(), 42);
    assert!(clock.workout_active());
    assert_eq!(
        clock.rest_remaining(),
        Some(u64::from(TEST_REST_SECONDS) - 42)
    );
}

#[tokio::test]
async fn test_back_and_forth_keeps_entered_sets_and_elapsed_time() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Squat"]).await;
    session.update_set(0, 0, &entry(100.0, 5));
    session.clock().lock().await.tick();

    session.go_back().await;
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert_eq!(session.direction(), -1);
    assert!(!session.clock().lock().await.workout_active());

    session.toggle_exercise("Lunges");
    session.start_workout().await;

    assert_eq!(session.phase(), SessionPhase::Active);
    let exercises = session.active_exercises();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].name, "Squat");
    assert!((exercises[0].sets[0].weight - 100.0).abs() < f64::EPSILON);
    assert_eq!(exercises[1].name, "Lunges");
    assert_eq!(exercises[1].sets.len(), 1);
    assert!(exercises[1].sets[0].is_untouched());

    let clock = session.clock();
    let clock = clock.lock().await;
    assert_eq!(clock.workout_elapsed(), 1);
    assert!(clock.workout_active());
}

#[tokio::test]
async fn test_finish_counts_only_completed_sets() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Bench Press"]).await;
    session.update_set(0, 0, &entry(80.0, 8));
    session.add_set(0);
    session.add_set(0);
    session.update_set(0, 2, &entry(70.0, 10));
    session.toggle_set_complete(0, 0).await;
    session.toggle_set_complete(0, 1).await;

    let workout = session.finish_workout().await.unwrap().clone();
    assert!((workout.total_volume - 1280.0).abs() < f64::EPSILON);
    assert_eq!(workout.completed_set_count(), 2);
    assert_eq!(workout.name.as_deref(), Some("Chest"));
}

#[tokio::test]
async fn test_finish_commits_and_clears_session() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Bench Press"]).await;
    session.update_set(0, 0, &entry(60.0, 10));
    session.toggle_set_complete(0, 0).await;
    for _ in 0..5 {
        session.clock().lock().await.tick();
    }

    let workout = session.finish_workout().await.unwrap().clone();
    assert_eq!(workout.duration_seconds, 5);
    assert_eq!(session.phase(), SessionPhase::Summary);
    assert_eq!(session.completed_workout(), Some(&workout));
    assert_eq!(session.workout_history()[0], workout);
    assert!(session.muscles().is_empty());
    assert!(session.selected_exercises().is_empty());
    assert!(session.active_exercises().is_empty());

    for key in session_keys::SESSION_SCOPED {
        assert!(!env.store.contains_key(key), "{key} should be cleared");
    }

    let stored: Option<CompletedWorkout> = env
        .store
        .get_json(Partition::Workouts, &workout.id.to_string())
        .await
        .unwrap();
    assert_eq!(stored, Some(workout));

    let history = session.history().get_exercise_history("Bench Press").unwrap();
    assert_eq!(history.personal_record.max_reps, 10);

    {
        let clock = session.clock();
        let clock = clock.lock().await;
        assert_eq!(clock.workout_elapsed(), 0);
        assert!(!clock.workout_active());
        assert_eq!(clock.rest_remaining(), None);
    }
    assert_eq!(env.feedback.haptics().last(), Some(&HapticPulse::Success));

    assert!(session.finish_workout().await.is_none());
}

#[tokio::test]
async fn test_leaving_summary_resets_to_setup() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Plank"]).await;
    session.finish_workout().await;

    session.go_back().await;
    assert_eq!(session.phase(), SessionPhase::Setup);
    assert!(session.completed_workout().is_none());
}

#[tokio::test]
async fn test_completing_sets_starts_rest_once() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Row"]).await;
    session.add_set(0);

    assert_eq!(session.toggle_set_complete(0, 0).await, Some(true));
    let rest = u64::from(TEST_REST_SECONDS);
    assert_eq!(session.clock().lock().await.rest_remaining(), Some(rest));

    session.clock().lock().await.tick();
    assert_eq!(session.toggle_set_complete(0, 1).await, Some(true));
    assert_eq!(session.clock().lock().await.rest_remaining(), Some(rest - 1));

    assert_eq!(session.toggle_set_complete(0, 1).await, Some(false));
    assert_eq!(session.clock().lock().await.rest_remaining(), None);
    assert_eq!(
        env.feedback.haptics(),
        vec![HapticPulse::Medium, HapticPulse::Medium]
    );
}

#[tokio::test]
async fn test_toggling_missing_set_is_a_no_op() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Row"]).await;
    assert!(session.remove_set(0, 0));

    assert_eq!(session.toggle_set_complete(0, 0).await, None);
    assert_eq!(session.toggle_set_complete(3, 0).await, None);
    assert_eq!(session.clock().lock().await.rest_remaining(), None);
    assert!(!session.update_set(0, 0, &entry(10.0, 1)));
}

#[tokio::test]
async fn test_suggestion_for_removed_exercise_is_dropped() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Bench Press", "Dips"]).await;
    session.update_set(0, 0, &entry(80.0, 8));
    session.toggle_set_complete(0, 0).await;
    session.finish_workout().await;
    session.reset_session().await;

    start_session(&mut session, &["Bench Press", "Dips"]).await;
    let suggestion = session.suggestion_for("Bench Press").unwrap();
    let removed = session.remove_exercise(0).unwrap();
    assert_eq!(removed.name, "Bench Press");
    assert_eq!(session.selected_exercises(), &["Dips"]);

    assert!(!session.apply_suggestion("Bench Press", &suggestion));
    assert_eq!(session.active_exercises().len(), 1);
    assert_eq!(session.active_exercises()[0].name, "Dips");
}

#[tokio::test]
async fn test_suggestion_fills_untouched_sets_only() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Bench Press"]).await;
    session.update_set(0, 0, &entry(80.0, 8));
    session.add_set(0);
    session.toggle_set_complete(0, 0).await;
    session.toggle_set_complete(0, 1).await;
    session.finish_workout().await;
    session.reset_session().await;

    start_session(&mut session, &["Bench Press"]).await;
    let suggestion = session.suggestion_for("Bench Press").unwrap();
    assert!(session.apply_suggestion("Bench Press", &suggestion));

    let sets = &session.active_exercises()[0].sets;
    assert_eq!(sets.len(), 2);
    for set in sets {
        assert!((set.weight - 82.5).abs() < f64::EPSILON);
        assert_eq!(set.reps, 8);
        assert!(!set.completed);
    }

    session.update_set(0, 0, &entry(85.0, 5));
    assert!(session.apply_suggestion("Bench Press", &suggestion));
    assert!((session.active_exercises()[0].sets[0].weight - 85.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_removing_last_exercise_returns_to_selection() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Curl"]).await;
    session.remove_exercise(0);
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert!(session.remove_exercise(0).is_none());
}

#[tokio::test]
async fn test_reordering_exercises() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["A", "B", "C"]).await;
    assert!(session.move_exercise(2, 0));
    let names: Vec<&str> = session
        .active_exercises()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["C", "A", "B"]);
    assert!(!session.move_exercise(0, 3));
    assert!(session.add_exercise("D"));
    assert!(!session.add_exercise("D"));
}

#[tokio::test]
async fn test_reset_session_discards_everything_scoped() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Squat"]).await;
    session.toggle_set_complete(0, 0).await;

    session.reset_session().await;
    assert_eq!(session.phase(), SessionPhase::Setup);
    assert!(session.active_exercises().is_empty());
    let clock = session.clock();
    let clock = clock.lock().await;
    assert!(!clock.workout_active());
    assert_eq!(clock.rest_remaining(), None);
    assert!(session.workout_history().is_empty());
}

#[tokio::test]
async fn test_deleting_a_workout() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    start_session(&mut session, &["Squat"]).await;
    let id = session.finish_workout().await.unwrap().id;

    assert!(session.delete_workout(id).await);
    assert!(!session.delete_workout(id).await);
    assert!(session.workout_history().is_empty());
    assert!(env.session().await.workout_history().is_empty());
}

#[tokio::test]
async fn test_history_is_newest_first_across_restarts() {
    let env = TestEnv::new();
    let mut first_id = None;
    for name in ["Squat", "Bench Press"] {
        let mut session = env.session().await;
        start_session(&mut session, &[name]).await;
        let id = session.finish_workout().await.unwrap().id;
        first_id.get_or_insert(id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let session = env.session().await;
    let history = session.workout_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].id, first_id.unwrap());
    assert_eq!(session.stats().total_workouts, 2);
}

#[tokio::test]
async fn test_templates_round_trip_through_selection() {
    let env = TestEnv::new();
    let mut session = env.session().await;

    let err = session.save_template("Push").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    session.set_muscles([MuscleGroup::Chest, MuscleGroup::Triceps]);
    session.proceed_to_selection();
    session.set_selected_exercises(["Bench Press".to_owned(), "Dips".to_owned()]);
    let err = session.save_template("   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let template = session.save_template("Push day").await.unwrap();
    session.reset_session().await;

    let listed = session.templates().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Push day");

    session.load_template(template.id).await.unwrap();
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert_eq!(
        session.muscles(),
        &[MuscleGroup::Chest, MuscleGroup::Triceps]
    );
    assert_eq!(session.selected_exercises(), &["Bench Press", "Dips"]);

    assert!(session.delete_template(template.id).await.unwrap());
    let err = session.load_template(template.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_applying_a_plan_prepares_the_workout() {
    let env = TestEnv::new();
    let mut session = env.session().await;
    let plan = WorkoutPlan {
        title: "Pull".to_owned(),
        description: "Back focus".to_owned(),
        estimated_duration: "45 min".to_owned(),
        exercises: vec![
            PlannedExercise {
                name: "Pull Ups".to_owned(),
                sets: 3,
                reps: "8-10".to_owned(),
                notes: String::new(),
            },
            PlannedExercise {
                name: "Face Pulls".to_owned(),
                sets: 0,
                reps: "15".to_owned(),
                notes: "Light".to_owned(),
            },
        ],
    };

    session.apply_plan(&plan);
    assert_eq!(session.phase(), SessionPhase::Selection);
    assert_eq!(session.selected_exercises(), &["Pull Ups", "Face Pulls"]);

    session.start_workout().await;
    let exercises = session.active_exercises();
    assert_eq!(exercises[0].sets.len(), 3);
    assert_eq!(exercises[0].sets[0].reps, 8);
    assert_eq!(exercises[1].sets.len(), 1);
    assert_eq!(exercises[1].sets[0].reps, 15);
}
