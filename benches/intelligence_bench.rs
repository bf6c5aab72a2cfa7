// ABOUTME: Criterion benchmarks for workout analytics and session commit paths
// ABOUTME: Measures volume, overload suggestions, statistics and finishing a workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! Criterion benchmarks for workout analytics.
//!
//! Measures the per-finish work (volume, record merge, history upsert) and the
//! aggregate statistics computed when history is displayed.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlog::config::TrackerConfig;
use liftlog::models::{ActiveExercise, CompletedWorkout, MuscleGroup, SetUpdate, WorkoutSet};
use liftlog::session::WorkoutSession;
use liftlog_intelligence::{current_streak_days, total_volume, OverloadPolicy, WorkoutStats};
use uuid::Uuid;

const EXERCISE_NAMES: [&str; 6] = [
    "Bench Press",
    "Squat",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
    "Pull Ups",
];

#[allow(clippy::cast_precision_loss)]
fn generate_exercises(sets_per_exercise: usize) -> Vec<ActiveExercise> {
    EXERCISE_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| ActiveExercise {
            name: (*name).to_owned(),
            sets: (0..sets_per_exercise)
                .map(|set_index| {
                    let mut set = WorkoutSet::with_target(
                        40.0 + (index * 10) as f64,
                        6 + ((index + set_index) % 6) as u32,
                    );
                    set.completed = set_index % 4 != 3;
                    set
                })
                .collect(),
        })
        .collect()
}

#[allow(clippy::cast_possible_wrap)]
fn generate_workouts(count: usize) -> Vec<CompletedWorkout> {
    let now = Utc::now();
    (0..count)
        .map(|index| {
            let completed_at = now - Duration::days(index as i64);
            let exercises = generate_exercises(3 + index % 3);
            CompletedWorkout {
                id: Uuid::new_v4(),
                date: completed_at.format("%Y-%m-%d %H:%M").to_string(),
                completed_at,
                name: Some("Benchmark".to_owned()),
                duration_seconds: 2400 + (index as u64 % 900),
                total_volume: total_volume(&exercises),
                exercises,
            }
        })
        .collect()
}

fn bench_total_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume");
    for sets in [3, 10, 50] {
        let exercises = generate_exercises(sets);
        group.throughput(Throughput::Elements((sets * EXERCISE_NAMES.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("total_volume", sets),
            &exercises,
            |b, exercises| b.iter(|| total_volume(black_box(exercises))),
        );
    }
    group.finish();
}

fn bench_overload_suggestion(c: &mut Criterion) {
    let policy = OverloadPolicy::default();
    let steady: Vec<WorkoutSet> = (0..5)
        .map(|_| {
            let mut set = WorkoutSet::with_target(80.0, 8);
            set.completed = true;
            set
        })
        .collect();
    let mixed = generate_exercises(5).remove(2).sets;

    let mut group = c.benchmark_group("overload");
    group.bench_function("steady_sets", |b| {
        b.iter(|| policy.suggest(black_box(&steady)));
    });
    group.bench_function("mixed_sets", |b| {
        b.iter(|| policy.suggest(black_box(&mixed)));
    });
    group.finish();
}

fn bench_workout_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    for count in [10, 100, 500] {
        let workouts = generate_workouts(count);
        let today = Utc::now().date_naive();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("from_workouts", count),
            &workouts,
            |b, workouts| b.iter(|| WorkoutStats::from_workouts(black_box(workouts))),
        );
        group.bench_with_input(
            BenchmarkId::new("current_streak", count),
            &workouts,
            |b, workouts| b.iter(|| current_streak_days(black_box(workouts), today)),
        );
    }
    group.finish();
}

fn bench_finish_workout(c: &mut Criterion) {
    let Ok(runtime) = tokio::runtime::Runtime::new() else {
        return;
    };
    let config = &TrackerConfig::in_memory();
    let update = &SetUpdate {
        weight: Some(60.0),
        reps: Some(10),
        ..SetUpdate::default()
    };

    c.bench_function("session/finish_workout", |b| {
        b.to_async(&runtime).iter(|| async move {
            let Ok(mut session) = WorkoutSession::open(config).await else {
                return;
            };
            session.set_muscles([MuscleGroup::Chest, MuscleGroup::Back]);
            session.proceed_to_selection();
            session.set_selected_exercises(EXERCISE_NAMES.iter().map(|n| (*n).to_owned()));
            session.start_workout().await;
            for index in 0..EXERCISE_NAMES.len() {
                session.update_set(index, 0, update);
                session.add_set(index);
                session.toggle_set_complete(index, 0).await;
            }
            black_box(session.finish_workout().await.map(|w| w.total_volume));
        });
    });
}

criterion_group!(
    benches,
    bench_total_volume,
    bench_overload_suggestion,
    bench_workout_stats,
    bench_finish_workout
);
criterion_main!(benches);
