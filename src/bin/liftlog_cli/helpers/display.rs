// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
// ABOUTME: Output formatting helpers for the liftlog CLI
// ABOUTME: Renders session state, workouts, suggestions and clock readouts consistently

use std::io::{self, Write};

use liftlog::clock::ClockState;
use liftlog::models::{ActiveExercise, ClockMode, CompletedWorkout, WorkoutPlan};
use liftlog_intelligence::{OverloadSuggestion, WorkoutStats};

/// `mm:ss`, or `h:mm:ss` past an hour
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Numbered exercise list with every set
pub fn display_exercises(exercises: &[ActiveExercise]) {
    for (index, exercise) in exercises.iter().enumerate() {
        println!(
            "{}. {} ({}/{} sets done)",
            index + 1,
            exercise.name,
            exercise.completed_sets(),
            exercise.sets.len()
        );
        for (set_index, set) in exercise.sets.iter().enumerate() {
            let mark = if set.completed { "x" } else { " " };
            println!(
                "   [{mark}] set {}: {} kg x {}",
                set_index + 1,
                set.weight,
                set.reps
            );
        }
    }
}

/// Clock fields relevant to the session
pub fn display_clock(state: &ClockState) {
    println!(
        "Workout clock: {}{}",
        format_seconds(state.workout_elapsed),
        running(state.workout_active)
    );
    if let Some(rest) = state.rest_remaining {
        println!("Rest: {} remaining", format_seconds(rest));
    }
    match state.mode {
        ClockMode::Stopwatch if state.timer_active || state.duration > 0 => {
            println!(
                "Stopwatch: {}{}",
                format_seconds(state.duration),
                running(state.timer_active)
            );
        }
        ClockMode::Timer => {
            if let Some(remaining) = state.countdown_remaining {
                println!(
                    "Timer: {} remaining{}",
                    format_seconds(remaining),
                    running(state.timer_active)
                );
            }
        }
        ClockMode::Stopwatch => {}
    }
}

const fn running(active: bool) -> &'static str {
    if active {
        " (running)"
    } else {
        ""
    }
}

/// One-line clock readout, redrawn in place
pub fn redraw_line(line: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\r{line:<60}");
    let _ = stdout.flush();
}

/// Summary of a completed workout
pub fn display_workout(workout: &CompletedWorkout) {
    println!(
        "{} - {}",
        workout.date,
        workout.name.as_deref().unwrap_or("Workout")
    );
    println!("   Id: {}", workout.id);
    println!("   Duration: {}", format_seconds(workout.duration_seconds));
    println!("   Completed sets: {}", workout.completed_set_count());
    println!("   Total volume: {:.1} kg", workout.total_volume);
    for exercise in &workout.exercises {
        println!("   - {} ({} sets done)", exercise.name, exercise.completed_sets());
    }
}

/// Aggregate statistics block
pub fn display_stats(stats: &WorkoutStats, streak_days: u32) {
    println!("{}", "=".repeat(50));
    println!("Workouts: {}", stats.total_workouts);
    println!("Total volume: {:.1} kg", stats.total_volume);
    println!(
        "Average duration: {}",
        format_seconds(stats.average_duration_seconds)
    );
    println!("Completed sets: {}", stats.total_completed_sets);
    if let Some(exercise) = &stats.most_frequent_exercise {
        println!("Most frequent exercise: {exercise}");
    }
    println!("Current streak: {streak_days} day(s)");
}

/// Suggested sets for an exercise
pub fn display_suggestion(exercise: &str, suggestion: &OverloadSuggestion) {
    println!("Next session for {exercise} ({:?}):", suggestion.strategy);
    for (index, set) in suggestion.suggested_sets.iter().enumerate() {
        println!("   set {}: {} kg x {}", index + 1, set.weight, set.reps);
    }
}

/// Generated plan
pub fn display_plan(plan: &WorkoutPlan) {
    println!("{} ({})", plan.title, plan.estimated_duration);
    println!("{}", plan.description);
    for exercise in &plan.exercises {
        println!("   - {}: {} x {}", exercise.name, exercise.sets, exercise.reps);
        if !exercise.notes.is_empty() {
            println!("     {}", exercise.notes);
        }
    }
}
