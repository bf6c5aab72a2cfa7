// ABOUTME: Session workflow commands for the liftlog CLI
// ABOUTME: Handles selection, start, set editing, finish, back and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use anyhow::{bail, Result};
use liftlog::catalog;
use liftlog::models::{MuscleGroup, SessionPhase, SetUpdate};
use liftlog::session::WorkoutSession;
use tracing::info;

use crate::helpers::display::{display_clock, display_exercises, display_workout};

/// Convert a 1-based position from the command line
fn position(value: usize, what: &str) -> Result<usize> {
    match value.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("{what} numbers start at 1"),
    }
}

/// Print everything the user would see on screen
pub async fn status(session: &WorkoutSession) {
    let localizer = session.localizer();
    println!("Phase: {}", localizer.phase(session.phase()));

    if !session.muscles().is_empty() {
        let labels: Vec<&str> = session
            .muscles()
            .iter()
            .map(|group| localizer.muscle(*group))
            .collect();
        println!("Muscles: {}", labels.join(", "));
    }

    match session.phase() {
        SessionPhase::Setup => println!("Next: liftlog select muscles <group>..."),
        SessionPhase::Selection => {
            if session.selected_exercises().is_empty() {
                println!("Next: liftlog select exercises <name>... (see `liftlog catalog`)");
            } else {
                println!("Selected: {}", session.selected_exercises().join(", "));
                println!("Next: liftlog start");
            }
        }
        SessionPhase::Active => display_exercises(session.active_exercises()),
        SessionPhase::Summary => {
            if let Some(workout) = session.completed_workout() {
                display_workout(workout);
            }
        }
    }

    let clock = session.clock();
    let state = clock.lock().await.state().clone();
    display_clock(&state);
}

/// Replace the muscle selection and advance to exercise selection
pub fn select_muscles(session: &mut WorkoutSession, muscles: Vec<MuscleGroup>) {
    session.set_muscles(muscles);
    session.proceed_to_selection();
    let localizer = session.localizer();
    println!("Selected {}", localizer.workout_name(session.muscles()));
    for name in catalog::exercises_for_all(session.muscles()) {
        println!("   - {name}");
    }
}

/// Replace the exercise selection, normalizing catalog names
pub fn select_exercises(session: &mut WorkoutSession, names: Vec<String>) {
    let names: Vec<String> = names
        .into_iter()
        .map(|name| catalog::canonical_name(&name).map_or(name, str::to_owned))
        .collect();
    for name in names.iter().filter(|name| !catalog::is_known(name)) {
        println!("Note: '{name}' is not in the catalog; adding it as a custom exercise");
    }
    session.set_selected_exercises(names);
    if session.phase() == SessionPhase::Setup {
        session.set_phase(SessionPhase::Selection);
    }
    println!("Selected: {}", session.selected_exercises().join(", "));
}

/// Catalog exercises for the given groups, or the current selection
pub fn catalog(session: &WorkoutSession, muscles: &[MuscleGroup]) {
    let groups = if muscles.is_empty() {
        session.muscles()
    } else {
        muscles
    };
    if groups.is_empty() {
        println!("No muscle groups selected; pass some, e.g. `liftlog catalog chest back`");
        return;
    }
    let localizer = session.localizer();
    for group in groups {
        println!("{}:", localizer.muscle(*group));
        for name in catalog::exercises_for(*group) {
            println!("   - {name}");
        }
    }
}

/// Begin or resume the workout
pub async fn start(session: &mut WorkoutSession) {
    session.start_workout().await;
    if session.phase() == SessionPhase::Active {
        info!("Workout active");
        display_exercises(session.active_exercises());
    } else {
        println!("Select at least one exercise first (liftlog select exercises ...)");
    }
}

/// Enter weight and reps for a set
pub fn log_set(
    session: &mut WorkoutSession,
    exercise: usize,
    set: usize,
    weight: Option<f64>,
    reps: Option<u32>,
) -> Result<()> {
    let update = SetUpdate {
        weight,
        reps,
        ..SetUpdate::default()
    };
    if !session.update_set(position(exercise, "Exercise")?, position(set, "Set")?, &update) {
        bail!("No set {set} for exercise {exercise}");
    }
    display_exercises(session.active_exercises());
    Ok(())
}

/// Toggle a set's completion, starting or stopping the rest timer
pub async fn complete_set(
    session: &mut WorkoutSession,
    exercise: usize,
    set: usize,
) -> Result<()> {
    let toggled = session
        .toggle_set_complete(position(exercise, "Exercise")?, position(set, "Set")?)
        .await;
    match toggled {
        Some(true) => {
            let rest = session.clock().lock().await.rest_remaining();
            println!("Set {set} done.");
            if let Some(rest) = rest {
                println!("Resting {rest}s - run `liftlog rest` to count it down");
            }
        }
        Some(false) => println!("Set {set} marked incomplete; rest timer stopped"),
        None => bail!("No set {set} for exercise {exercise}"),
    }
    Ok(())
}

/// Append a drafted set
pub fn add_set(session: &mut WorkoutSession, exercise: usize) -> Result<()> {
    if session.add_set(position(exercise, "Exercise")?).is_none() {
        bail!("No exercise {exercise}");
    }
    display_exercises(session.active_exercises());
    Ok(())
}

/// Delete a set
pub fn remove_set(session: &mut WorkoutSession, exercise: usize, set: usize) -> Result<()> {
    if !session.remove_set(position(exercise, "Exercise")?, position(set, "Set")?) {
        bail!("No set {set} for exercise {exercise}");
    }
    display_exercises(session.active_exercises());
    Ok(())
}

/// Add an exercise mid-workout
pub fn add_exercise(session: &mut WorkoutSession, name: &str) {
    let name = catalog::canonical_name(name).unwrap_or(name);
    if session.add_exercise(name) {
        display_exercises(session.active_exercises());
    } else {
        println!("'{name}' is already part of this workout");
    }
}

/// Drop an exercise from the workout
pub fn remove_exercise(session: &mut WorkoutSession, exercise: usize) -> Result<()> {
    let Some(removed) = session.remove_exercise(position(exercise, "Exercise")?) else {
        bail!("No exercise {exercise}");
    };
    println!("Removed {}", removed.name);
    if session.phase() == SessionPhase::Selection {
        println!("No exercises left; back to exercise selection");
    }
    Ok(())
}

/// Reorder exercises
pub fn move_exercise(session: &mut WorkoutSession, from: usize, to: usize) -> Result<()> {
    if !session.move_exercise(position(from, "Exercise")?, position(to, "Exercise")?) {
        bail!(
            "Exercise positions must be between 1 and {}",
            session.active_exercises().len()
        );
    }
    display_exercises(session.active_exercises());
    Ok(())
}

/// Commit the workout
pub async fn finish(session: &mut WorkoutSession) {
    match session.finish_workout().await {
        Some(workout) => {
            println!("Workout saved!");
            display_workout(workout);
        }
        None => println!("No active workout to finish"),
    }
}

/// Step back one phase
pub async fn back(session: &mut WorkoutSession) {
    session.go_back().await;
    println!("Phase: {}", session.localizer().phase(session.phase()));
}

/// Abandon the session
pub async fn reset(session: &mut WorkoutSession) {
    session.reset_session().await;
    println!("Session reset");
}
