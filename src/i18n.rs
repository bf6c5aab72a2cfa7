// ABOUTME: Display label lookup parameterized by language
// ABOUTME: Used only for labels such as workout names; carries no session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::fmt;
use std::str::FromStr;

use liftlog_core::models::{MuscleGroup, SessionPhase};
use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// German
    De,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
        };
        f.write_str(code)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" => Ok(Self::Es),
            "de" | "german" | "deutsch" => Ok(Self::De),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

/// Key → label lookup for the current language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Create a localizer for a language
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Current language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Label for a muscle group
    #[must_use]
    pub const fn muscle(&self, group: MuscleGroup) -> &'static str {
        match self.language {
            Language::En => match group {
                MuscleGroup::Chest => "Chest",
                MuscleGroup::Back => "Back",
                MuscleGroup::Shoulders => "Shoulders",
                MuscleGroup::Biceps => "Biceps",
                MuscleGroup::Triceps => "Triceps",
                MuscleGroup::Legs => "Legs",
                MuscleGroup::Glutes => "Glutes",
                MuscleGroup::Core => "Core",
                MuscleGroup::Calves => "Calves",
                MuscleGroup::Cardio => "Cardio",
            },
            Language::Es => match group {
                MuscleGroup::Chest => "Pecho",
                MuscleGroup::Back => "Espalda",
                MuscleGroup::Shoulders => "Hombros",
                MuscleGroup::Biceps => "Bíceps",
                MuscleGroup::Triceps => "Tríceps",
                MuscleGroup::Legs => "Piernas",
                MuscleGroup::Glutes => "Glúteos",
                MuscleGroup::Core => "Abdomen",
                MuscleGroup::Calves => "Pantorrillas",
                MuscleGroup::Cardio => "Cardio",
            },
            Language::De => match group {
                MuscleGroup::Chest => "Brust",
                MuscleGroup::Back => "Rücken",
                MuscleGroup::Shoulders => "Schultern",
                MuscleGroup::Biceps => "Bizeps",
                MuscleGroup::Triceps => "Trizeps",
                MuscleGroup::Legs => "Beine",
                MuscleGroup::Glutes => "Gesäß",
                MuscleGroup::Core => "Rumpf",
                MuscleGroup::Calves => "Waden",
                MuscleGroup::Cardio => "Ausdauer",
            },
        }
    }

    /// Generic name for a workout with no muscle groups selected
    #[must_use]
    pub const fn generic_workout(&self) -> &'static str {
        match self.language {
            Language::En => "Workout",
            Language::Es => "Entrenamiento",
            Language::De => "Training",
        }
    }

    /// Label for a workflow phase
    #[must_use]
    pub const fn phase(&self, phase: SessionPhase) -> &'static str {
        match (self.language, phase) {
            (Language::En, SessionPhase::Setup) => "Choose muscles",
            (Language::En, SessionPhase::Selection) => "Choose exercises",
            (Language::En, SessionPhase::Active) => "Workout in progress",
            (Language::En, SessionPhase::Summary) => "Summary",
            (Language::Es, SessionPhase::Setup) => "Elige músculos",
            (Language::Es, SessionPhase::Selection) => "Elige ejercicios",
            (Language::Es, SessionPhase::Active) => "Entrenamiento en curso",
            (Language::Es, SessionPhase::Summary) => "Resumen",
            (Language::De, SessionPhase::Setup) => "Muskeln wählen",
            (Language::De, SessionPhase::Selection) => "Übungen wählen",
            (Language::De, SessionPhase::Active) => "Training läuft",
            (Language::De, SessionPhase::Summary) => "Zusammenfassung",
        }
    }

    /// Workout name from the selected muscle groups, or the generic fallback
    #[must_use]
    pub fn workout_name(&self, muscles: &[MuscleGroup]) -> String {
        if muscles.is_empty() {
            return self.generic_workout().to_owned();
        }
        muscles
            .iter()
            .map(|group| self.muscle(*group))
            .collect::<Vec<_>>()
            .join(" & ")
    }
}
