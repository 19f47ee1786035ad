// ABOUTME: Nutrition plan model produced by the plan service or the fallback generator
// ABOUTME: NutritionPlan with macro, vitamin, mineral, limit and hydration targets plus review status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::{Deserialize, Serialize};

use crate::constants::default_plan;

/// Nutritionist review status of a plan
///
/// Unknown values read back from storage are preserved in `Other` so that
/// presentation code can fall back to a neutral label instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanStatus {
    /// Awaiting nutritionist review
    Waiting,
    /// Approved as generated
    Approved,
    /// Adjusted by a nutritionist
    Adjusted,
    /// Unrecognized status string
    Other(String),
}

impl PlanStatus {
    /// Stable identifier used in storage
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Waiting => "waiting",
            Self::Approved => "approved",
            Self::Adjusted => "adjusted",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for PlanStatus {
    fn from(value: &str) -> Self {
        match value {
            "waiting" => Self::Waiting,
            "approved" => Self::Approved,
            "adjusted" => Self::Adjusted,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for PlanStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PlanStatus> for String {
    fn from(status: PlanStatus) -> Self {
        match status {
            PlanStatus::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macronutrients {
    /// Carbohydrates
    pub carbs: f64,
    /// Protein
    pub protein: f64,
    /// Fat
    pub fat: f64,
    /// Dietary fiber
    pub fiber: f64,
}

/// Daily vitamin targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitamins {
    /// Vitamin A
    pub vitamin_a: f64,
    /// Vitamin B complex
    pub vitamin_b: f64,
    /// Vitamin C
    pub vitamin_c: f64,
    /// Vitamin D
    pub vitamin_d: f64,
    /// Vitamin E
    pub vitamin_e: f64,
    /// Vitamin K
    pub vitamin_k: f64,
}

/// Daily mineral targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minerals {
    /// Calcium
    pub calcium: f64,
    /// Iron
    pub iron: f64,
    /// Magnesium
    pub magnesium: f64,
    /// Potassium
    pub potassium: f64,
    /// Sodium
    pub sodium: f64,
    /// Zinc
    pub zinc: f64,
    /// Iodine
    pub iodine: f64,
}

/// Human-readable consumption limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionLimits {
    /// Added sugar
    pub sugar: String,
    /// Salt
    pub salt: String,
    /// Caffeine
    pub caffeine: String,
    /// Saturated fat
    pub saturated_fat: String,
    /// Trans fat
    pub trans_fat: String,
    /// Dietary cholesterol
    pub cholesterol: String,
}

/// Daily water intake target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hydration {
    /// Liters per day
    pub liters: f64,
    /// Glasses per day
    pub glasses: u32,
}

/// Daily nutrition plan associated with the stored profile
///
/// Exactly one plan is stored at a time; generating a new plan replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Nutritionist review status
    pub status: PlanStatus,
    /// Generator that produced the plan
    pub generated_by: String,
    /// Nutritionist who validated the plan (empty while waiting)
    #[serde(default)]
    pub validated_by: String,
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Macronutrient targets
    pub macros: Macronutrients,
    /// Vitamin targets
    pub vitamins: Vitamins,
    /// Mineral targets
    pub minerals: Minerals,
    /// Consumption limits
    pub limits: ConsumptionLimits,
    /// Water intake target
    pub hydration: Hydration,
    /// Free-text notes for the user
    #[serde(default)]
    pub notes: String,
}

impl NutritionPlan {
    /// Deterministic plan used whenever generation is unavailable
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            status: PlanStatus::Waiting,
            generated_by: default_plan::GENERATED_BY.to_owned(),
            validated_by: String::new(),
            calories: default_plan::CALORIES,
            macros: Macronutrients::default(),
            vitamins: Vitamins::default(),
            minerals: Minerals::default(),
            limits: ConsumptionLimits::default(),
            hydration: Hydration::default(),
            notes: default_plan::NOTES.to_owned(),
        }
    }
}

impl Default for Macronutrients {
    fn default() -> Self {
        Self {
            carbs: default_plan::CARBS_G,
            protein: default_plan::PROTEIN_G,
            fat: default_plan::FAT_G,
            fiber: default_plan::FIBER_G,
        }
    }
}

impl Default for Vitamins {
    fn default() -> Self {
        Self {
            vitamin_a: default_plan::VITAMIN_A,
            vitamin_b: default_plan::VITAMIN_B,
            vitamin_c: default_plan::VITAMIN_C,
            vitamin_d: default_plan::VITAMIN_D,
            vitamin_e: default_plan::VITAMIN_E,
            vitamin_k: default_plan::VITAMIN_K,
        }
    }
}

impl Default for Minerals {
    fn default() -> Self {
        Self {
            calcium: default_plan::CALCIUM,
            iron: default_plan::IRON,
            magnesium: default_plan::MAGNESIUM,
            potassium: default_plan::POTASSIUM,
            sodium: default_plan::SODIUM,
            zinc: default_plan::ZINC,
            iodine: default_plan::IODINE,
        }
    }
}

impl Default for ConsumptionLimits {
    fn default() -> Self {
        Self {
            sugar: default_plan::LIMIT_SUGAR.to_owned(),
            salt: default_plan::LIMIT_SALT.to_owned(),
            caffeine: default_plan::LIMIT_CAFFEINE.to_owned(),
            saturated_fat: default_plan::LIMIT_SATURATED_FAT.to_owned(),
            trans_fat: default_plan::LIMIT_TRANS_FAT.to_owned(),
            cholesterol: default_plan::LIMIT_CHOLESTEROL.to_owned(),
        }
    }
}

impl Default for Hydration {
    fn default() -> Self {
        Self {
            liters: default_plan::HYDRATION_LITERS,
            glasses: default_plan::HYDRATION_GLASSES,
        }
    }
}
