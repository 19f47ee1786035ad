// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, validation ranges, plan defaults, remote API paths and display colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Persistence gateway keys
pub mod storage_keys {
    /// Serialized `UserProfile`
    pub const USER_PROFILE: &str = "userProfile";
    /// Serialized `NutritionPlan`
    pub const NUTRITION_PLAN: &str = "nutritionPlan";
    /// Welcome screen acknowledged
    pub const HAS_SEEN_WELCOME: &str = "hasSeenWelcome";
    /// Onboarding wizard finished
    pub const HAS_COMPLETED_ONBOARDING: &str = "hasCompletedOnboarding";
    /// Personal tab acknowledged after onboarding
    pub const HAS_SEEN_PERSONAL: &str = "hasSeenPersonal";
    /// Stored value of a set flag; absence means unset
    pub const FLAG_TRUE: &str = "true";
}

/// Accepted ranges for profile fields
pub mod ranges {
    /// Minimum age in years
    pub const MIN_AGE: u32 = 1;
    /// Maximum age in years
    pub const MAX_AGE: u32 = 120;
    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
}

/// Profile defaults applied when a new onboarding flow starts
pub mod profile_defaults {
    /// Default wake-up time
    pub const WAKE_TIME: &str = "06:00";
    /// Default bedtime
    pub const SLEEP_TIME: &str = "22:00";
}

/// BMI category thresholds (WHO adult classification)
pub mod bmi {
    /// Upper bound (exclusive) of the underweight band
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound (exclusive) of the normal band
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Upper bound (exclusive) of the overweight band
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Display colors shared by BMI categories and plan statuses
pub mod colors {
    /// Blue
    pub const BLUE: &str = "#3B82F6";
    /// Green
    pub const GREEN: &str = "#10B981";
    /// Amber
    pub const AMBER: &str = "#F59E0B";
    /// Red
    pub const RED: &str = "#EF4444";
    /// Gray, used for unknown values
    pub const GRAY: &str = "#6B7280";
}

/// Remote plan generation service
pub mod api {
    /// Default base URL of the plan service
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    /// Plan generation endpoint
    pub const GENERATE_PERSONAL_PLAN: &str = "/generate_personal_plan";
    /// Health check endpoint
    pub const HEALTH: &str = "/";
    /// Default request timeout; plan generation runs an LLM pipeline server-side
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
    /// Default connection timeout
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default number of extra attempts after a failed generation
    pub const DEFAULT_MAX_RETRIES: u32 = 2;
    /// Default delay between generation attempts
    pub const DEFAULT_RETRY_DELAY_MS: u64 = 60_000;
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "Eatitude plan service";
}

/// Values of the deterministic fallback nutrition plan
pub mod default_plan {
    /// Daily energy target (kcal)
    pub const CALORIES: f64 = 2000.0;

    /// Carbohydrates (g/day)
    pub const CARBS_G: f64 = 250.0;
    /// Protein (g/day)
    pub const PROTEIN_G: f64 = 150.0;
    /// Fat (g/day)
    pub const FAT_G: f64 = 67.0;
    /// Fiber (g/day)
    pub const FIBER_G: f64 = 25.0;

    /// Vitamin A (mcg/day)
    pub const VITAMIN_A: f64 = 900.0;
    /// Vitamin B complex (mg/day)
    pub const VITAMIN_B: f64 = 2.4;
    /// Vitamin C (mg/day)
    pub const VITAMIN_C: f64 = 90.0;
    /// Vitamin D (mcg/day)
    pub const VITAMIN_D: f64 = 20.0;
    /// Vitamin E (mg/day)
    pub const VITAMIN_E: f64 = 15.0;
    /// Vitamin K (mcg/day)
    pub const VITAMIN_K: f64 = 120.0;

    /// Calcium (mg/day)
    pub const CALCIUM: f64 = 1000.0;
    /// Iron (mg/day)
    pub const IRON: f64 = 18.0;
    /// Magnesium (mg/day)
    pub const MAGNESIUM: f64 = 400.0;
    /// Potassium (mg/day)
    pub const POTASSIUM: f64 = 3500.0;
    /// Sodium (mg/day)
    pub const SODIUM: f64 = 2300.0;
    /// Zinc (mg/day)
    pub const ZINC: f64 = 11.0;
    /// Iodine (mcg/day)
    pub const IODINE: f64 = 150.0;

    /// Sugar limit
    pub const LIMIT_SUGAR: &str = "Maksimal 4 sendok makan per hari";
    /// Salt limit
    pub const LIMIT_SALT: &str = "Maksimal 1 sendok teh per hari";
    /// Caffeine limit
    pub const LIMIT_CAFFEINE: &str = "Maksimal 2 cangkir kopi per hari";
    /// Saturated fat limit
    pub const LIMIT_SATURATED_FAT: &str =
        "Maksimal 10% dari total energi harian (≈ 22g untuk kebutuhan 2000 kkal)";
    /// Trans fat limit
    pub const LIMIT_TRANS_FAT: &str =
        "Maksimal <1% dari total energi harian (≈ 2g untuk kebutuhan 2000 kkal)";
    /// Cholesterol limit
    pub const LIMIT_CHOLESTEROL: &str = "Maksimal 300mg per hari";

    /// Water (liters/day)
    pub const HYDRATION_LITERS: f64 = 2.5;
    /// Water (glasses/day)
    pub const HYDRATION_GLASSES: u32 = 10;

    /// Generator credited on fallback plans
    pub const GENERATED_BY: &str = "NutriAdvisor AI";
    /// Notes attached to fallback plans
    pub const NOTES: &str = "Rencana ini dibuat berdasarkan profil dan tujuan Anda. Silakan tunggu validasi dari ahli gizi.";
}
