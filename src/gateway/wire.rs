// ABOUTME: Wire format of the remote plan service and its mapping onto domain models
// ABOUTME: Profile to Indonesian request fields, loosely typed plan sections to NutritionPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::default_plan;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActivityLevel, ConsumptionLimits, Gender, HealthGoal, Hydration, Macronutrients, Minerals,
    NutritionPlan, PlanStatus, UserProfile, Vitamins,
};

/// Glasses of water per liter (250 ml glass)
const GLASSES_PER_LITER: f64 = 4.0;

/// Micrograms per milligram
const MCG_PER_MG: f64 = 1000.0;

/// Request body of `POST /generate_personal_plan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Name
    pub nama: String,
    /// Age in years
    pub usia: u32,
    /// "Laki-laki" or "Perempuan"
    pub jenis_kelamin: String,
    /// Weight in kg
    pub berat_badan: f64,
    /// Height in cm
    pub tinggi_badan: f64,
    /// Activity slug
    pub tingkat_aktivitas: String,
    /// Activity notes, null when blank
    pub catatan_aktivitas: Option<String>,
    /// Wake-up time `HH:MM`
    pub waktu_bangun: String,
    /// Bedtime `HH:MM`
    pub waktu_tidur: String,
    /// Food preferences, null when blank
    pub preferensi_makanan: Option<String>,
    /// Allergies, null when blank
    pub alergi_makanan: Option<String>,
    /// Health conditions, null when blank
    pub kondisi_kesehatan: Option<String>,
    /// Goal slug
    pub tujuan: String,
}

impl PlanRequest {
    /// Build the request from a profile that passed all four onboarding steps
    ///
    /// # Errors
    ///
    /// Returns a validation error when the profile is incomplete
    pub fn from_profile(profile: &UserProfile) -> AppResult<Self> {
        eatitude_intelligence::validate_profile(profile)?;

        let missing = |field: &str| AppError::invalid_input(format!("Profile field '{field}' is missing"));

        Ok(Self {
            nama: profile.name.trim().to_owned(),
            usia: profile.age.ok_or_else(|| missing("age"))?,
            jenis_kelamin: remote_gender(profile.gender.ok_or_else(|| missing("gender"))?)
                .to_owned(),
            berat_badan: profile.weight_kg.ok_or_else(|| missing("weight_kg"))?,
            tinggi_badan: profile.height_cm.ok_or_else(|| missing("height_cm"))?,
            tingkat_aktivitas: remote_activity(profile.activity_level).to_owned(),
            catatan_aktivitas: non_blank(&profile.activity_notes),
            waktu_bangun: profile.wake_time.clone(),
            waktu_tidur: profile.sleep_time.clone(),
            preferensi_makanan: non_blank(&profile.food_preferences),
            alergi_makanan: non_blank(&profile.allergies),
            kondisi_kesehatan: non_blank(&profile.health_conditions),
            tujuan: remote_goal(profile.goal).to_owned(),
        })
    }
}

/// Gender as the plan service spells it
#[must_use]
pub const fn remote_gender(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Laki-laki",
        Gender::Female => "Perempuan",
    }
}

/// Activity slug, `sedang` when unset
#[must_use]
pub const fn remote_activity(level: Option<ActivityLevel>) -> &'static str {
    match level {
        Some(ActivityLevel::Sedentary) => "sedentari",
        Some(ActivityLevel::Light) => "ringan",
        Some(ActivityLevel::Moderate) | None => "sedang",
        Some(ActivityLevel::Active) => "aktif",
        Some(ActivityLevel::VeryActive) => "sangat_aktif",
    }
}

/// Goal slug, `meningkatkan_kesehatan` when unset
#[must_use]
pub const fn remote_goal(goal: Option<HealthGoal>) -> &'static str {
    match goal {
        Some(HealthGoal::ImproveHealth) | None => "meningkatkan_kesehatan",
        Some(HealthGoal::MaintainWeight) => "menjaga_berat_badan",
        Some(HealthGoal::LoseWeight) => "menurunkan_berat_badan",
        Some(HealthGoal::GainWeight) => "menambah_berat_badan",
        Some(HealthGoal::ManageDisease) => "pengelolaan_penyakit",
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Response body of `POST /generate_personal_plan`
///
/// Sections are loosely typed maps; every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePlan {
    /// Energy section
    #[serde(default)]
    pub kebutuhan_kalori: Option<Map<String, Value>>,
    /// Macronutrient section
    #[serde(default)]
    pub kebutuhan_makronutrisi: Option<Map<String, Value>>,
    /// Vitamin and mineral section (mg)
    #[serde(default)]
    pub kebutuhan_mikronutrisi: Option<Map<String, Value>>,
    /// Consumption limit section
    #[serde(default)]
    pub batasi_konsumsi: Option<Map<String, Value>>,
    /// Fluid section
    #[serde(default)]
    pub kebutuhan_cairan: Option<Map<String, Value>>,
    /// Notes
    #[serde(default)]
    pub catatan: Option<String>,
    /// Review status, when the service tracks it
    #[serde(default)]
    pub status: Option<String>,
    /// Generator name
    #[serde(default, rename = "dibuatOleh")]
    pub dibuat_oleh: Option<String>,
    /// Reviewing nutritionist
    #[serde(default, rename = "divalidasiOleh")]
    pub divalidasi_oleh: Option<String>,
}

impl RemotePlan {
    /// Parse a response body
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the body is not a JSON object or
    /// carries none of the plan sections
    pub fn parse(body: &str) -> AppResult<Self> {
        let plan: Self = serde_json::from_str(body).map_err(|e| {
            AppError::serialization(format!("Malformed plan response: {e}")).with_source(e)
        })?;
        if plan.has_no_sections() {
            return Err(AppError::serialization(
                "Plan response carries no nutrition sections",
            ));
        }
        Ok(plan)
    }

    fn has_no_sections(&self) -> bool {
        self.kebutuhan_kalori.is_none()
            && self.kebutuhan_makronutrisi.is_none()
            && self.kebutuhan_mikronutrisi.is_none()
            && self.batasi_konsumsi.is_none()
            && self.kebutuhan_cairan.is_none()
    }

    /// Map onto the domain plan, using fallback values for missing entries
    #[must_use]
    pub fn into_plan(self) -> NutritionPlan {
        let fallback = NutritionPlan::fallback();
        let energy = Section(self.kebutuhan_kalori.as_ref());
        let macro_section = Section(self.kebutuhan_makronutrisi.as_ref());
        let micro = Section(self.kebutuhan_mikronutrisi.as_ref());
        let limit_section = Section(self.batasi_konsumsi.as_ref());
        let fluids = Section(self.kebutuhan_cairan.as_ref());

        let macros = Macronutrients {
            carbs: macro_section.number("karbohidrat_per_hari_(g)", fallback.macros.carbs),
            protein: macro_section.number("protein_per_hari_(g)", fallback.macros.protein),
            fat: macro_section.number("lemak_per_hari_(g)", fallback.macros.fat),
            fiber: macro_section.number("serat_per_hari_(g)", fallback.macros.fiber),
        };

        let vitamins = Vitamins {
            vitamin_a: micro.mcg_from_mg("vitamin_a_per_hari_(mg)", fallback.vitamins.vitamin_a),
            vitamin_b: micro.number(
                "vitamin_b_kompleks_per_hari_(mg)",
                fallback.vitamins.vitamin_b,
            ),
            vitamin_c: micro.number("vitamin_c_per_hari_(mg)", fallback.vitamins.vitamin_c),
            vitamin_d: micro.mcg_from_mg("vitamin_d_per_hari_(mg)", fallback.vitamins.vitamin_d),
            vitamin_e: micro.number("vitamin_e_per_hari_(mg)", fallback.vitamins.vitamin_e),
            vitamin_k: micro.mcg_from_mg("vitamin_k_per_hari_(mg)", fallback.vitamins.vitamin_k),
        };

        let minerals = Minerals {
            calcium: micro.number("kalsium_per_hari_(mg)", fallback.minerals.calcium),
            iron: micro.number("zat_besi_per_hari_(mg)", fallback.minerals.iron),
            magnesium: micro.number("magnesium_per_hari_(mg)", fallback.minerals.magnesium),
            potassium: micro.number("kalium_per_hari_(mg)", fallback.minerals.potassium),
            sodium: micro.number("natrium_per_hari_(mg)", fallback.minerals.sodium),
            zinc: micro.number("zinc_per_hari_(mg)", fallback.minerals.zinc),
            iodine: micro.mcg_from_mg("yodium_per_hari_(mg)", fallback.minerals.iodine),
        };

        let limits = ConsumptionLimits {
            sugar: limit_section.limit("gula_per_hari_(g)", "g", fallback.limits.sugar),
            salt: limit_section.limit("garam_per_hari_(g)", "g", fallback.limits.salt),
            caffeine: limit_section.limit("kafein_per_hari_(mg)", "mg", fallback.limits.caffeine),
            saturated_fat: limit_section.limit(
                "lemak_jenuh_per_hari_(g)",
                "g",
                fallback.limits.saturated_fat,
            ),
            trans_fat: limit_section.limit(
                "lemak_trans_per_hari_(g)",
                "g",
                fallback.limits.trans_fat,
            ),
            cholesterol: limit_section.limit(
                "kolesterol_per_hari_(mg)",
                "mg",
                fallback.limits.cholesterol,
            ),
        };

        let liters = fluids.number("air_per_hari_(liter)", fallback.hydration.liters);
        let glasses = fluids
            .get_number("air_per_hari_(gelas)")
            .unwrap_or_else(|| (liters * GLASSES_PER_LITER).round())
            .max(0.0) as u32;

        NutritionPlan {
            status: self.status.map_or(PlanStatus::Waiting, PlanStatus::from),
            generated_by: self
                .dibuat_oleh
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| default_plan::GENERATED_BY.to_owned()),
            validated_by: self.divalidasi_oleh.unwrap_or_default(),
            calories: energy.number("total_kalori_per_hari_(kcal)", fallback.calories),
            macros,
            vitamins,
            minerals,
            limits,
            hydration: Hydration { liters, glasses },
            notes: self
                .catatan
                .filter(|notes| !notes.trim().is_empty())
                .unwrap_or(fallback.notes),
        }
    }
}

/// Read-only view over an optional response section
struct Section<'a>(Option<&'a Map<String, Value>>);

impl Section<'_> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.0.and_then(|map| map.get(key))
    }

    /// Numeric entry; numeric strings such as "2000" are accepted
    fn get_number(&self, key: &str) -> Option<f64> {
        let value = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', ".").parse().ok(),
            _ => None,
        };
        value.filter(|n| n.is_finite())
    }

    fn number(&self, key: &str, default: f64) -> f64 {
        self.get_number(key).unwrap_or(default)
    }

    fn mcg_from_mg(&self, key: &str, default_mcg: f64) -> f64 {
        self.get_number(key).map_or(default_mcg, |mg| mg * MCG_PER_MG)
    }

    /// Limit sentence; numbers become "Maksimal {n}{unit} per hari"
    fn limit(&self, key: &str, unit: &str, default: String) -> String {
        match self.get(key) {
            Some(Value::String(text)) if !text.trim().is_empty() => text.trim().to_owned(),
            Some(Value::Number(n)) => n.as_f64().map_or(default, |value| {
                format!("Maksimal {}{unit} per hari", format_amount(value))
            }),
            _ => default,
        }
    }
}

/// Whole numbers without decimals, others with up to two
fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}
