// ABOUTME: Body mass index calculation and WHO adult category classification
// ABOUTME: Formats BMI to one decimal and maps categories to display labels and colors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use eatitude_core::constants::{bmi, colors};
use serde::{Deserialize, Serialize};

/// Shown when weight or height is missing
pub const UNKNOWN_BMI: &str = "0.0";

/// Body mass index in kg/m²
///
/// Returns `None` when either measurement is absent or the height is not positive.
#[must_use]
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let (weight, height) = (weight_kg?, height_cm?);
    if height <= 0.0 {
        return None;
    }
    let height_m = height / 100.0;
    Some(weight / (height_m * height_m))
}

/// BMI formatted to one decimal, `"0.0"` when it cannot be computed
#[must_use]
pub fn format_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> String {
    bmi(weight_kg, height_cm).map_or_else(|| UNKNOWN_BMI.to_owned(), |value| format!("{value:.1}"))
}

/// WHO adult BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Indonesian display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Kurang Berat",
            Self::Normal => "Normal",
            Self::Overweight => "Kelebihan Berat",
            Self::Obese => "Obesitas",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => colors::BLUE,
            Self::Normal => colors::GREEN,
            Self::Overweight => colors::AMBER,
            Self::Obese => colors::RED,
        }
    }
}
