// ABOUTME: Indonesian display labels for plan statuses and profile enums
// ABOUTME: Status label and color lookups never fail and fall back to a neutral value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use eatitude_core::constants::colors;
use eatitude_core::models::{ActivityLevel, Gender, HealthGoal, PlanStatus};

/// Label for statuses outside the known set
pub const UNKNOWN_STATUS_LABEL: &str = "Tidak Diketahui";

/// Review status label
#[must_use]
pub fn status_label(status: &PlanStatus) -> &'static str {
    match status {
        PlanStatus::Waiting => "Menunggu Persetujuan",
        PlanStatus::Approved => "Disetujui",
        PlanStatus::Adjusted => "Disesuaikan",
        PlanStatus::Other(_) => UNKNOWN_STATUS_LABEL,
    }
}

/// Review status color (hex)
#[must_use]
pub fn status_color(status: &PlanStatus) -> &'static str {
    match status {
        PlanStatus::Waiting => colors::AMBER,
        PlanStatus::Approved => colors::GREEN,
        PlanStatus::Adjusted => colors::BLUE,
        PlanStatus::Other(_) => colors::GRAY,
    }
}

/// Activity level label
#[must_use]
pub const fn activity_label(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "Sedentari",
        ActivityLevel::Light => "Ringan",
        ActivityLevel::Moderate => "Sedang",
        ActivityLevel::Active => "Aktif",
        ActivityLevel::VeryActive => "Sangat Aktif",
    }
}

/// Activity level hint shown under the option
#[must_use]
pub const fn activity_description(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "Tidak atau jarang berolahraga",
        ActivityLevel::Light => "Olahraga 1-3 kali/minggu",
        ActivityLevel::Moderate => "Olahraga 3-5 kali/minggu",
        ActivityLevel::Active => "Olahraga 6-7 kali/minggu",
        ActivityLevel::VeryActive => "Olahraga berat & pekerjaan fisik",
    }
}

/// Health goal label
#[must_use]
pub const fn goal_label(goal: HealthGoal) -> &'static str {
    match goal {
        HealthGoal::ImproveHealth => "Menjaga Kesehatan",
        HealthGoal::MaintainWeight => "Menjaga Berat Badan",
        HealthGoal::LoseWeight => "Mengurangi Berat Badan",
        HealthGoal::GainWeight => "Menambah Berat Badan",
        HealthGoal::ManageDisease => "Mengelola Penyakit",
    }
}

/// Gender label
#[must_use]
pub const fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Laki-laki",
        Gender::Female => "Perempuan",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(&PlanStatus::Waiting), "Menunggu Persetujuan");
        assert_eq!(status_color(&PlanStatus::Waiting), "#F59E0B");
        assert_eq!(status_label(&PlanStatus::Approved), "Disetujui");
        assert_eq!(status_color(&PlanStatus::Approved), "#10B981");
        assert_eq!(status_label(&PlanStatus::Adjusted), "Disesuaikan");
        assert_eq!(status_color(&PlanStatus::Adjusted), "#3B82F6");
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let status = PlanStatus::from("rejected");
        assert_eq!(status_label(&status), UNKNOWN_STATUS_LABEL);
        assert_eq!(status_color(&status), "#6B7280");
    }

    #[test]
    fn test_every_option_has_a_label() {
        for level in ActivityLevel::ALL {
            assert!(!activity_label(level).is_empty());
            assert!(!activity_description(level).is_empty());
        }
        for goal in HealthGoal::ALL {
            assert!(!goal_label(goal).is_empty());
        }
        assert_eq!(goal_label(HealthGoal::LoseWeight), "Mengurangi Berat Badan");
    }
}
