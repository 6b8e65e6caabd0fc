/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::collections::BTreeMap;

/// Stages every project is tracked through, in display order.
pub const SDLC_STAGES: [&str; 5] = ["analysis", "design", "implementation", "testing", "maintenance"];

/// Percentage of a single stage, 0 when the stage was never reported.
pub fn stage_progress(progress: &BTreeMap<String, f64>, stage: &str) -> f64 {
    progress
        .get(stage)
        .copied()
        .filter(|p| p.is_finite())
        .map(|p| p.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Mean over all five stages, rounded to the nearest integer. The divisor
/// is always the stage count, so one stage at 100 yields 20.
pub fn overall_progress(progress: &BTreeMap<String, f64>) -> u8 {
    let sum: f64 = SDLC_STAGES
        .iter()
        .map(|stage| stage_progress(progress, stage))
        .sum();

    (sum / SDLC_STAGES.len() as f64).round() as u8
}

/// Text bar for terminal output, `width` cells wide.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}
