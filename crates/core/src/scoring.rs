//! Scoring rules and end-of-session normalization.

use serde::{Deserialize, Serialize};

use crate::model::{DrawMode, Points};

/// Number of draws after which a session is finished.
pub const SESSION_LENGTH: u8 = 10;

/// Deducted for a wrong answer in risk mode, regardless of point value.
pub const RISK_PENALTY: i64 = 100;

/// Normalization ceiling: the best attainable raw score under the group quotas.
pub const RAW_MAX: i64 = 4900;

/// Upper bound of the station points scale.
pub const STATION_SCALE: i64 = 20;

/// Bonus added to a correct risk answer: exactly half the point value.
#[must_use]
pub fn risk_bonus(points: Points) -> i64 {
    i64::from(points.value()) / 2
}

/// Raw score change for resolving a question.
#[must_use]
pub fn score_delta(points: Points, mode: DrawMode, correct: bool) -> i64 {
    let pts = i64::from(points.value());
    match (mode, correct) {
        (DrawMode::Safe, true) => pts,
        (DrawMode::Safe, false) => 0,
        (DrawMode::Risk, true) => pts + risk_bonus(points),
        (DrawMode::Risk, false) => -RISK_PENALTY,
    }
}

/// Final grade derived from a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub raw_score: i64,
    pub raw_max: i64,
    /// `raw_score / raw_max * 20`.
    pub scaled: f64,
    /// `scaled` rounded toward positive infinity.
    pub station_points: i64,
    /// `raw_score / raw_max`.
    pub ratio: f64,
}

impl QuizResult {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_raw(raw_score: i64) -> Self {
        let ratio = raw_score as f64 / RAW_MAX as f64;
        Self {
            raw_score,
            raw_max: RAW_MAX,
            scaled: ratio * STATION_SCALE as f64,
            station_points: ceil_div(raw_score * STATION_SCALE, RAW_MAX),
            ratio,
        }
    }

    /// Success percentage rounded to one decimal place.
    #[must_use]
    pub fn percent(&self) -> f64 {
        (self.ratio * 1000.0).round() / 10.0
    }
}

// Ceiling division for `d > 0`, exact even where `scaled` carries float noise.
fn ceil_div(n: i64, d: i64) -> i64 {
    let q = n / d;
    if n % d > 0 { q + 1 } else { q }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PointGroup;

    #[test]
    fn safe_scoring() {
        assert_eq!(score_delta(Points::new(300), DrawMode::Safe, true), 300);
        assert_eq!(score_delta(Points::new(300), DrawMode::Safe, false), 0);
    }

    #[test]
    fn risk_scoring() {
        assert_eq!(score_delta(Points::new(300), DrawMode::Risk, true), 450);
        assert_eq!(score_delta(Points::new(100), DrawMode::Risk, false), -100);
        assert_eq!(score_delta(Points::new(500), DrawMode::Risk, false), -100);
    }

    #[test]
    fn half_point_result_is_exactly_ten() {
        let result = QuizResult::from_raw(2450);
        assert!((result.scaled - 10.0).abs() < f64::EPSILON);
        assert_eq!(result.station_points, 10);
        assert!((result.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn any_positive_remainder_rounds_up() {
        let result = QuizResult::from_raw(2451);
        assert!((result.scaled - 10.0041).abs() < 1e-4);
        assert_eq!(result.station_points, 11);
    }

    #[test]
    fn negative_and_zero_scores() {
        assert_eq!(QuizResult::from_raw(0).station_points, 0);
        assert_eq!(QuizResult::from_raw(-100).station_points, 0);
        assert_eq!(QuizResult::from_raw(-300).station_points, -1);
        assert_eq!(QuizResult::from_raw(-490).station_points, -2);
    }

    #[test]
    fn raw_max_matches_best_play_under_quotas() {
        let best: i64 = PointGroup::ALL
            .iter()
            .map(|group| {
                let quota = group.quota();
                let top = group.points().max().unwrap();
                let risk = i64::from(quota.risk.min(quota.pick));
                let safe = i64::from(quota.pick) - risk;
                risk * score_delta(top, DrawMode::Risk, true)
                    + safe * score_delta(top, DrawMode::Safe, true)
            })
            .sum();
        assert_eq!(best, RAW_MAX);
        assert_eq!(QuizResult::from_raw(RAW_MAX).station_points, STATION_SCALE);
    }
}
