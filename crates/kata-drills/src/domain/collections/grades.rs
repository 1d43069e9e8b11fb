//! Exam score bookkeeping

use crate::constants::{FAILING_SCORE, PERFECT_SCORE};
use thiserror::Error;

/// Grading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("highest score must be greater than {min}, found {0}", min = FAILING_SCORE)]
    HighestTooLow(u32),
    #[error("got {scores} scores for {names} students")]
    LengthMismatch { scores: usize, names: usize },
}

/// Round each score to the nearest integer, ties to even
pub fn round_scores(scores: &[f64]) -> Vec<i64> {
    scores
        .iter()
        .map(|score| score.round_ties_even() as i64)
        .collect()
}

/// Number of scores at or below the failing mark
pub fn count_failed_students(scores: &[f64]) -> usize {
    scores.iter().filter(|&&score| score <= FAILING_SCORE).count()
}

/// Scores at or above `threshold`, in input order
pub fn above_threshold(scores: &[f64], threshold: f64) -> Vec<f64> {
    scores
        .iter()
        .copied()
        .filter(|&score| score >= threshold)
        .collect()
}

/// Lower bounds of the D, C, B and A grades
///
/// The passing range above 40 is split into four equal integer intervals;
/// `letter_grades(100)` is `[41, 56, 71, 86]`.
pub fn letter_grades(highest: u32) -> Result<[u32; 4], GradeError> {
    let failing = FAILING_SCORE as u32;
    if highest <= failing {
        return Err(GradeError::HighestTooLow(highest));
    }
    let increment = (highest - failing) / 4;
    Ok(std::array::from_fn(|i| failing + 1 + increment * i as u32))
}

/// `"<rank>. <name>: <score>"` lines, scores already in descending order
pub fn student_ranking(scores: &[f64], names: &[&str]) -> Result<Vec<String>, GradeError> {
    if scores.len() != names.len() {
        return Err(GradeError::LengthMismatch {
            scores: scores.len(),
            names: names.len(),
        });
    }
    Ok(scores
        .iter()
        .zip(names)
        .enumerate()
        .map(|(i, (score, name))| format!("{}. {}: {}", i + 1, name, score))
        .collect())
}

/// First student with a perfect score
pub fn perfect_score<'a>(students: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    students
        .iter()
        .copied()
        .find(|&(_, score)| score == PERFECT_SCORE)
}
