//! Card game helpers over round numbers and hands

use crate::constants::JACK_VALUE;
use thiserror::Error;

/// Card game errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Average or last card requested from an empty hand
    #[error("hand must contain at least one card")]
    EmptyHand,
    /// Round number too large to count two rounds ahead
    #[error("round {0} is too large")]
    RoundOverflow(u32),
}

/// Current round and the next two
pub fn get_rounds(number: u32) -> Result<[u32; 3], CardError> {
    let last = number
        .checked_add(2)
        .ok_or(CardError::RoundOverflow(number))?;
    Ok([number, number + 1, last])
}

/// Rounds of the first list followed by the second
pub fn concatenate_rounds(first: &[u32], second: &[u32]) -> Vec<u32> {
    [first, second].concat()
}

/// Whether `number` was played
pub fn list_contains_round(rounds: &[u32], number: u32) -> bool {
    rounds.contains(&number)
}

fn mean<'a>(cards: impl Iterator<Item = &'a u32>) -> Result<f64, CardError> {
    let (sum, count) = cards.fold((0u64, 0u64), |(sum, count), &card| {
        (sum + card as u64, count + 1)
    });
    if count == 0 {
        return Err(CardError::EmptyHand);
    }
    Ok(sum as f64 / count as f64)
}

/// Mean card value
pub fn card_average(hand: &[u32]) -> Result<f64, CardError> {
    mean(hand.iter())
}

/// Whether the mean of the first and last card, or the middle card, equals
/// the true average
pub fn approx_average_is_average(hand: &[u32]) -> Result<bool, CardError> {
    let average = card_average(hand)?;
    let (Some(&first), Some(&last)) = (hand.first(), hand.last()) else {
        return Err(CardError::EmptyHand);
    };
    let ends = (first as f64 + last as f64) / 2.0;
    let middle = hand[hand.len() / 2] as f64;
    Ok(ends == average || middle == average)
}

/// Whether cards at even positions average the same as cards at odd ones
///
/// A hand of fewer than two cards has no odd positions and is an error.
pub fn average_even_is_average_odd(hand: &[u32]) -> Result<bool, CardError> {
    let even = mean(hand.iter().step_by(2))?;
    let odd = mean(hand.iter().skip(1).step_by(2))?;
    Ok(even == odd)
}

/// Double a Jack in the last position
pub fn maybe_double_last(hand: &mut [u32]) -> Result<(), CardError> {
    let last = hand.last_mut().ok_or(CardError::EmptyHand)?;
    if *last == JACK_VALUE {
        *last *= 2;
    }
    Ok(())
}
