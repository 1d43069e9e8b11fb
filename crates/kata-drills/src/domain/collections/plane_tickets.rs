//! Seat and ticket code generators

use crate::constants::{SEAT_LETTERS, SKIPPED_ROW, TICKET_CODE_LENGTH};

/// `number` seat letters cycling A to D
pub fn generate_seat_letters(number: usize) -> impl Iterator<Item = char> {
    SEAT_LETTERS.iter().copied().cycle().take(number)
}

/// `number` seat identifiers such as `"3C"`, four per row, skipping row 13
pub fn generate_seats(number: usize) -> impl Iterator<Item = String> {
    let per_row = SEAT_LETTERS.len();
    generate_seat_letters(number)
        .enumerate()
        .map(move |(i, letter)| {
            let mut row = (i / per_row) as u32 + 1;
            if row >= SKIPPED_ROW {
                row += 1;
            }
            format!("{row}{letter}")
        })
}

/// Pair each passenger with a seat, in boarding order
pub fn assign_seats<'a>(passengers: &[&'a str]) -> Vec<(&'a str, String)> {
    passengers
        .iter()
        .copied()
        .zip(generate_seats(passengers.len()))
        .collect()
}

/// Ticket codes: seat followed by flight id, right-padded with `0` to 12
/// characters
pub fn generate_codes<'a, I>(seats: I, flight_id: &'a str) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: AsRef<str>,
{
    seats.into_iter().map(move |seat| {
        format!(
            "{:0<width$}",
            format!("{}{}", seat.as_ref(), flight_id),
            width = TICKET_CODE_LENGTH
        )
    })
}
