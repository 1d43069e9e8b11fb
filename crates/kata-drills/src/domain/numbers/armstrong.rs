//! Armstrong (narcissistic) numbers

/// Number of decimal digits in `number` (0 has one digit)
#[inline]
pub fn digit_count(number: u64) -> u32 {
    number.checked_ilog10().map_or(1, |log| log + 1)
}

/// Check whether `number` equals the sum of its digits each raised to the
/// number of digits
///
/// The sum is accumulated in `u128`, so every `u64` input is handled
/// without overflow.
pub fn is_armstrong_number(number: u64) -> bool {
    let power = digit_count(number);
    let mut rest = number;
    let mut sum: u128 = 0;

    loop {
        sum += ((rest % 10) as u128).pow(power);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    sum == number as u128
}
