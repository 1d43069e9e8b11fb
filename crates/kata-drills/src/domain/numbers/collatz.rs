//! Collatz conjecture step counting

use thiserror::Error;

/// Collatz errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollatzError {
    /// Zero never reaches one
    #[error("only positive integers are allowed")]
    NotPositive,
    /// An intermediate value exceeded u64
    #[error("sequence starting at {0} overflows u64")]
    Overflow(u64),
}

/// Count the steps needed to reach 1
///
/// Even numbers are halved, odd numbers become `3n + 1`.
pub fn steps(number: u64) -> Result<u32, CollatzError> {
    if number == 0 {
        return Err(CollatzError::NotPositive);
    }

    let mut n = number;
    let mut count = 0;
    while n != 1 {
        n = if n % 2 == 0 {
            n / 2
        } else {
            n.checked_mul(3)
                .and_then(|m| m.checked_add(1))
                .ok_or(CollatzError::Overflow(number))?
        };
        count += 1;
    }

    Ok(count)
}
