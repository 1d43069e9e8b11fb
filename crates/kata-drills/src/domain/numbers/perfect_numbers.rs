//! Nicomachus' classification of positive integers

use std::fmt;
use thiserror::Error;

/// Perfect number errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerfectError {
    /// Zero has no classification
    #[error("classification is only possible for positive integers")]
    NotPositive,
}

/// Classification by aliquot sum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Aliquot sum below the number
    Deficient,
    /// Aliquot sum equal to the number
    Perfect,
    /// Aliquot sum above the number
    Abundant,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Perfect => "perfect",
            Self::Abundant => "abundant",
        })
    }
}

/// Sum of the proper divisors of `number`
///
/// Computed from the prime factorization as σ(n) − n. The sum of an
/// abundant number near u64::MAX does not fit in u64, hence u128.
pub fn aliquot_sum(number: u64) -> u128 {
    if number <= 1 {
        return 0;
    }

    let mut rest = number;
    let mut divisor_sum = 1u128;
    let mut p = 2u64;
    while p <= rest / p {
        if rest % p == 0 {
            let mut power = 1u128;
            let mut term = 1u128;
            while rest % p == 0 {
                rest /= p;
                power *= u128::from(p);
                term += power;
            }
            divisor_sum *= term;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        divisor_sum *= u128::from(rest) + 1;
    }
    divisor_sum - u128::from(number)
}

/// Classify `number` as perfect, abundant or deficient
pub fn classify(number: u64) -> Result<Classification, PerfectError> {
    if number == 0 {
        return Err(PerfectError::NotPositive);
    }

    Ok(match aliquot_sum(number).cmp(&u128::from(number)) {
        std::cmp::Ordering::Less => Classification::Deficient,
        std::cmp::Ordering::Equal => Classification::Perfect,
        std::cmp::Ordering::Greater => Classification::Abundant,
    })
}
