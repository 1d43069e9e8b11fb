//! Currency exchange helpers
//!
//! Amounts are plain `f64` values in the respective currency; bill
//! denominations and counts are whole numbers.

use thiserror::Error;

/// Currency exchange errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExchangeError {
    /// Amount, rate or denomination that is zero, negative or not finite
    #[error("{name} must be positive, found {value}")]
    NotPositive { name: &'static str, value: f64 },
    /// Exchanging more than the available budget
    #[error("cannot exchange {exchanging} out of a budget of {budget}")]
    ExceedsBudget { budget: f64, exchanging: f64 },
    /// Bill count or total does not fit in u64
    #[error("value of bills overflows")]
    Overflow,
}

fn positive(name: &'static str, value: f64) -> Result<f64, ExchangeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExchangeError::NotPositive { name, value })
    }
}

/// Floor of `amount / denomination` as a bill count
fn whole_bills(amount: f64, denomination: u64) -> Result<u64, ExchangeError> {
    let bills = (amount / denomination as f64).floor();
    if bills >= u64::MAX as f64 {
        return Err(ExchangeError::Overflow);
    }
    Ok(bills as u64)
}

fn positive_bill(name: &'static str, value: u64) -> Result<u64, ExchangeError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ExchangeError::NotPositive {
            name,
            value: value as f64,
        })
    }
}

/// Foreign currency received for `budget` at `exchange_rate`
pub fn exchange_money(budget: f64, exchange_rate: f64) -> Result<f64, ExchangeError> {
    Ok(positive("budget", budget)? / positive("exchange rate", exchange_rate)?)
}

/// Money left after exchanging `exchanging_value` out of `budget`
pub fn get_change(budget: f64, exchanging_value: f64) -> Result<f64, ExchangeError> {
    let budget = positive("budget", budget)?;
    if !exchanging_value.is_finite() || exchanging_value < 0.0 {
        return Err(ExchangeError::NotPositive {
            name: "exchanging value",
            value: exchanging_value,
        });
    }
    if exchanging_value > budget {
        return Err(ExchangeError::ExceedsBudget {
            budget,
            exchanging: exchanging_value,
        });
    }
    Ok(budget - exchanging_value)
}

/// Total value of `number_of_bills` bills of `denomination`
pub fn get_value_of_bills(denomination: u64, number_of_bills: u64) -> Result<u64, ExchangeError> {
    positive_bill("denomination", denomination)?
        .checked_mul(positive_bill("number of bills", number_of_bills)?)
        .ok_or(ExchangeError::Overflow)
}

/// Number of whole bills of `denomination` obtainable from `amount`
pub fn get_number_of_bills(amount: f64, denomination: u64) -> Result<u64, ExchangeError> {
    let amount = positive("amount", amount)?;
    let denomination = positive_bill("denomination", denomination)?;
    whole_bills(amount, denomination)
}

/// Amount left over after taking as many bills of `denomination` as possible
pub fn get_leftover_of_bills(amount: f64, denomination: u64) -> Result<f64, ExchangeError> {
    let amount = positive("amount", amount)?;
    let denomination = positive_bill("denomination", denomination)?;
    Ok(amount.rem_euclid(denomination as f64))
}

/// Maximum value in whole bills obtainable after the exchange fee
///
/// `spread` is the fee percentage added on top of `exchange_rate`.
pub fn exchangeable_value(
    budget: f64,
    exchange_rate: f64,
    spread: u32,
    denomination: u64,
) -> Result<u64, ExchangeError> {
    let exchange_rate = positive("exchange rate", exchange_rate)?;
    let denomination = positive_bill("denomination", denomination)?;

    let rate_with_fee = exchange_rate * (1.0 + spread as f64 / 100.0);
    let exchanged = exchange_money(budget, rate_with_fee)?;
    whole_bills(exchanged, denomination)?
        .checked_mul(denomination)
        .ok_or(ExchangeError::Overflow)
}
