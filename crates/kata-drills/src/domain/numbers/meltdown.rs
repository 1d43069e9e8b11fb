//! Nuclear reactor safety checks

use std::fmt;
use thiserror::Error;

/// Reactor check errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeltdownError {
    /// Theoretical maximum power must be positive
    #[error("theoretical max power must be positive, found {0}")]
    InvalidMaxPower(f64),
}

/// Efficiency band of the reactor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Efficiency {
    /// 80% or more
    Green,
    /// 60% up to 80%
    Orange,
    /// 30% up to 60%
    Red,
    /// Below 30%
    Black,
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// Fail-safe status code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactorStatus {
    Low,
    Normal,
    Danger,
}

impl fmt::Display for ReactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::Danger => "DANGER",
        })
    }
}

/// Criticality is balanced when temperature is below 800 K, more than 500
/// neutrons are emitted per second and their product stays below 500000
pub fn is_criticality_balanced(temperature: f64, neutrons_emitted: f64) -> bool {
    temperature < 800.0 && neutrons_emitted > 500.0 && temperature * neutrons_emitted < 500_000.0
}

/// Efficiency band of `voltage * current` relative to `theoretical_max_power`
pub fn reactor_efficiency(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> Result<Efficiency, MeltdownError> {
    if !(theoretical_max_power > 0.0) {
        return Err(MeltdownError::InvalidMaxPower(theoretical_max_power));
    }

    let efficiency = voltage * current * 100.0 / theoretical_max_power;
    Ok(if efficiency >= 80.0 {
        Efficiency::Green
    } else if efficiency >= 60.0 {
        Efficiency::Orange
    } else if efficiency >= 30.0 {
        Efficiency::Red
    } else {
        Efficiency::Black
    })
}

/// Status code for `temperature * neutrons` relative to `threshold`
///
/// Below 90% is LOW, within ±10% is NORMAL, anything else is DANGER.
pub fn fail_safe(
    temperature: f64,
    neutrons_produced_per_second: f64,
    threshold: f64,
) -> ReactorStatus {
    let product = temperature * neutrons_produced_per_second;
    let low = threshold * 0.9;
    let high = threshold * 1.1;

    if product < low {
        ReactorStatus::Low
    } else if product <= high {
        ReactorStatus::Normal
    } else {
        ReactorStatus::Danger
    }
}
