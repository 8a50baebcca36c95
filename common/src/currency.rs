use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in whole Philippine pesos. All prices and fees are stored this way.
///
/// Arithmetic saturates at `u64::MAX` rather than wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pesos(pub u64);

impl fmt::Display for Pesos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{}", group_thousands(self.0))
    }
}

impl std::ops::Add for Pesos {
    type Output = Pesos;

    fn add(self, rhs: Pesos) -> Pesos {
        Pesos(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Pesos {
    fn sum<I: Iterator<Item = Pesos>>(iter: I) -> Pesos {
        iter.fold(Pesos(0), |acc, p| acc + p)
    }
}

/// Format a peso amount for display, e.g. `₱1,540`.
pub fn format_amount(amount: u64) -> String {
    Pesos(amount).to_string()
}

/// Format a weight in kilograms, e.g. `8,000 kg`.
pub fn format_kg(kg: u64) -> String {
    format!("{} kg", group_thousands(kg))
}

/// Insert comma separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "₱0");
        assert_eq!(format_amount(420), "₱420");
        assert_eq!(format_amount(1540), "₱1,540");
        assert_eq!(format_amount(1_234_567), "₱1,234,567");
    }

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(500), "500 kg");
        assert_eq!(format_kg(8000), "8,000 kg");
        assert_eq!(format_kg(15000), "15,000 kg");
    }

    #[test]
    fn test_pesos_sum() {
        let total: Pesos = [Pesos(120), Pesos(120), Pesos(180)].into_iter().sum();
        assert_eq!(total, Pesos(420));
        assert_eq!(total + Pesos(45), Pesos(465));
    }

    #[test]
    fn test_pesos_saturate() {
        assert_eq!(Pesos(u64::MAX) + Pesos(45), Pesos(u64::MAX));
        let total: Pesos = [Pesos(u64::MAX - 1), Pesos(2), Pesos(3)].into_iter().sum();
        assert_eq!(total, Pesos(u64::MAX));
    }
}
