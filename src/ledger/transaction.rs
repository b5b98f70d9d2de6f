use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable amount/description pair recorded in a budget tracker.
///
/// Transactions carry no identity beyond their value; two transactions with
/// the same amount and description are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    amount: f64,
    description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}$ {}", self.amount, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_amount_to_two_decimals() {
        let record = Transaction::new(-10.1, "Lunch 02/17");
        assert_eq!(record.to_string(), "-10.10$ Lunch 02/17");
    }

    #[test]
    fn equality_is_structural() {
        let a = Transaction::new(5.0, "Coffee");
        let b = Transaction::new(5.0, "Coffee");
        assert_eq!(a, b);
    }
}
