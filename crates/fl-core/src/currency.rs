//! The currency wallet.

use serde::{Deserialize, Serialize};

use crate::fate::FatePoints;

/// A spendable currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The primary currency: one random unlock from a chosen table.
    Key,
    /// Omni-Key: unlock a specific item of your choice.
    SpecialKey,
    /// Unlock a random item from a random table.
    ChaosKey,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => write!(f, "Key"),
            Self::SpecialKey => write!(f, "Omni-Key"),
            Self::ChaosKey => write!(f, "Chaos Key"),
        }
    }
}

/// Balances of the three key currencies plus the Fate Points counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    keys: u32,
    special_keys: u32,
    chaos_keys: u32,
    /// Pity counter.
    pub fate: FatePoints,
}

impl Wallet {
    /// Create a wallet holding only `keys` Keys.
    pub fn with_keys(keys: u32) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Create a wallet from raw balances.
    pub fn from_parts(keys: u32, special_keys: u32, chaos_keys: u32, fate: FatePoints) -> Self {
        Self {
            keys,
            special_keys,
            chaos_keys,
            fate,
        }
    }

    /// Key balance.
    pub fn keys(&self) -> u32 {
        self.keys
    }

    /// Omni-Key balance.
    pub fn special_keys(&self) -> u32 {
        self.special_keys
    }

    /// Chaos Key balance.
    pub fn chaos_keys(&self) -> u32 {
        self.chaos_keys
    }

    /// Balance of any currency.
    pub fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Key => self.keys,
            Currency::SpecialKey => self.special_keys,
            Currency::ChaosKey => self.chaos_keys,
        }
    }

    /// Add `amount` of a currency.
    pub fn credit(&mut self, currency: Currency, amount: u32) {
        let slot = self.slot(currency);
        *slot = slot.saturating_add(amount);
    }

    /// Remove `amount` of a currency. Returns false and changes nothing when
    /// the balance is short.
    pub fn debit(&mut self, currency: Currency, amount: u32) -> bool {
        let slot = self.slot(currency);
        match slot.checked_sub(amount) {
            Some(rest) => {
                *slot = rest;
                true
            }
            None => false,
        }
    }

    fn slot(&mut self, currency: Currency) -> &mut u32 {
        match currency {
            Currency::Key => &mut self.keys,
            Currency::SpecialKey => &mut self.special_keys,
            Currency::ChaosKey => &mut self.chaos_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_and_debit() {
        let mut wallet = Wallet::with_keys(3);
        wallet.credit(Currency::ChaosKey, 1);
        assert_eq!(wallet.chaos_keys(), 1);
        assert!(wallet.debit(Currency::Key, 2));
        assert_eq!(wallet.keys(), 1);
    }

    #[test]
    fn overdraft_refused() {
        let mut wallet = Wallet::with_keys(1);
        assert!(!wallet.debit(Currency::Key, 2));
        assert_eq!(wallet.keys(), 1);
        assert!(!wallet.debit(Currency::SpecialKey, 1));
        assert_eq!(wallet.balance(Currency::SpecialKey), 0);
    }

    #[test]
    fn currency_display() {
        assert_eq!(Currency::SpecialKey.to_string(), "Omni-Key");
        assert_eq!(Currency::ChaosKey.to_string(), "Chaos Key");
    }
}
