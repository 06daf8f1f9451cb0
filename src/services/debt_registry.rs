use crate::models::DebtStatus;
use std::collections::HashSet;

/// Lookup against the external registry of debtors
pub trait DebtRegistry: Send + Sync {
    /// Returns true when the identifier has no active debts
    fn is_clear(&self, seeker_id: &str) -> bool;

    fn debt_status(&self, seeker_id: &str) -> DebtStatus {
        if self.is_clear(seeker_id) {
            DebtStatus::Clear
        } else {
            DebtStatus::Flagged
        }
    }
}

/// Registry backed by a fixed set of debtor identifiers
#[derive(Debug, Clone, Default)]
pub struct InMemoryDebtRegistry {
    debtors: HashSet<String>,
}

impl InMemoryDebtRegistry {
    pub fn new<I, S>(debtors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            debtors: debtors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_debtor(&mut self, seeker_id: impl Into<String>) {
        self.debtors.insert(seeker_id.into());
    }

    pub fn remove_debtor(&mut self, seeker_id: &str) {
        self.debtors.remove(seeker_id);
    }

    pub fn len(&self) -> usize {
        self.debtors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debtors.is_empty()
    }
}

impl DebtRegistry for InMemoryDebtRegistry {
    fn is_clear(&self, seeker_id: &str) -> bool {
        !self.debtors.contains(seeker_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let mut registry = InMemoryDebtRegistry::new(["12345678A"]);

        assert!(!registry.is_clear("12345678A"));
        assert_eq!(registry.debt_status("12345678A"), DebtStatus::Flagged);
        assert_eq!(registry.debt_status("11111111X"), DebtStatus::Clear);

        registry.add_debtor("11111111X");
        assert!(!registry.is_clear("11111111X"));

        registry.remove_debtor("12345678A");
        assert!(registry.is_clear("12345678A"));
        assert_eq!(registry.len(), 1);
    }
}
