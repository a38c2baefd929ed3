//! Client-side filtering of the party table.
//!
//! Every criterion left empty imposes no constraint; a row is shown only when
//! all the others match.

use shared::{BalanceSign, Party};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFilter {
    /// Case-insensitive substring of the name or phone
    pub search: String,
    /// Exact category name
    pub category: String,
    /// `positive`, `negative` or `zero`
    pub balance: String,
}

impl TableFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.balance.is_empty()
    }

    pub fn matches(&self, party: &Party) -> bool {
        self.matches_search(party) && self.matches_category(party) && self.matches_balance(party)
    }

    fn matches_search(&self, party: &Party) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        party.name.to_lowercase().contains(&needle) || party.phone.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, party: &Party) -> bool {
        self.category.is_empty() || party.category == self.category
    }

    fn matches_balance(&self, party: &Party) -> bool {
        if self.balance.is_empty() {
            return true;
        }
        BalanceSign::parse(&self.balance) == Some(party.balance_sign())
    }
}

/// Rows of `parties` that pass `filter`, in their original order
pub fn filter_parties<'a>(parties: &'a [Party], filter: &TableFilter) -> Vec<&'a Party> {
    parties.iter().filter(|party| filter.matches(party)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: u64, name: &str, phone: &str, category: &str, balance: f64) -> Party {
        Party {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            category: category.to_string(),
            notes: String::new(),
            balance,
            created_at: String::new(),
            transactions: Vec::new(),
        }
    }

    fn rows() -> Vec<Party> {
        vec![
            party(1, "Ali Benali", "0555 10 20 30", "VIP", 1200.0),
            party(2, "Sara", "0661 22 33 44", "Regular", -50.0),
            party(3, "Karim", "0770 00 11 22", "Regular", 0.0),
        ]
    }

    fn ids(parties: Vec<&Party>) -> Vec<u64> {
        parties.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        let rows = rows();
        let filter = TableFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(filter_parties(&rows, &filter)), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_phone() {
        let rows = rows();

        let by_name = TableFilter { search: "ALI".to_string(), ..Default::default() };
        assert_eq!(ids(filter_parties(&rows, &by_name)), vec![1]);

        let by_phone = TableFilter { search: "0661".to_string(), ..Default::default() };
        assert_eq!(ids(filter_parties(&rows, &by_phone)), vec![2]);

        let nothing = TableFilter { search: "zzz".to_string(), ..Default::default() };
        assert!(filter_parties(&rows, &nothing).is_empty());
    }

    #[test]
    fn test_category_is_exact() {
        let rows = rows();
        let regular = TableFilter { category: "Regular".to_string(), ..Default::default() };
        assert_eq!(ids(filter_parties(&rows, &regular)), vec![2, 3]);

        let partial = TableFilter { category: "Reg".to_string(), ..Default::default() };
        assert!(filter_parties(&rows, &partial).is_empty());
    }

    #[test]
    fn test_balance_sign() {
        let rows = rows();
        for (value, expected) in [("positive", vec![1]), ("negative", vec![2]), ("zero", vec![3])] {
            let filter = TableFilter { balance: value.to_string(), ..Default::default() };
            assert_eq!(ids(filter_parties(&rows, &filter)), expected, "balance filter {}", value);
        }
    }

    #[test]
    fn test_all_criteria_must_pass() {
        let rows = rows();
        let filter = TableFilter {
            search: "a".to_string(),
            category: "Regular".to_string(),
            balance: "negative".to_string(),
        };
        assert_eq!(ids(filter_parties(&rows, &filter)), vec![2]);

        let conflicting = TableFilter {
            category: "VIP".to_string(),
            balance: "zero".to_string(),
            ..Default::default()
        };
        assert!(filter_parties(&rows, &conflicting).is_empty());
    }
}
