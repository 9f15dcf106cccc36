use serde::{Deserialize, Serialize};

use super::company::Company;

/// What a [`Watchlist::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

/// The user's saved companies, in insertion order, keyed by ticker.
///
/// Serialized as a plain JSON array of companies so the persisted blob stays
/// readable by any other consumer of the same key.
///
/// **Invariant**: no two entries share a ticker (compared trimmed and
/// case-insensitively). Only [`toggle`](Self::toggle) mutates the list, and
/// deserialized input goes through [`from_companies`](Self::from_companies).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Company>", into = "Vec<Company>")]
pub struct Watchlist {
    companies: Vec<Company>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a watchlist from an arbitrary list, keeping the first entry per ticker.
    pub fn from_companies(companies: Vec<Company>) -> Self {
        let mut list = Self::new();
        for company in companies {
            if !list.contains(&company.ticker) {
                list.companies.push(company);
            }
        }
        list
    }

    /// Remove the company if its ticker is present, otherwise append it.
    /// Two toggles of the same ticker restore the previous state.
    pub fn toggle(&mut self, company: Company) -> ToggleAction {
        if let Some(idx) = self.position(&company.ticker) {
            self.companies.remove(idx);
            ToggleAction::Removed
        } else {
            self.companies.push(company);
            ToggleAction::Added
        }
    }

    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.position(ticker).is_some()
    }

    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&Company> {
        self.position(ticker).map(|idx| &self.companies[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Company> {
        self.companies.iter()
    }

    fn position(&self, ticker: &str) -> Option<usize> {
        self.companies.iter().position(|c| c.has_ticker(ticker))
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a Company;
    type IntoIter = std::slice::Iter<'a, Company>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Company>> for Watchlist {
    fn from(companies: Vec<Company>) -> Self {
        Self::from_companies(companies)
    }
}

impl From<Watchlist> for Vec<Company> {
    fn from(list: Watchlist) -> Self {
        list.companies
    }
}
