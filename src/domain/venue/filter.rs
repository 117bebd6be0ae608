// src/domain/venue/filter.rs
//
// Budget and capacity filters applied over a loaded venue list.
// A venue whose price or capacity cannot be parsed only passes the `All` option.

use serde::{Deserialize, Serialize};

use super::entity::Venue;

/// Budget bands, compared against the upper bound of the venue price (lakhs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFilter {
    #[default]
    All,
    Under20,
    From20To50,
    From50To100,
    Over100,
}

/// Guest-count bands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityFilter {
    #[default]
    All,
    Under250,
    From250To500,
    From500To1000,
    Over1000,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFilter {
    pub budget: BudgetFilter,
    pub capacity: CapacityFilter,
}

impl BudgetFilter {
    pub fn matches(&self, venue: &Venue) -> bool {
        if *self == BudgetFilter::All {
            return true;
        }
        let Some(lakhs) = venue.upper_price_lakhs() else {
            return false;
        };
        match self {
            BudgetFilter::All => true,
            BudgetFilter::Under20 => lakhs < 20.0,
            BudgetFilter::From20To50 => (20.0..=50.0).contains(&lakhs),
            BudgetFilter::From50To100 => (50.0..=100.0).contains(&lakhs),
            BudgetFilter::Over100 => lakhs > 100.0,
        }
    }
}

impl CapacityFilter {
    pub fn matches(&self, venue: &Venue) -> bool {
        if *self == CapacityFilter::All {
            return true;
        }
        let Some(guests) = venue.capacity_value() else {
            return false;
        };
        match self {
            CapacityFilter::All => true,
            CapacityFilter::Under250 => guests < 250,
            CapacityFilter::From250To500 => (250..=500).contains(&guests),
            CapacityFilter::From500To1000 => (500..=1000).contains(&guests),
            CapacityFilter::Over1000 => guests > 1000,
        }
    }
}

impl VenueFilter {
    pub fn new(budget: BudgetFilter, capacity: CapacityFilter) -> Self {
        Self { budget, capacity }
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        self.budget.matches(venue) && self.capacity.matches(venue)
    }

    /// Keeps matching venues in their original order
    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|v| self.matches(v)).collect()
    }
}

impl std::fmt::Display for BudgetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetFilter::All => write!(f, "All Budgets"),
            BudgetFilter::Under20 => write!(f, "< ₹20 Lakhs"),
            BudgetFilter::From20To50 => write!(f, "₹20-50 Lakhs"),
            BudgetFilter::From50To100 => write!(f, "₹50-100 Lakhs"),
            BudgetFilter::Over100 => write!(f, "> ₹100 Lakhs"),
        }
    }
}

impl std::fmt::Display for CapacityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityFilter::All => write!(f, "All Capacities"),
            CapacityFilter::Under250 => write!(f, "< 250"),
            CapacityFilter::From250To500 => write!(f, "250-500"),
            CapacityFilter::From500To1000 => write!(f, "500-1000"),
            CapacityFilter::Over1000 => write!(f, "> 1000"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, price: &str, capacity: &str) -> Venue {
        Venue {
            id: id.to_string(),
            price: price.to_string(),
            capacity: capacity.to_string(),
            ..Venue::default()
        }
    }

    #[test]
    fn test_all_filter_accepts_unparseable_venue() {
        let v = venue("v1", "On request", "");
        assert!(VenueFilter::default().matches(&v));
    }

    #[test]
    fn test_budget_bands_use_upper_bound() {
        let v = venue("v1", "20 - 50 Lakhs", "300");
        assert!(BudgetFilter::From20To50.matches(&v));
        assert!(BudgetFilter::From50To100.matches(&v));
        assert!(!BudgetFilter::Under20.matches(&v));
        assert!(!BudgetFilter::Over100.matches(&v));
    }

    #[test]
    fn test_capacity_band_edges_are_inclusive() {
        assert!(CapacityFilter::From250To500.matches(&venue("a", "", "250")));
        assert!(CapacityFilter::From250To500.matches(&venue("b", "", "500")));
        assert!(!CapacityFilter::Under250.matches(&venue("c", "", "250")));
        assert!(CapacityFilter::Over1000.matches(&venue("d", "", "1001")));
    }

    #[test]
    fn test_specific_filter_rejects_unparseable_venue() {
        let v = venue("v1", "On request", "lots");
        assert!(!BudgetFilter::Under20.matches(&v));
        assert!(!CapacityFilter::Under250.matches(&v));
    }

    #[test]
    fn test_apply_keeps_order() {
        let venues = vec![
            venue("v1", "10 - 15 Lakhs", "200"),
            venue("v2", "60 - 90 Lakhs", "800"),
            venue("v3", "5 - 12 Lakhs", "150"),
        ];
        let filter = VenueFilter::new(BudgetFilter::Under20, CapacityFilter::Under250);
        let ids: Vec<&str> = filter.apply(&venues).iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v3"]);
    }
}
