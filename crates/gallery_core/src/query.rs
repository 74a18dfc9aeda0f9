use crate::PricingOption;

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceDesc,
    PriceAsc,
}

impl SortKey {
    /// Parses the short names used by the sort selector (`name`, `high`, `low`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::NameAsc),
            "high" => Some(Self::PriceDesc),
            "low" => Some(Self::PriceAsc),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::PriceDesc => "high",
            Self::PriceAsc => "low",
        }
    }
}

/// Selected pricing categories. Empty means no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSet {
    paid: bool,
    free: bool,
    view_only: bool,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(options: &[PricingOption]) -> Self {
        let mut set = Self::default();
        for option in options {
            set.insert(*option);
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        !(self.paid || self.free || self.view_only)
    }

    pub fn contains(&self, option: PricingOption) -> bool {
        *self.slot(option)
    }

    pub fn insert(&mut self, option: PricingOption) {
        *self.slot_mut(option) = true;
    }

    pub fn toggle(&mut self, option: PricingOption) {
        let slot = self.slot_mut(option);
        *slot = !*slot;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an item of `option` passes this filter.
    pub fn admits(&self, option: PricingOption) -> bool {
        self.is_empty() || self.contains(option)
    }

    pub fn iter(&self) -> impl Iterator<Item = PricingOption> + '_ {
        PricingOption::ALL
            .into_iter()
            .filter(move |option| self.contains(*option))
    }

    fn slot(&self, option: PricingOption) -> &bool {
        match option {
            PricingOption::Paid => &self.paid,
            PricingOption::Free => &self.free,
            PricingOption::ViewOnly => &self.view_only,
        }
    }

    fn slot_mut(&mut self, option: PricingOption) -> &mut bool {
        match option {
            PricingOption::Paid => &mut self.paid,
            PricingOption::Free => &mut self.free,
            PricingOption::ViewOnly => &mut self.view_only,
        }
    }
}

/// User-editable query: search text, pricing filters and sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search_text: String,
    pub filters: FilterSet,
    pub sort_key: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }
}
