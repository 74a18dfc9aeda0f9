use std::fmt;

/// Closed pricing category of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PricingOption {
    Paid,
    Free,
    ViewOnly,
}

impl PricingOption {
    pub const ALL: [PricingOption; 3] = [Self::Paid, Self::Free, Self::ViewOnly];

    /// Maps the integer code used on the wire (0/1/2).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Paid),
            1 => Some(Self::Free),
            2 => Some(Self::ViewOnly),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Paid => 0,
            Self::Free => 1,
            Self::ViewOnly => 2,
        }
    }

    /// Name of the boolean URL parameter that selects this option.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Free => "free",
            Self::ViewOnly => "view",
        }
    }

    /// Exact match on the URL parameter name; `PAID` is not `paid`.
    pub fn from_param_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.param_name() == name)
    }
}

impl fmt::Display for PricingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Free => write!(f, "Free"),
            Self::ViewOnly => write!(f, "View Only"),
        }
    }
}

/// One fetched gallery entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    id: String,
    title: String,
    creator: String,
    pricing: PricingOption,
    price: Option<f64>,
    image_path: String,
}

impl ContentItem {
    /// Builds an item; the price is only kept for [`PricingOption::Paid`] items
    /// and negative prices are clamped to zero.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        creator: impl Into<String>,
        pricing: PricingOption,
        price: Option<f64>,
        image_path: impl Into<String>,
    ) -> Self {
        let price = match pricing {
            PricingOption::Paid => price.filter(|p| p.is_finite()).map(|p| p.max(0.0)),
            PricingOption::Free | PricingOption::ViewOnly => None,
        };
        Self {
            id: id.into(),
            title: title.into(),
            creator: creator.into(),
            pricing,
            price,
            image_path: image_path.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn pricing(&self) -> PricingOption {
        self.pricing
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Price used for ordering; absent prices count as zero.
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Label shown on a card's price line.
    pub fn price_label(&self) -> String {
        match self.pricing {
            PricingOption::Paid => format!("${:.2}", self.sort_price()),
            PricingOption::Free => "FREE".to_string(),
            PricingOption::ViewOnly => "View Only".to_string(),
        }
    }
}
