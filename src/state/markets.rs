//! Innovation market board: listed projects, category filter and sort order
//!
//! All figures are fixed showcase data.

/// A listed innovation project
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub current_price: f64,
    /// Percent change
    pub price_change: f64,
    pub liquidity: u64,
    pub backers: u32,
    pub time_left: &'static str,
    /// Community probability of success, 0-100
    pub probability: u8,
    pub funding_goal: u64,
    pub raised: u64,
}

/// Liquidity at which a project is flagged as close to government matching
const NEAR_GOVERNMENT_FUNDING: u64 = 80_000;
const HIGH_PROBABILITY: u8 = 70;

impl Market {
    pub fn is_positive(&self) -> bool {
        self.price_change >= 0.0
    }

    pub fn progress_percent(&self) -> f64 {
        if self.funding_goal == 0 {
            return 0.0;
        }
        self.raised as f64 / self.funding_goal as f64 * 100.0
    }

    pub fn is_near_government_funding(&self) -> bool {
        self.liquidity >= NEAR_GOVERNMENT_FUNDING
    }

    pub fn is_probability_high(&self) -> bool {
        self.probability >= HIGH_PROBABILITY
    }
}

/// The showcase listing, in listing order (newest first)
pub fn mock_markets() -> Vec<Market> {
    vec![
        Market {
            title: "AI-Powered Diabetes Monitoring System",
            description: "Revolutionary continuous glucose monitoring using machine learning to predict blood sugar spikes before they happen.",
            category: "Biotechnology",
            current_price: 24.75,
            price_change: 8.2,
            liquidity: 87_500,
            backers: 234,
            time_left: "45d",
            probability: 78,
            funding_goal: 500_000,
            raised: 387_500,
        },
        Market {
            title: "Quantum-Enhanced Battery Technology",
            description: "Next-generation lithium-ion batteries with 300% longer life using quantum-engineered materials.",
            category: "Clean Energy",
            current_price: 156.80,
            price_change: -2.4,
            liquidity: 45_200,
            backers: 89,
            time_left: "23d",
            probability: 65,
            funding_goal: 1_000_000,
            raised: 452_000,
        },
        Market {
            title: "Autonomous Crop Monitoring Drones",
            description: "AI-powered drones that monitor crop health, predict yield, and optimize fertilizer application for Canadian farms.",
            category: "AgTech",
            current_price: 89.45,
            price_change: 15.7,
            liquidity: 92_300,
            backers: 167,
            time_left: "18d",
            probability: 82,
            funding_goal: 750_000,
            raised: 692_250,
        },
        Market {
            title: "Neural Interface for Paralysis Recovery",
            description: "Brain-computer interface technology helping paralyzed patients regain motor function through thought-controlled devices.",
            category: "Medical Devices",
            current_price: 342.10,
            price_change: 22.1,
            liquidity: 156_800,
            backers: 445,
            time_left: "67d",
            probability: 71,
            funding_goal: 2_000_000,
            raised: 1_420_000,
        },
        Market {
            title: "Carbon Capture Concrete",
            description: "Revolutionary building material that actively captures CO2 from the atmosphere while providing structural support.",
            category: "Clean Energy",
            current_price: 67.25,
            price_change: 5.8,
            liquidity: 34_600,
            backers: 78,
            time_left: "31d",
            probability: 59,
            funding_goal: 400_000,
            raised: 276_000,
        },
        Market {
            title: "Blockchain-Based Supply Chain",
            description: "Decentralized platform ensuring transparent and ethical sourcing for Canadian manufacturers and retailers.",
            category: "FinTech",
            current_price: 45.90,
            price_change: -1.2,
            liquidity: 28_400,
            backers: 156,
            time_left: "12d",
            probability: 68,
            funding_goal: 300_000,
            raised: 204_000,
        },
    ]
}

/// A category filter chip with its platform-wide project count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    pub name: &'static str,
    pub count: u32,
}

pub const ALL_CATEGORIES: &str = "All Categories";

pub const CATEGORY_FILTERS: &[CategoryFilter] = &[
    CategoryFilter { name: ALL_CATEGORIES, count: 1247 },
    CategoryFilter { name: "Biotechnology", count: 234 },
    CategoryFilter { name: "Clean Energy", count: 189 },
    CategoryFilter { name: "AgTech", count: 156 },
    CategoryFilter { name: "Medical Devices", count: 298 },
    CategoryFilter { name: "FinTech", count: 370 },
];

/// Sort order for the market list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Trending,
    Newest,
    PriceHigh,
    PriceLow,
    MostBacked,
}

impl SortOption {
    pub fn next(&self) -> Self {
        match self {
            Self::Trending => Self::Newest,
            Self::Newest => Self::PriceHigh,
            Self::PriceHigh => Self::PriceLow,
            Self::PriceLow => Self::MostBacked,
            Self::MostBacked => Self::Trending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Trending => "Trending",
            Self::Newest => "Newest",
            Self::PriceHigh => "Price: High to Low",
            Self::PriceLow => "Price: Low to High",
            Self::MostBacked => "Most Backed",
        }
    }

    /// Key used in the config file
    pub fn key(&self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Newest => "newest",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::MostBacked => "most-backed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [
            Self::Trending,
            Self::Newest,
            Self::PriceHigh,
            Self::PriceLow,
            Self::MostBacked,
        ]
        .into_iter()
        .find(|option| option.key() == key)
    }
}

/// Market list view state
#[derive(Debug, Clone)]
pub struct MarketBoard {
    markets: Vec<Market>,
    /// Index into [`CATEGORY_FILTERS`]
    pub filter_index: usize,
    pub sort: SortOption,
    /// Index into [`MarketBoard::visible`]
    pub selected_index: usize,
}

impl Default for MarketBoard {
    fn default() -> Self {
        Self::new(mock_markets())
    }
}

impl MarketBoard {
    pub fn new(markets: Vec<Market>) -> Self {
        Self {
            markets,
            filter_index: 0,
            sort: SortOption::default(),
            selected_index: 0,
        }
    }

    pub fn filter(&self) -> &'static CategoryFilter {
        &CATEGORY_FILTERS[self.filter_index % CATEGORY_FILTERS.len()]
    }

    /// Select a category filter by name; unknown names are ignored
    pub fn set_category(&mut self, name: &str) -> bool {
        match CATEGORY_FILTERS.iter().position(|f| f.name == name) {
            Some(index) => {
                self.filter_index = index;
                self.selected_index = 0;
                true
            }
            None => false,
        }
    }

    pub fn next_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % CATEGORY_FILTERS.len();
        self.selected_index = 0;
    }

    pub fn prev_filter(&mut self) {
        let len = CATEGORY_FILTERS.len();
        self.filter_index = (self.filter_index + len - 1) % len;
        self.selected_index = 0;
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.selected_index = 0;
    }

    /// Markets matching the filter, in sort order
    pub fn visible(&self) -> Vec<&Market> {
        let category = self.filter().name;
        let mut visible: Vec<&Market> = self
            .markets
            .iter()
            .filter(|m| category == ALL_CATEGORIES || m.category == category)
            .collect();

        match self.sort {
            SortOption::Newest => {}
            SortOption::Trending => {
                visible.sort_by(|a, b| b.price_change.total_cmp(&a.price_change))
            }
            SortOption::PriceHigh => {
                visible.sort_by(|a, b| b.current_price.total_cmp(&a.current_price))
            }
            SortOption::PriceLow => {
                visible.sort_by(|a, b| a.current_price.total_cmp(&b.current_price))
            }
            SortOption::MostBacked => visible.sort_by(|a, b| b.backers.cmp(&a.backers)),
        }
        visible
    }

    pub fn selected(&self) -> Option<&Market> {
        self.visible().get(self.selected_index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}
