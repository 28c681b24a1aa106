//! Platform headline figures shown above the market board

/// Direction of a tile's change figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Neutral,
}

/// One headline statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    /// Rendered with the accent colour
    pub featured: bool,
}

pub const STAT_TILES: [StatTile; 5] = [
    StatTile {
        title: "Total Market Cap",
        value: "$45.2M",
        change: "+12.5%",
        trend: Trend::Up,
        featured: true,
    },
    StatTile {
        title: "Active Projects",
        value: "1,247",
        change: "+8.2%",
        trend: Trend::Up,
        featured: false,
    },
    StatTile {
        title: "Canadian Innovators",
        value: "18,543",
        change: "+15.7%",
        trend: Trend::Up,
        featured: false,
    },
    StatTile {
        title: "SRED Credits",
        value: "$23.1M",
        change: "+22.1%",
        trend: Trend::Up,
        featured: false,
    },
    StatTile {
        title: "Gov. Funded",
        value: "342",
        change: "This month",
        trend: Trend::Neutral,
        featured: false,
    },
];
