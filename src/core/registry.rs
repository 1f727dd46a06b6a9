use crate::domain::model::Region;

/// Reference trade hubs, in display order.
pub const TRADE_HUBS: [(&str, u64); 5] = [
    ("Jita", 10000002),
    ("Amarr", 10000043),
    ("Dodixie", 10000032),
    ("Rens", 10000030),
    ("Hek", 10000042),
];

/// Ordered set of regions queried per invocation. Declaration order is the
/// order regions are fetched and rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn from_regions(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn trade_hubs() -> Self {
        Self::from_regions(
            TRADE_HUBS
                .iter()
                .map(|(name, id)| Region::new(*name, *id))
                .collect(),
        )
    }

    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|region| region.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::trade_hubs()
    }
}
