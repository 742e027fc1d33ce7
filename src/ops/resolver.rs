use crate::types::product::{Catalog, Product};

/// How the resolved item list relates to the reel time: products tagged for
/// exactly this moment, or the whole catalog as similar picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Similar,
}

/// One resolution of reel time to products, snapshotted when the panel opens.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub mode: MatchMode,
    pub items: Vec<Product>,
    pub position_sec: u64,
}

impl Resolution {
    pub fn header_label(&self) -> &'static str {
        match self.mode {
            MatchMode::Exact => "Matches in this moment",
            MatchMode::Similar => "Similar picks",
        }
    }
}

/// Map a reel time to the products to show. Products whose inclusive interval
/// contains `position_sec` win, in catalog order; when none match, the whole
/// catalog is returned so the viewer never sees a blank panel. Pure and
/// deterministic; an empty catalog yields an empty list either way.
pub fn resolve_at(catalog: &Catalog, position_sec: u64) -> Resolution {
    let exact: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| p.contains_sec(position_sec))
        .cloned()
        .collect();
    if !exact.is_empty() {
        Resolution {
            mode: MatchMode::Exact,
            items: exact,
            position_sec,
        }
    } else {
        Resolution {
            mode: MatchMode::Similar,
            items: catalog.products().to_vec(),
            position_sec,
        }
    }
}
