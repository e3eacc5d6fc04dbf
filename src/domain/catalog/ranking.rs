//! Three-tier product picks.

use serde::{Deserialize, Serialize};

use super::product::{ProductEntry, QualityTier};

/// A product picked for one tier slot of the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    /// Tier slot label: `cheapest`, `best_value` or `premium`. Other values
    /// are rendered as a generic suggestion.
    pub label: String,
    pub id: String,
    pub name: String,
    pub brand: String,
    pub store: String,
    pub price: f64,
    pub currency: String,
    pub url: String,
    pub quality_tier: QualityTier,
}

impl RankedItem {
    pub fn from_product(label: &str, product: &ProductEntry) -> Self {
        Self {
            label: label.to_string(),
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            store: product.store.clone(),
            price: product.price,
            currency: product.currency.clone(),
            url: product.url.clone(),
            quality_tier: product.quality_tier,
        }
    }
}

/// Position in the price-sorted candidates used when no product carries the
/// slot's tier.
#[derive(Debug, Clone, Copy)]
enum PriceRank {
    Cheapest,
    SecondCheapest,
    MostExpensive,
}

const SLOTS: &[(&str, QualityTier, PriceRank)] = &[
    ("cheapest", QualityTier::Budget, PriceRank::Cheapest),
    ("best_value", QualityTier::Value, PriceRank::SecondCheapest),
    ("premium", QualityTier::Premium, PriceRank::MostExpensive),
];

/// Picks up to three pairwise-distinct products from filtered candidates.
///
/// Each slot takes the first candidate (in catalog order) carrying its tier.
/// Without one it falls back to a price rank; a fallback that would repeat
/// an already chosen product drops the slot.
pub fn pick_top3(candidates: &[ProductEntry]) -> Vec<RankedItem> {
    let mut by_price: Vec<&ProductEntry> = candidates.iter().collect();
    by_price.sort_by(|a, b| a.price.total_cmp(&b.price));

    let mut chosen: Vec<RankedItem> = Vec::with_capacity(SLOTS.len());

    for (label, tier, rank) in SLOTS {
        let pick = candidates
            .iter()
            .find(|p| p.quality_tier == *tier)
            .or_else(|| by_rank(&by_price, *rank));

        let Some(product) = pick else {
            continue;
        };
        if chosen.iter().any(|item| item.id == product.id) {
            continue;
        }
        chosen.push(RankedItem::from_product(label, product));
    }

    chosen
}

fn by_rank<'a>(by_price: &[&'a ProductEntry], rank: PriceRank) -> Option<&'a ProductEntry> {
    match rank {
        PriceRank::Cheapest => by_price.first().copied(),
        PriceRank::SecondCheapest => by_price.get(1).copied(),
        PriceRank::MostExpensive => by_price.last().copied(),
    }
}
