use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Milliseconds since Unix epoch.
pub type Timestamp = i64;

/// Number of milliseconds in common units.
pub const MS: i64 = 1_000;
pub const MINUTE_MS: i64 = 60 * MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Filter-bar sentinel that disables category matching.
pub const ALL_DEALS: &str = "All Deals";

/// Fixed set of catalog categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Books,
    Toys,
    Beauty,
    Sports,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeKitchen,
        Category::Books,
        Category::Toys,
        Category::Beauty,
        Category::Sports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Beauty => "Beauty",
            Category::Sports => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Labels shown in the category filter bar: the sentinel first, then every category.
pub fn category_labels() -> Vec<&'static str> {
    std::iter::once(ALL_DEALS)
        .chain(Category::ALL.iter().map(|c| c.label()))
        .collect()
}

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("deal {id}: discounted price {discounted} exceeds original price {original}")]
    PriceAboveOriginal {
        id: u32,
        discounted: f64,
        original: f64,
    },
    #[error("deal {id}: negative price")]
    NegativePrice { id: u32 },
    #[error("deal {id}: discount {percent}% out of range")]
    DiscountOutOfRange { id: u32, percent: u8 },
    #[error("duplicate deal id {0}")]
    DuplicateId(u32),
}

/// A single discounted product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: u32,
    pub title: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount_percent: u8,
    pub platform: String,
    pub image_url: String,
    pub deal_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    pub category: Category,
}

impl Deal {
    /// Check the price and discount invariants of a single record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.original_price < 0.0 || self.discounted_price < 0.0 {
            return Err(CatalogError::NegativePrice { id: self.id });
        }
        if self.discounted_price > self.original_price {
            return Err(CatalogError::PriceAboveOriginal {
                id: self.id,
                discounted: self.discounted_price,
                original: self.original_price,
            });
        }
        if self.discount_percent > 100 {
            return Err(CatalogError::DiscountOutOfRange {
                id: self.id,
                percent: self.discount_percent,
            });
        }
        Ok(())
    }

    pub fn matches(&self, category: &str, query_lower: &str) -> bool {
        let category_ok = category == ALL_DEALS || self.category.label() == category;
        category_ok && self.title.to_lowercase().contains(query_lower)
    }
}

/// Immutable list of deals loaded once at startup. Deserializing goes through
/// [`Catalog::new`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Deal>", into = "Vec<Deal>")]
pub struct Catalog {
    deals: Vec<Deal>,
}

impl Catalog {
    /// Build a catalog, rejecting records that break an invariant or reuse an id.
    pub fn new(deals: Vec<Deal>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::with_capacity(deals.len());
        for deal in &deals {
            deal.validate()?;
            if !seen.insert(deal.id) {
                return Err(CatalogError::DuplicateId(deal.id));
            }
        }
        Ok(Self { deals })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            deals: sample_deals(),
        }
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

impl TryFrom<Vec<Deal>> for Catalog {
    type Error = CatalogError;

    fn try_from(deals: Vec<Deal>) -> Result<Self, Self::Error> {
        Self::new(deals)
    }
}

impl From<Catalog> for Vec<Deal> {
    fn from(catalog: Catalog) -> Self {
        catalog.deals
    }
}

pub fn sample_deals() -> Vec<Deal> {
    vec![
        Deal {
            id: 1,
            title: "Sony WH-1000XM4 Wireless Noise Cancelling Headphones".into(),
            original_price: 349.99,
            discounted_price: 248.00,
            discount_percent: 29,
            platform: "Amazon".into(),
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80".into(),
            deal_url: "#".into(),
            expires_in: Some("2 days".into()),
            category: Category::Electronics,
        },
        Deal {
            id: 2,
            title: "Instant Pot Duo Plus 9-in-1 Electric Pressure Cooker".into(),
            original_price: 129.99,
            discounted_price: 89.99,
            discount_percent: 31,
            platform: "Amazon".into(),
            image_url: "https://images.unsplash.com/photo-1544233726-9f1d2b27be8b?auto=format&fit=crop&w=800&q=80".into(),
            deal_url: "#".into(),
            expires_in: Some("5 hours".into()),
            category: Category::HomeKitchen,
        },
        Deal {
            id: 3,
            title: "Nike Air Zoom Pegasus 38 Running Shoes".into(),
            original_price: 120.00,
            discounted_price: 89.99,
            discount_percent: 25,
            platform: "Nike".into(),
            image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&w=800&q=80".into(),
            deal_url: "#".into(),
            expires_in: None,
            category: Category::Fashion,
        },
    ]
}

/// Derive the visible subset of `deals`.
///
/// A deal is kept when the category is [`ALL_DEALS`] or equals the deal's category label,
/// and its title contains `query` case-insensitively. The category is an opaque string:
/// values outside the category set simply match nothing. Input order is preserved.
pub fn filter_deals(deals: &[Deal], category: &str, query: &str) -> Vec<Deal> {
    let query_lower = query.to_lowercase();
    let out: Vec<Deal> = deals
        .iter()
        .filter(|d| d.matches(category, &query_lower))
        .cloned()
        .collect();
    tracing::debug!(category, query, visible = out.len(), "filtered deals");
    out
}

/// Category + search state owned by the listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: String,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_DEALS.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    pub fn apply(&self, catalog: &Catalog) -> Vec<Deal> {
        filter_deals(catalog.deals(), &self.selected_category, &self.search_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_deal(id: u32, title: &str, category: Category) -> Deal {
        Deal {
            id,
            title: title.into(),
            original_price: 100.0,
            discounted_price: 80.0,
            discount_percent: 20,
            platform: "Test".into(),
            image_url: "https://example.com/img.png".into(),
            deal_url: "#".into(),
            expires_in: None,
            category,
        }
    }

    #[test]
    fn sample_catalog_holds_invariants() {
        let deals = sample_deals();
        let catalog = Catalog::new(deals.clone()).unwrap();
        assert_eq!(catalog.len(), 3);
        for d in catalog.deals() {
            assert!(d.discounted_price <= d.original_price);
            assert!(d.discount_percent <= 100);
        }
        assert_eq!(catalog.deals()[2].platform, "Nike");
    }

    #[test]
    fn all_deals_with_empty_query_is_identity() {
        let deals = sample_deals();
        let out = filter_deals(&deals, ALL_DEALS, "");
        assert_eq!(out, deals);
    }

    #[test]
    fn search_is_case_insensitive() {
        let deals = sample_deals();
        let out = filter_deals(&deals, ALL_DEALS, "nike");
        assert_eq!(out.len(), 1);
        assert!(out[0].title.starts_with("Nike Air Zoom"));

        let upper = filter_deals(&deals, ALL_DEALS, "INSTANT POT");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, 2);
    }

    #[test]
    fn category_and_query_both_apply() {
        let deals = vec![
            mk_deal(1, "Blue kettle", Category::HomeKitchen),
            mk_deal(2, "Blue sneakers", Category::Fashion),
            mk_deal(3, "Red kettle", Category::HomeKitchen),
        ];
        let out = filter_deals(&deals, "Home & Kitchen", "kettle");
        assert_eq!(out.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);

        let out = filter_deals(&deals, "Home & Kitchen", "blue");
        assert_eq!(out.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
        for d in &out {
            assert!(d.matches("Home & Kitchen", "blue"));
        }
    }

    #[test]
    fn unknown_category_yields_empty() {
        let deals = sample_deals();
        assert!(filter_deals(&deals, "Garden", "").is_empty());
        assert!(filter_deals(&deals, "electronics", "").is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let deals = vec![
            mk_deal(5, "Shoe rack", Category::HomeKitchen),
            mk_deal(2, "Running shoes", Category::Sports),
            mk_deal(9, "Shoe polish", Category::Beauty),
        ];
        let once = filter_deals(&deals, ALL_DEALS, "shoe");
        let twice = filter_deals(&once, ALL_DEALS, "shoe");
        assert_eq!(once, twice);
        assert_eq!(once.iter().map(|d| d.id).collect::<Vec<_>>(), vec![5, 2, 9]);
    }

    #[test]
    fn catalog_rejects_broken_records() {
        let mut bad = mk_deal(1, "Overpriced", Category::Toys);
        bad.discounted_price = 120.0;
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(CatalogError::PriceAboveOriginal { id: 1, .. })
        ));

        let mut pct = mk_deal(2, "Too generous", Category::Toys);
        pct.discount_percent = 101;
        assert_eq!(
            pct.validate(),
            Err(CatalogError::DiscountOutOfRange { id: 2, percent: 101 })
        );

        let dup = vec![
            mk_deal(4, "A", Category::Books),
            mk_deal(4, "B", Category::Books),
        ];
        assert_eq!(Catalog::new(dup).unwrap_err(), CatalogError::DuplicateId(4));

        let mut neg = mk_deal(5, "Refund", Category::Sports);
        neg.discounted_price = -1.0;
        assert_eq!(neg.validate(), Err(CatalogError::NegativePrice { id: 5 }));
    }

    #[test]
    fn catalog_deserialization_is_validated() {
        let json = serde_json::to_string(&Catalog::sample()).unwrap();
        assert!(json.starts_with('['));
        let decoded: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.len(), 3);

        let dup = serde_json::to_string(&vec![
            mk_deal(7, "A", Category::Books),
            mk_deal(7, "B", Category::Books),
        ])
        .unwrap();
        assert!(serde_json::from_str::<Catalog>(&dup).is_err());

        let mut over = mk_deal(8, "Overpriced", Category::Toys);
        over.discounted_price = 150.0;
        let over = serde_json::to_string(&vec![over]).unwrap();
        assert!(serde_json::from_str::<Catalog>(&over).is_err());
    }

    #[test]
    fn filter_state_defaults_and_applies() {
        let state = FilterState::default();
        assert_eq!(state.selected_category, ALL_DEALS);
        assert_eq!(state.apply(&Catalog::sample()).len(), 3);

        let fashion = FilterState {
            selected_category: "Fashion".into(),
            search_query: String::new(),
        };
        let out = fashion.apply(&Catalog::sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::Fashion);
    }

    #[test]
    fn category_labels_roundtrip() {
        let labels = category_labels();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], ALL_DEALS);
        for label in &labels[1..] {
            let c: Category = label.parse().unwrap();
            assert_eq!(c.label(), *label);
        }
        assert!("All Deals".parse::<Category>().is_err());
    }

    #[test]
    fn deal_serializes_with_display_category() {
        let json = serde_json::to_string(&sample_deals()[1]).unwrap();
        assert!(json.contains("\"category\":\"Home & Kitchen\""));
        assert!(json.contains("\"discountedPrice\":89.99"));
        let decoded: Deal = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.category, Category::HomeKitchen);
    }
}
