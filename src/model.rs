//! Domain read model consumed by the report writer.
//!
//! Everything here is plain data. The crate renders these types but never
//! creates, validates, or persists them on its own behalf: callers hand in
//! fully-populated snapshots and get text back. The population helpers below
//! exist so callers and tests can build those snapshots while keeping the
//! structural invariants (unique catalog keys, unique competitors); none of
//! them perform validation or lifecycle logic.
//!
//! Ordered collections are `Vec`s of typed pairs. Reports iterate them in
//! insertion order, which is the ordering contract: whatever order the
//! caller's collection yields is the order that renders.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product brand, identified by name within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A catalog product. The brand is owned and always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: Brand,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: Brand) -> Self {
        Self { name: name.into(), brand }
    }
}

/// Price and stock for one listing in a retailer's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Unit price in euro. `Decimal` keeps the scale it was built with, so
    /// a price entered as 9.99 renders as 9.99 and one entered as 100.0
    /// renders as 100.0.
    pub price: Decimal,
    pub stock: u32,
}

impl ItemInfo {
    pub fn new(price: Decimal, stock: u32) -> Self {
        Self { price, stock }
    }
}

/// A retailer and its catalog.
///
/// The catalog is an insertion-ordered mapping from product to price/stock:
/// reports walk it in listing order, and [`Retailer::add_item`] keeps product
/// keys unique by replacing an existing listing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retailer {
    pub name: String,
    pub items: Vec<(Product, ItemInfo)>,
}

impl Retailer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), items: Vec::new() }
    }

    /// List a product. Re-listing an already-present product overwrites its
    /// price and stock without changing its position.
    pub fn add_item(&mut self, product: Product, info: ItemInfo) {
        if let Some(entry) = self.items.iter_mut().find(|(p, _)| *p == product) {
            entry.1 = info;
        } else {
            self.items.push((product, info));
        }
    }

    /// Price and stock for a product, if this retailer lists it.
    pub fn item_info(&self, product: &Product) -> Option<&ItemInfo> {
        self.items.iter().find(|(p, _)| p == product).map(|(_, info)| info)
    }
}

/// A registered user, identified by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

/// A product review left by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1-5 by caller convention. Rendered as supplied, never
    /// clamped or validated here.
    pub rating: u8,
    pub feedback: String,
}

impl Review {
    pub fn new(rating: u8, feedback: impl Into<String>) -> Self {
        Self { rating, feedback: feedback.into() }
    }
}

/// Lifecycle state of a competition, derived from its two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionStatus {
    NotStarted,
    Started,
    Ended,
}

/// A brand-sponsored competition with a money prize.
///
/// The two flags encode three states (see [`Competition::status`]); upstream
/// guarantees `has_ended` implies `has_started` and sets `winner` only once
/// the competition has ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub title: String,
    pub description: String,
    pub brand: Brand,
    pub prize: Decimal,
    pub has_started: bool,
    pub has_ended: bool,
    pub winner: Option<User>,
    /// Competing users, unique, in registration order.
    pub competitors: Vec<User>,
}

impl Competition {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        brand: Brand,
        prize: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            brand,
            prize,
            has_started: false,
            has_ended: false,
            winner: None,
            competitors: Vec::new(),
        }
    }

    /// Register a competitor. Duplicate registrations are ignored.
    pub fn add_competitor(&mut self, user: User) {
        if !self.competitors.contains(&user) {
            self.competitors.push(user);
        }
    }

    /// Current lifecycle state. `has_ended` is checked first so a finished
    /// competition never reads as merely started.
    pub fn status(&self) -> CompetitionStatus {
        if self.has_ended {
            CompetitionStatus::Ended
        } else if self.has_started {
            CompetitionStatus::Started
        } else {
            CompetitionStatus::NotStarted
        }
    }
}

/// Read-only holder for the full product catalog and the retailers selling
/// from it.
///
/// This is the upstream surface the reports consume: the brand report scans
/// [`Marketplace::products`], and the lowest-price report renders the result
/// of [`Marketplace::lowest_price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    pub products: Vec<Product>,
    pub retailers: Vec<Retailer>,
}

impl Marketplace {
    pub fn new() -> Self {
        Self { products: Vec::new(), retailers: Vec::new() }
    }

    /// Add a product to the full catalog. Duplicates are ignored.
    pub fn add_product(&mut self, product: Product) {
        if !self.products.contains(&product) {
            self.products.push(product);
        }
    }

    pub fn add_retailer(&mut self, retailer: Retailer) {
        self.retailers.push(retailer);
    }

    /// Cheapest listing of `product` across all retailers, or `None` when
    /// nobody sells it. On a price tie the earliest retailer wins.
    pub fn lowest_price(&self, product: &Product) -> Option<(&Retailer, Decimal)> {
        let mut best: Option<(&Retailer, Decimal)> = None;
        for retailer in &self.retailers {
            if let Some(info) = retailer.item_info(product) {
                match best {
                    Some((_, price)) if info.price >= price => {}
                    _ => best = Some((retailer, info.price)),
                }
            }
        }

        match best {
            Some((retailer, price)) => {
                debug!("lowest price for {}: {}€ at {}", product.name, price, retailer.name);
            }
            None => debug!("no retailer sells {}", product.name),
        }

        best
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}
