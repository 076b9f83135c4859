//! Deterministic plain-text reports over retail catalog, review, and
//! competition data.
//!
//! The crate is a pure rendering layer. Callers assemble read-only
//! snapshots from the [`model`] module and hand them to a
//! [`ReportWriter`] wrapping any `std::io::Write` sink; the writer emits
//! fixed-layout text blocks and nothing else. There is no I/O besides the
//! sink, no sorting, and no business logic: collections render in exactly
//! the order they are given, and the same input always produces the same
//! bytes.
//!
//! Each collection report opens with a fixed header line before its first
//! entry and collapses to a single fallback sentence when the collection
//! is empty. The headers, fallbacks, and blank-line placement are stable
//! output format, documented per method on [`ReportWriter`].
//!
//! ## Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use shoplens::{Brand, ItemInfo, Product, ReportWriter, Retailer};
//!
//! let mut retailer = Retailer::new("Corner Shop");
//! retailer.add_item(
//!     Product::new("Runner Pro", Brand::new("Stride")),
//!     ItemInfo::new(dec!(59.90), 4),
//! );
//!
//! let mut output = Vec::new();
//! let mut writer = ReportWriter::new(&mut output);
//! writer.write_retailer(&retailer)?;
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.starts_with("Retailer name: Corner Shop\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod model;
pub mod report;

// Re-export the whole surface so callers need only the crate root
pub use crate::model::{
    Brand, Competition, CompetitionStatus, ItemInfo, Marketplace, Product, Retailer, Review, User,
};
pub use crate::report::{
    ReportWriter, print_brand, print_competition, print_competitions, print_error,
    print_lowest_price, print_product, print_product_reviews, print_retailer,
    print_user_competitions, print_user_reviews,
};
