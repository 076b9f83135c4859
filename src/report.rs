//! Report rendering module - Pure formatting concerns
//!
//! This module renders domain snapshots as plain-text reports:
//! - One block per report, built from complete lines
//! - Fixed headers and fallback sentences for collections
//! - Separator blank lines exactly where the format puts them
//!
//! It accepts read-only domain data and renders it to any line-oriented
//! sink. Every byte of output is stable: header text, fallback sentences,
//! blank-line placement, and trailing newlines are all part of the format,
//! so downstream consumers may match on them verbatim.
//!
//! ## Output Flexibility
//!
//! Reports can be written to any `std::io::Write` destination:
//! - Console (stdout/stderr)
//! - In-memory buffers
//! - Files
//! - Any combination via `ReportWriter`

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::model::{Brand, Competition, CompetitionStatus, Product, Retailer, Review, User};

/// Writer for report output over a line-oriented sink.
///
/// All `write_*` methods append one report to the sink and propagate only
/// sink I/O errors. Input collections render in iteration order; nothing is
/// sorted, deduplicated, or paginated here.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one header-plus-items section.
    ///
    /// The header line is emitted just before the first item and never
    /// otherwise, so an empty `items` renders as exactly the fallback line.
    /// Each item renders through `render`, which may emit any number of
    /// lines, including separator blanks.
    fn write_section<I, F>(
        &mut self,
        header: &str,
        fallback: &str,
        items: I,
        mut render: F,
    ) -> io::Result<()>
    where
        I: IntoIterator,
        F: FnMut(&mut W, I::Item) -> io::Result<()>,
    {
        let mut first = true;
        for item in items {
            if first {
                writeln!(self.writer, "{}", header)?;
                first = false;
            }
            render(&mut self.writer, item)?;
        }
        if first {
            writeln!(self.writer, "{}", fallback)?;
        }
        Ok(())
    }

    /// The two-line product block shared by the product report and the
    /// user review listing.
    fn product_lines(writer: &mut W, product: &Product) -> io::Result<()> {
        writeln!(writer, "Product: {}", product.name)?;
        writeln!(writer, "Brand: {}", product.brand.name)
    }

    /// Write an error line.
    pub fn write_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "Error: {}", message)
    }

    /// Write a product as its two-line block.
    pub fn write_product(&mut self, product: &Product) -> io::Result<()> {
        Self::product_lines(&mut self.writer, product)
    }

    /// Write the reviews one user has left, in the order given.
    ///
    /// Each entry is the reviewed product's block, a separator blank line,
    /// then rating (out of 5) and feedback.
    pub fn write_user_reviews(&mut self, reviews: &[(Product, Review)]) -> io::Result<()> {
        self.write_section(
            "My Reviews:",
            "You have no reviews!",
            reviews,
            |writer, (product, review)| {
                Self::product_lines(writer, product)?;
                writeln!(writer)?;
                writeln!(writer, "Rating: {}/5", review.rating)?;
                writeln!(writer, "Feedback: {}", review.feedback)
            },
        )
    }

    /// Write the outcome of a lowest-price query.
    ///
    /// `None` means no retailer sells the product; that renders as a plain
    /// sentence, not an error.
    pub fn write_lowest_price(&mut self, offer: Option<(&Retailer, Decimal)>) -> io::Result<()> {
        match offer {
            Some((retailer, price)) => {
                writeln!(self.writer, "Lowest price: {}€ at {}", price, retailer.name)
            }
            None => writeln!(self.writer, "No retailer sells this product!"),
        }
    }

    /// Write the reviews left on one product, in the order given.
    ///
    /// Each entry opens with a separator blank line; unlike the user review
    /// listing, the rating here has no "/5" suffix.
    pub fn write_product_reviews(&mut self, reviews: &[(User, Review)]) -> io::Result<()> {
        self.write_section(
            "Product Reviews:",
            "This product has no reviews!",
            reviews,
            |writer, (user, review)| {
                writeln!(writer)?;
                writeln!(writer, "User: {}", user.username)?;
                writeln!(writer, "Rating: {}", review.rating)?;
                writeln!(writer, "Feedback: {}", review.feedback)
            },
        )
    }

    /// Write a retailer and its catalog in listing order.
    ///
    /// The name line always renders; the catalog section falls back to a
    /// sentence naming the retailer when it sells nothing.
    pub fn write_retailer(&mut self, retailer: &Retailer) -> io::Result<()> {
        writeln!(self.writer, "Retailer name: {}", retailer.name)?;
        let fallback = format!("Retailer {} sells no products!", retailer.name);
        // The space before the colon in "Items sold :" is part of the format.
        self.write_section("Items sold :", &fallback, &retailer.items, |writer, (product, info)| {
            writeln!(writer)?;
            writeln!(writer, "Product name: {}", product.name)?;
            writeln!(writer, "Product brand: {}", product.brand.name)?;
            writeln!(writer, "Product price: {}€", info.price)?;
            writeln!(writer, "Product stock: {}", info.stock)
        })
    }

    /// Write a brand and the products in `products` carrying it.
    ///
    /// Products are matched by brand name and listed in catalog order,
    /// names only, with no separator blanks.
    pub fn write_brand(&mut self, brand: &Brand, products: &[Product]) -> io::Result<()> {
        writeln!(self.writer, "Brand name: {}", brand.name)?;
        let fallback = format!("Brand {} has no products!", brand.name);
        let matching = products.iter().filter(|product| product.brand.name == brand.name);
        self.write_section("Products:", &fallback, matching, |writer, product| {
            writeln!(writer, "Product name: {}", product.name)
        })
    }

    /// Write a competition listing, one blank-led title/brand pair per
    /// entry.
    ///
    /// Unlike the other collection reports this one has no header and no
    /// fallback: an empty listing renders nothing at all.
    pub fn write_competitions(&mut self, competitions: &[Competition]) -> io::Result<()> {
        for competition in competitions {
            writeln!(self.writer)?;
            writeln!(self.writer, "Competition title: {}", competition.title)?;
            writeln!(self.writer, "Competition brand: {}", competition.brand.name)?;
        }
        Ok(())
    }

    /// Write one competition in full: details, lifecycle lines, then the
    /// competitor section.
    ///
    /// An ended competition additionally reports its winner, or that none
    /// has been selected. Competitors render as bare usernames in
    /// registration order.
    pub fn write_competition(&mut self, competition: &Competition) -> io::Result<()> {
        writeln!(self.writer, "Title: {}", competition.title)?;
        writeln!(self.writer, "Description: {}", competition.description)?;
        writeln!(self.writer, "Brand: {}", competition.brand.name)?;
        writeln!(self.writer, "Prize: {}", competition.prize)?;

        match competition.status() {
            CompetitionStatus::Ended => {
                writeln!(self.writer, "The competition has ended!")?;
                match &competition.winner {
                    Some(winner) => writeln!(self.writer, "The winner is {}!", winner.username)?,
                    None => writeln!(self.writer, "A winner has not yet been selected!")?,
                }
            }
            CompetitionStatus::Started => writeln!(self.writer, "The competition has started!")?,
            CompetitionStatus::NotStarted => {
                writeln!(self.writer, "The competition has not yet started!")?
            }
        }

        self.write_section(
            "Competitors:",
            "No users competing!",
            &competition.competitors,
            |writer, user| writeln!(writer, "{}", user.username),
        )
    }

    /// Write the competitions one user competes in, titles only.
    pub fn write_user_competitions(&mut self, competitions: &[Competition]) -> io::Result<()> {
        self.write_section(
            "Competitions:",
            "You are not competing in any competitions!",
            competitions,
            |writer, competition| writeln!(writer, "Competition title: {}", competition.title),
        )
    }
}

//
// Stdout Convenience Wrappers
//

/// Print an error line to stdout.
pub fn print_error(message: &str) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_error(message);
}

/// Print a product block to stdout.
pub fn print_product(product: &Product) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_product(product);
}

/// Print a user's reviews to stdout.
pub fn print_user_reviews(reviews: &[(Product, Review)]) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_user_reviews(reviews);
}

/// Print a lowest-price outcome to stdout.
pub fn print_lowest_price(offer: Option<(&Retailer, Decimal)>) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_lowest_price(offer);
}

/// Print a product's reviews to stdout.
pub fn print_product_reviews(reviews: &[(User, Review)]) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_product_reviews(reviews);
}

/// Print a retailer and its catalog to stdout.
pub fn print_retailer(retailer: &Retailer) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_retailer(retailer);
}

/// Print a brand and its products to stdout.
pub fn print_brand(brand: &Brand, products: &[Product]) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_brand(brand, products);
}

/// Print a competition listing to stdout.
pub fn print_competitions(competitions: &[Competition]) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_competitions(competitions);
}

/// Print one competition in full to stdout.
pub fn print_competition(competition: &Competition) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_competition(competition);
}

/// Print a user's competitions to stdout.
pub fn print_user_competitions(competitions: &[Competition]) {
    let mut writer = ReportWriter::new(io::stdout());
    let _ = writer.write_user_competitions(competitions);
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
