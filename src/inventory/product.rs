//! Product Module
//!
//! Defines the product record shared by every inventory structure and the
//! urgency level derived from its expiry date.

use std::fmt;

use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Serialize, Serializer};

// == Urgency ==
/// Urgency level derived from the number of days until expiry.
///
/// Lower levels are more urgent, so the derived `Ord` puts `Expired` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    /// Expiry date has passed
    Expired = 0,
    /// Expires within 0 to 3 days
    Critical = 1,
    /// Expires within 4 to 7 days
    Urgent = 2,
    /// Expires in 8 days or more
    Normal = 3,
}

impl Urgency {
    // == From Days ==
    /// Maps a signed day count (expiry date minus today) to an urgency level.
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Urgency::Expired,
            0..=3 => Urgency::Critical,
            4..=7 => Urgency::Urgent,
            _ => Urgency::Normal,
        }
    }

    // == Evaluate ==
    /// Computes the urgency of an expiry date as seen from `today`.
    pub fn evaluate(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days((expiry_date - today).num_days())
    }

    /// Numeric level, 0 (expired) through 3 (normal).
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Expired => "expired",
            Urgency::Critical => "critical",
            Urgency::Urgent => "urgent",
            Urgency::Normal => "normal",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.label())
    }
}

impl Serialize for Urgency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

// == Product ==
/// A perishable inventory item.
///
/// The urgency level is never stored on the record itself; it is derived on
/// read from `expiry_date`, so changing the expiry date is all it takes to
/// refresh it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier, assigned at creation
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Unit price, never negative
    pub price: f64,
    pub expiry_date: NaiveDate,
    pub supplier: String,
    /// Informational only
    pub status: String,
}

impl Product {
    // == Constructor ==
    /// Creates a product with placeholder attributes and the given expiry date.
    pub fn new(id: impl Into<String>, name: impl Into<String>, expiry_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            quantity: DEFAULT_QUANTITY,
            price: 0.0,
            expiry_date,
            supplier: DEFAULT_SUPPLIER.to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Negative prices are clamped to zero.
    pub fn with_price(mut self, price: f64) -> Self {
        self.set_price(price);
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    // == Setters ==
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = if price.is_finite() && price > 0.0 { price } else { 0.0 };
    }

    /// Moves the expiry date; the derived urgency follows automatically.
    pub fn set_expiry_date(&mut self, expiry_date: NaiveDate) {
        self.expiry_date = expiry_date;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    // == Urgency ==
    /// Urgency as seen from `today`.
    pub fn urgency_on(&self, today: NaiveDate) -> Urgency {
        Urgency::evaluate(self.expiry_date, today)
    }

    /// Urgency as seen from the current local date.
    pub fn urgency(&self) -> Urgency {
        self.urgency_on(current_date())
    }

    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Qty: {}, Expires: {}",
            self.name, self.category, self.quantity, self.expiry_date
        )
    }
}

// == New Product ==
/// Attributes of a product that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub expiry_date: NaiveDate,
    pub supplier: String,
}

impl NewProduct {
    /// Creates attributes with placeholder category, supplier, quantity and price.
    pub fn new(name: impl Into<String>, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            quantity: DEFAULT_QUANTITY,
            price: 0.0,
            expiry_date,
            supplier: DEFAULT_SUPPLIER.to_string(),
        }
    }

    /// Attaches an identifier, producing an `Active` product.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product::new(id, self.name, self.expiry_date)
            .with_category(self.category)
            .with_quantity(self.quantity)
            .with_price(self.price)
            .with_supplier(self.supplier)
    }
}

// == Defaults ==
pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_SUPPLIER: &str = "Unknown";
pub const DEFAULT_STATUS: &str = "Active";
pub const DEFAULT_QUANTITY: u32 = 1;

// == Utility Functions ==
/// Returns today's date in the local timezone.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Moves `date` by `days`, or `None` when the result leaves chrono's date range.
pub fn offset_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}
