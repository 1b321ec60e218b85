//! Synthetic record generation for `users`, `products`, and `orders`.
//!
//! Every record is drawn independently from the generator's RNG. Generators
//! built with [`DatasetGenerator::with_seed`] are reproducible, which is what
//! tests should use; [`DatasetGenerator::new`] seeds from OS entropy.
mod faker;
mod templates;


use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::error::DatasetError;

pub use faker::{faker_email, faker_name, faker_phone, faker_price};

/// Record count used when the caller does not ask for one.
pub const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Users,
    Products,
    Orders,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Users,
        DatasetKind::Products,
        DatasetKind::Orders,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Users => "users",
            DatasetKind::Products => "products",
            DatasetKind::Orders => "orders",
        }
    }

    fn template(self) -> templates::Template {
        match self {
            DatasetKind::Users => templates::user,
            DatasetKind::Products => templates::product,
            DatasetKind::Orders => templates::order,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DatasetError::UnknownType { kind: s.to_owned() })
    }
}

pub struct DatasetGenerator {
    rng: StdRng,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds an entropy-seeded generator, or a deterministic one when a seed
    /// is supplied.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Generates `count` records of `kind`, in generation order.
    pub fn generate(&mut self, kind: DatasetKind, count: usize) -> Vec<Value> {
        self.generate_at(kind, count, Utc::now())
    }

    /// Like [`generate`](Self::generate) but takes the type by name.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownType`] when `kind` is not one of
    /// `users`, `products`, or `orders`.
    pub fn generate_named(&mut self, kind: &str, count: usize) -> Result<Vec<Value>, DatasetError> {
        let kind = kind.parse::<DatasetKind>()?;
        Ok(self.generate(kind, count))
    }

    pub(crate) fn generate_at(
        &mut self,
        kind: DatasetKind,
        count: usize,
        now: DateTime<Utc>,
    ) -> Vec<Value> {
        let template = kind.template();
        let records: Vec<Value> = (0..count).map(|_| template(&mut self.rng, now)).collect();
        tracing::debug!(kind = %kind, count, "Generated dataset");
        records
    }
}

/// Generates `count` records of the named type with a fresh entropy-seeded
/// generator.
///
/// # Errors
///
/// Returns [`DatasetError::UnknownType`] for an unsupported type name.
pub fn generate(kind: &str, count: usize) -> Result<Vec<Value>, DatasetError> {
    DatasetGenerator::new().generate_named(kind, count)
}
