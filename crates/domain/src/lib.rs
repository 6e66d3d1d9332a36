#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod dataset;
mod error;
mod exercise;
pub mod keywords;
mod name;
pub mod query;
pub mod resolve;
pub mod similarity;

pub use catalog::Catalog;
pub use error::{DatasetError, LoadError, StorageError};
pub use exercise::{Difficulty, Exercise, ExerciseId, Force, Grip, Mechanic, Property};
pub use name::{Name, NameError};
pub use query::NameExtractor;
pub use resolve::{DEFAULT_THRESHOLD, Resolver};

pub trait CatalogRepository {
    fn load_catalog(&self) -> Result<Catalog, LoadError>;
}
