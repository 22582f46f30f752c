pub mod client;
pub mod error;
pub mod types;

pub use client::{CandidateSource, CatalogClient};
pub use error::CatalogError;
pub use types::{Candidate, Fetched};
