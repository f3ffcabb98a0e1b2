pub mod aggregate;
pub mod config;
pub mod contributions;
pub mod error;
pub mod github;
pub mod models;
pub mod web;

pub use aggregate::Aggregator;
pub use config::{AggregatorConfig, Config};
pub use contributions::{ContributionSource, EventContributionSource};
pub use error::{Error, Result};
pub use github::GitHubClient;
