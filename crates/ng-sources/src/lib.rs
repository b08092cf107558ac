//! newsgraph Sources - I/O collaborators of the graph engine
//!
//! - [`FeedStore`]: the YAML list of configured news feeds
//! - [`DigestStore`]: dated digest artifacts written by the batch pipeline
//! - [`PipelineRunner`]: launches the external scrape/summarize pipeline

pub mod digest;
pub mod feeds;
pub mod pipeline;

pub use digest::{lead_summary, parse_date, DigestStore};
pub use feeds::FeedStore;
pub use pipeline::{PipelineOutcome, PipelineRunner};
