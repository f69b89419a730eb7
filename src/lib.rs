pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod harmonize;
pub mod logging;
pub mod model;
pub mod parser;
pub mod schema;
pub mod source;
pub mod ui;
pub mod views;
pub mod writer;

pub use cache::TableCache;
pub use cli::{Cli, Commands};
pub use config::{HarmonizerConfig, LookupPolicy};
pub use error::HarmonizeError;
pub use harmonize::Harmonizer;
pub use model::{EnrichedObservation, Observation, UnifiedTable};
pub use ui::{LogUi, Phase, SilentUi, Ui};
