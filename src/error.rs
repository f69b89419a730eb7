use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarmonizeError {
    #[error("{source_name}: missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name}: worksheet '{sheet}' not found")]
    MissingSheet { source_name: String, sheet: String },

    #[error("{source_name}: no header row")]
    EmptySource { source_name: String },

    #[error("No country code for '{0}'")]
    UnmappedCountry(String),

    #[error("No display name for country code '{0}'")]
    UnmappedCountryCode(String),

    #[error("No label for indicator '{0}'")]
    UnmappedIndicator(String),
}
