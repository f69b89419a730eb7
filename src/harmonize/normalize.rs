use super::lookup::MissLog;
use crate::config::LookupPolicy;
use crate::error::HarmonizeError;
use crate::schema::country_code_for_name;

/// Translates country names from the survey files into short codes
#[derive(Debug)]
pub struct KeyNormalizer {
    countries: MissLog,
}

impl KeyNormalizer {
    pub fn new(policy: LookupPolicy) -> Self {
        Self {
            countries: MissLog::new("country codes", policy),
        }
    }

    /// Code for `name`; on a miss the raw name is kept unless the policy is
    /// strict.
    pub fn country_code(&mut self, name: &str) -> Result<String, HarmonizeError> {
        self.countries
            .resolve(name, country_code_for_name(name), HarmonizeError::UnmappedCountry)
    }

    /// Names that had no code
    pub fn misses(&self) -> Vec<&str> {
        self.countries.misses()
    }
}
