// used to layer defaults, an optional file and the environment
use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::classify::Leniency;
use crate::error::Result;
use crate::source::LetterCase;

pub const ENV_PREFIX: &str = "DBASSAY";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Typed temporal checks accept DATE and DATE_TIME for one another.
    pub lenient_temporal: bool,
    /// Column lookup by name respects letter case.
    pub case_sensitive_columns: bool,
    /// Filter directives for the tracing subscriber.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lenient_temporal: false,
            case_sensitive_columns: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `file` when given, then `DBASSAY_*` variables.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("lenient_temporal", defaults.lenient_temporal)?
            .set_default("case_sensitive_columns", defaults.case_sensitive_columns)?
            .set_default("log_filter", defaults.log_filter)?;
        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file));
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    pub fn leniency(&self) -> Leniency {
        if self.lenient_temporal {
            Leniency::lenient()
        } else {
            Leniency::Strict
        }
    }

    pub fn letter_case(&self) -> LetterCase {
        if self.case_sensitive_columns {
            LetterCase::Sensitive
        } else {
            LetterCase::Insensitive
        }
    }
}
