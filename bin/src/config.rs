//! Analyst configuration for the CLI: optional JSON file, then flags.

use ronda_traits::{AnalystConfig, Language, Period, RondaError};
use std::path::Path;

/// Values given on the command line. `None` keeps the file or default value.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Overrides {
    pub(crate) language: Option<Language>,
    pub(crate) period: Option<Period>,
    pub(crate) limit: Option<u32>,
}

/// Load the configuration file if given, apply flag overrides, and validate.
pub(crate) fn resolve(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<AnalystConfig, RondaError> {
    let mut config = match path {
        Some(p) => AnalystConfig::from_path(p)?,
        None => AnalystConfig::default(),
    };

    if let Some(language) = overrides.language {
        config.language = language;
    }
    if let Some(period) = overrides.period {
        config.period = period;
    }
    if let Some(limit) = overrides.limit {
        config.limit = limit;
    }

    config.validate()?;
    Ok(config)
}
