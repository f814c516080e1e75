use serde::{Deserialize, Serialize};

use super::FoodzAppError;
use crate::aggregate::FetchPolicy;
use crate::search::SearchClientConfig;

/// environment variable prefix, e.g. FOODZ_API_KEY
pub const ENV_PREFIX: &str = "FOODZ";

/// run configuration for the foodz command line tool. read from an
/// optional toml or json file, then overridden by FOODZ_* environment
/// variables. the search client parameters sit at the top level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodzAppConfig {
    #[serde(flatten)]
    pub client: SearchClientConfig,
    pub fetch_policy: FetchPolicy,
}

impl FoodzAppConfig {
    pub fn load(configuration_file: Option<&str>) -> Result<Self, FoodzAppError> {
        Self::load_with_environment(configuration_file, Some(Self::environment()))
    }

    /// FOODZ_* variables from the process environment. values are parsed
    /// so numeric settings survive the flattened client section.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    /// reads the optional file, then layers `environment` on top of it when
    /// given.
    pub fn load_with_environment(
        configuration_file: Option<&str>,
        environment: Option<config::Environment>,
    ) -> Result<Self, FoodzAppError> {
        let mut builder = config::Config::builder();
        if let Some(f) = configuration_file {
            log::info!("reading foodz configuration from {f}");
            builder = builder.add_source(config::File::with_name(f));
        }
        if let Some(env) = environment {
            builder = builder.add_source(env);
        }
        let settings = builder.build()?;
        let conf = settings.try_deserialize::<FoodzAppConfig>()?;
        Ok(conf)
    }

    pub fn client_config(&self) -> &SearchClientConfig {
        &self.client
    }
}
