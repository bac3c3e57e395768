use crate::{
    hash::{Hash, STRING_SALT},
    log,
    log::{Level, Topic},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error as ThisError;

//
// CONFIG
//
// Only the std-hasher seed and log filtering read this. The core hash
// functions never do, so a hash value cannot change because config changed.
//

static CONFIG: RwLock<Option<Arc<ConfigModel>>> = RwLock::new(None);

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// The installed config could not be written back out as TOML.
    #[error("toml serialize error: {0}")]
    CannotSerializeToml(String),

    #[error("seed must be non-zero")]
    InvalidSeed,
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigModel {
    /// Initial accumulator for `SaltHasher`.
    pub seed: Hash,

    /// Minimum level the `log!` macro emits.
    pub log_level: Level,
}

impl ConfigModel {
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    // a zero seed lets leading zero bytes vanish: 0 * 33 ^ 0 == 0
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.seed == 0 {
            return Err(ConfigError::InvalidSeed);
        }

        Ok(())
    }
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            seed: STRING_SALT,
            log_level: Level::default(),
        }
    }
}

///
/// Config
///

pub struct Config {}

impl Config {
    /// Current config, or the defaults when nothing was installed.
    #[must_use]
    pub fn get() -> Arc<ConfigModel> {
        Self::try_get().unwrap_or_default()
    }

    #[must_use]
    pub fn try_get() -> Option<Arc<ConfigModel>> {
        let slot = CONFIG.read().unwrap_or_else(PoisonError::into_inner);

        slot.clone()
    }

    /// Install the process-wide configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<Arc<ConfigModel>, ConfigError> {
        let config = ConfigModel::from_toml(config_str)?;

        Self::init_from_model(config)
    }

    pub fn init_from_model(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        config.validate()?;

        let mut slot = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }

        let arc = Arc::new(config);
        *slot = Some(arc.clone());
        drop(slot);

        log::set_min_level(arc.log_level);
        crate::log!(
            Topic::Config,
            Info,
            "config installed (seed {}, log level {})",
            arc.seed,
            arc.log_level
        );

        Ok(arc)
    }

    /// Return the current config as a TOML string.
    pub fn to_toml() -> Result<String, ConfigError> {
        let cfg = Self::get();

        toml::to_string_pretty(&*cfg).map_err(|e| ConfigError::CannotSerializeToml(e.to_string()))
    }

    /// Test-only: reset the global config so tests can reinitialize.
    #[cfg(test)]
    pub fn reset_for_tests() {
        let mut slot = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        log::set_min_level(Level::default());
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::SaltState;
    use std::hash::BuildHasher;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = ConfigModel::from_toml("").unwrap();
        assert_eq!(cfg, ConfigModel::default());
        assert_eq!(cfg.seed, 5381);
        assert_eq!(cfg.log_level, Level::Warn);
    }

    #[test]
    fn parses_fields() {
        let cfg = ConfigModel::from_toml("seed = 17\nlog_level = \"Debug\"\n").unwrap();
        assert_eq!(cfg.seed, 17);
        assert_eq!(cfg.log_level, Level::Debug);
    }

    #[test]
    fn rejects_zero_seed() {
        let err = ConfigModel::from_toml("seed = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed));
    }

    #[test]
    fn parse_and_serialize_failures_are_distinct() {
        let parse = ConfigModel::from_toml("seed = ").unwrap_err();
        assert!(matches!(parse, ConfigError::CannotParseToml(_)));

        let write = ConfigError::CannotSerializeToml("bad".to_string());
        assert_eq!(write.to_string(), "toml serialize error: bad");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ConfigModel::from_toml("salt = 3").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    // one test owns the global slot so parallel tests do not race on it
    #[test]
    fn global_lifecycle() {
        Config::reset_for_tests();
        assert!(Config::try_get().is_none());
        assert_eq!(*Config::get(), ConfigModel::default());
        assert_eq!(SaltState::from_global(), SaltState::default());

        let installed = Config::init_from_toml("seed = 99\nlog_level = \"Error\"").unwrap();
        assert_eq!(installed.seed, 99);
        assert_eq!(Config::get().seed, 99);
        assert_eq!(log::min_level(), Level::Error);

        // the std-hasher seed follows the installed config
        let state = SaltState::from_global();
        assert_eq!(state.seed(), 99);
        assert_eq!(state.hash_one(7u32), SaltState::with_seed(99).hash_one(7u32));
        assert_ne!(state.hash_one(7u32), SaltState::default().hash_one(7u32));

        let again = Config::init_from_toml("seed = 1");
        assert!(matches!(again, Err(ConfigError::AlreadyInitialized)));

        let toml = Config::to_toml().unwrap();
        assert!(toml.contains("seed = 99"));
        assert_eq!(ConfigModel::from_toml(&toml).unwrap(), *installed);

        Config::reset_for_tests();
        assert!(Config::try_get().is_none());
        assert_eq!(SaltState::from_global().seed(), STRING_SALT);
    }
}
