use std::env;
use std::str::FromStr;

use argon2::Params;

use crate::data::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::Config(format!("unknown APP_ENV `{}`", other))),
        }
    }
}

/// Argon2 cost factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub environment: Environment,
    pub hashing: HashingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let db_url = env::var("DB_URL").map_err(|_| Error::Config("DB_URL must be set".into()))?;

        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        let defaults = HashingConfig::default();
        let hashing = HashingConfig {
            memory_kib: var_or("PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: var_or("PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: var_or("PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Config {
            db_url,
            environment,
            hashing,
        })
    }
}

fn var_or(key: &str, default: u32) -> Result<u32, Error> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| Error::Config(format!("{} is not a valid number: {}", key, e))),
        Err(_) => Ok(default),
    }
}
