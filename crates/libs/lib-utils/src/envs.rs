//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables, with and without
//! fallbacks for unset keys.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset or empty.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an environment variable, falling back to `default` when unset.
///
/// A value that is present but unparseable is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env(name) {
        Ok(val) if val.trim().is_empty() => Ok(default),
        Ok(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} is not set"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so parallel tests never race.

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );
    }

    #[test]
    fn test_get_env_or_default() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_OR", "fallback"), "fallback");

        env::set_var("LIB_UTILS_TEST_BLANK_OR", "  ");
        assert_eq!(get_env_or("LIB_UTILS_TEST_BLANK_OR", "fallback"), "fallback");

        env::set_var("LIB_UTILS_TEST_SET_OR", "value");
        assert_eq!(get_env_or("LIB_UTILS_TEST_SET_OR", "fallback"), "value");
    }

    #[test]
    fn test_get_env_parse() {
        env::set_var("LIB_UTILS_TEST_PORT", " 8080 ");
        assert_eq!(get_env_parse::<u16>("LIB_UTILS_TEST_PORT"), Ok(8080));

        env::set_var("LIB_UTILS_TEST_BAD_PORT", "eighty");
        assert_eq!(
            get_env_parse::<u16>("LIB_UTILS_TEST_BAD_PORT"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_PORT"))
        );
    }

    #[test]
    fn test_get_env_parse_or() {
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_UNSET_PARSE", 7u32), Ok(7));

        env::set_var("LIB_UTILS_TEST_SET_PARSE", "42");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_SET_PARSE", 7u32), Ok(42));

        env::set_var("LIB_UTILS_TEST_BAD_PARSE", "x");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_BAD_PARSE", 7u32),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_PARSE"))
        );
    }
}
