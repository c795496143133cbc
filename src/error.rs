//! Errors as seen by the command line driver.

use crate::lang;
use crate::rates::RateError;
use thiserror::Error;

/// A failure that ends the run. `User` errors are always shown as is,
/// `Internal` ones only when debugging is enabled.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    User(String),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn is_user(&self) -> bool {
        matches!(self, Error::User(_))
    }
}

impl From<lang::Error> for Error {
    fn from(error: lang::Error) -> Self {
        if error.is_internal() {
            Error::Internal(error.to_string())
        } else {
            Error::User(error.to_string())
        }
    }
}

impl From<RateError> for Error {
    fn from(error: RateError) -> Self {
        Error::User(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_from_lang_error() {
        let e: Error = error!(InternalError; "Incorrect expression!").into();
        assert_eq!(e, Error::Internal("Incorrect expression!".to_string()));
        let e: Error = error!(SyntaxError; "empty expression").into();
        assert!(e.is_user());
    }

    #[test]
    fn test_from_rate_error() {
        let e: Error = RateError::Api("quota".to_string()).into();
        assert_eq!(e.to_string(), "failed to get the rate: \"quota\"");
        assert!(e.is_user());
    }
}
