use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn is_internal(&self) -> bool {
        self.code == ErrorCode::InternalError as u16
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownCurrency = 3,
    UnresolvedCurrency = 4,
    MalformedNumber = 5,
    InvalidPercent = 6,
    InternalError = 51,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "syntax error",
            3 => "unknown currency",
            4 => "unresolved currency",
            5 => "malformed number",
            6 => "invalid operation with %",
            51 => "internal error",
            _ => "",
        };
        let text = if !self.message.is_empty() {
            self.message.as_str()
        } else if !code_str.is_empty() {
            code_str
        } else {
            return write!(f, "error {}", self.code);
        };
        if (0..0) != self.column {
            write!(f, "character {}: {}", self.column.start, text)
        } else {
            write!(f, "{}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_column() {
        let e = error!(SyntaxError, ..&(4..5); "unexpected \"#\"");
        assert_eq!(e.to_string(), "character 4: unexpected \"#\"");
    }

    #[test]
    fn test_display_code_only() {
        assert_eq!(error!(InvalidPercent).to_string(), "invalid operation with %");
        assert!(error!(InternalError).is_internal());
        assert!(!error!(UnknownCurrency).is_internal());
    }
}
