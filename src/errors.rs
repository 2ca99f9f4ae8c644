use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotPlaceError {
    Validation(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    DateParse(String),
}

impl DotPlaceError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DotPlaceError::Validation(_) => "E001",
            DotPlaceError::NotFound(_) => "E002",
            DotPlaceError::Conflict(_) => "E003",
            DotPlaceError::Unauthorized(_) => "E004",
            DotPlaceError::Config(_) => "E005",
            DotPlaceError::FileOperation(_) => "E006",
            DotPlaceError::Serialization(_) => "E007",
            DotPlaceError::DateParse(_) => "E008",
        }
    }

    /// Human readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            DotPlaceError::Validation(_) => "Validation Error",
            DotPlaceError::NotFound(_) => "Resource Not Found",
            DotPlaceError::Conflict(_) => "Resource Conflict",
            DotPlaceError::Unauthorized(_) => "Unauthorized",
            DotPlaceError::Config(_) => "Configuration Error",
            DotPlaceError::FileOperation(_) => "File Operation Error",
            DotPlaceError::Serialization(_) => "Serialization Error",
            DotPlaceError::DateParse(_) => "Date Parse Error",
        }
    }

    /// Error detail
    pub fn message(&self) -> &str {
        match self {
            DotPlaceError::Validation(msg)
            | DotPlaceError::NotFound(msg)
            | DotPlaceError::Conflict(msg)
            | DotPlaceError::Unauthorized(msg)
            | DotPlaceError::Config(msg)
            | DotPlaceError::FileOperation(msg)
            | DotPlaceError::Serialization(msg)
            | DotPlaceError::DateParse(msg) => msg,
        }
    }

    /// HTTP status the admin API answers with for this error
    #[cfg(feature = "server")]
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            DotPlaceError::Validation(_) | DotPlaceError::DateParse(_) => StatusCode::BAD_REQUEST,
            DotPlaceError::NotFound(_) => StatusCode::NOT_FOUND,
            DotPlaceError::Conflict(_) => StatusCode::CONFLICT,
            DotPlaceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DotPlaceError::Config(_)
            | DotPlaceError::FileOperation(_)
            | DotPlaceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Colored output for server logs
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// Plain one-line output for CLI
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DotPlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DotPlaceError {}

impl DotPlaceError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::Conflict(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::Unauthorized(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        DotPlaceError::DateParse(msg.into())
    }
}

impl From<std::io::Error> for DotPlaceError {
    fn from(err: std::io::Error) -> Self {
        DotPlaceError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DotPlaceError {
    fn from(err: serde_json::Error) -> Self {
        DotPlaceError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DotPlaceError {
    fn from(err: toml::ser::Error) -> Self {
        DotPlaceError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for DotPlaceError {
    fn from(err: chrono::ParseError) -> Self {
        DotPlaceError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DotPlaceError>;
