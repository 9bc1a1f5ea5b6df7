use std::fmt;

#[derive(Debug, Clone)]
pub enum MetricsError {
    Registration(String),
    Encoding(String),
    Config(String),
}

impl MetricsError {
    pub fn code(&self) -> &'static str {
        match self {
            MetricsError::Registration(_) => "E001",
            MetricsError::Encoding(_) => "E002",
            MetricsError::Config(_) => "E003",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            MetricsError::Registration(_) => "Metric Registration Error",
            MetricsError::Encoding(_) => "Metric Encoding Error",
            MetricsError::Config(_) => "Configuration Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            MetricsError::Registration(msg) => msg,
            MetricsError::Encoding(msg) => msg,
            MetricsError::Config(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MetricsError {}

impl MetricsError {
    pub fn registration<T: Into<String>>(msg: T) -> Self {
        MetricsError::Registration(msg.into())
    }

    pub fn encoding<T: Into<String>>(msg: T) -> Self {
        MetricsError::Encoding(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        MetricsError::Config(msg.into())
    }
}

// Registration is the only path that surfaces raw prometheus errors;
// encoding failures are mapped explicitly at the export site.
impl From<prometheus::Error> for MetricsError {
    fn from(err: prometheus::Error) -> Self {
        MetricsError::Registration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
