use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("The number {value} has invalid format, please make sure it has 10 digits.")]
    InvalidPhone { value: String },

    #[error("Invalid birthday '{value}', expected YYYY.MM.DD: {source}")]
    InvalidBirthday {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Corrupt backup file at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error("Unsupported backup format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
