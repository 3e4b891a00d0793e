use thiserror::Error;

/// User-input validation failures. All are detected synchronously and are
/// non-retryable without user correction; each maps to one fixed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide a value for both the vault name and the folder path")]
    EmptyRequiredField,

    #[error("Invalid character '{0}'. Avoid \\ : * ? \" < > | in the vault name and folder path")]
    InvalidCharacter(char),

    #[error("Invalid folder format. Use '{{title}}' or 'Folder Name/{{title}}' as the folder path")]
    InvalidFolderFormat,

    #[error("Advanced formatting is enabled but the note content format is empty")]
    EmptyAdvancedTemplate,
}

/// The single failure kind of the settings store capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Settings store error: {0}")]
pub struct StoreError(pub String);

#[derive(Error, Debug)]
pub enum ClipvaultError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ClipvaultError>;
