use std::fmt;

/// Main error type for the Pokemon team builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamBuilderError {
    /// Error produced by a roster operation
    Roster(RosterError),
    /// Error fetching or loading the catalog
    Catalog(CatalogError),
    /// Error reading or writing the persisted store
    Storage(StorageError),
    /// Error loading the application configuration
    Config(ConfigError),
}

/// Errors produced by roster operations. All of these are expected,
/// recoverable input-validation failures reported to the user; none of them
/// alter roster state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The roster already holds six entries
    RosterFull,
    /// An entry with the same id is already on the roster
    DuplicateEntry(String),
    /// Save was attempted with no entries on the roster
    EmptyRoster,
    /// Save was attempted with an empty (after trimming) team name
    NameRequired,
    /// A saved team with the same name already exists
    NameExists(String),
    /// Load or delete referenced a saved team that does not exist
    TeamNotFound(String),
}

/// Errors produced by the catalog provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog endpoint answered with a non-success status
    Http(u16),
    /// The request could not be sent or completed
    Request(String),
    /// The response or file body was not a valid catalog
    Parse(String),
    /// The local catalog file could not be read
    Io(String),
}

/// Errors produced by the key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Underlying file read or write failed
    Io(String),
    /// A value could not be serialized for storage
    Serialize(String),
}

/// Errors produced while loading the application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(String),
    /// The configuration file is not valid RON
    Parse(String),
}

impl fmt::Display for TeamBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamBuilderError::Roster(err) => write!(f, "Roster error: {}", err),
            TeamBuilderError::Catalog(err) => write!(f, "Catalog error: {}", err),
            TeamBuilderError::Storage(err) => write!(f, "Storage error: {}", err),
            TeamBuilderError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::RosterFull => write!(f, "The roster already has 6 Pokemon"),
            RosterError::DuplicateEntry(name) => write!(f, "{} is already on the roster", name),
            RosterError::EmptyRoster => write!(f, "The roster is empty"),
            RosterError::NameRequired => write!(f, "A team name is required"),
            RosterError::NameExists(name) => {
                write!(f, "A team named \"{}\" already exists", name)
            }
            RosterError::TeamNotFound(name) => write!(f, "No saved team named \"{}\"", name),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Http(status) => write!(f, "Catalog endpoint returned HTTP {}", status),
            CatalogError::Request(details) => write!(f, "Catalog request failed: {}", details),
            CatalogError::Parse(details) => write!(f, "Malformed catalog data: {}", details),
            CatalogError::Io(details) => write!(f, "Could not read catalog file: {}", details),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(details) => write!(f, "Storage I/O failed: {}", details),
            StorageError::Serialize(details) => {
                write!(f, "Could not serialize value for storage: {}", details)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Could not read config file: {}", details),
            ConfigError::Parse(details) => write!(f, "Malformed config file: {}", details),
        }
    }
}

impl std::error::Error for TeamBuilderError {}
impl std::error::Error for RosterError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for StorageError {}
impl std::error::Error for ConfigError {}

impl From<RosterError> for TeamBuilderError {
    fn from(err: RosterError) -> Self {
        TeamBuilderError::Roster(err)
    }
}

impl From<CatalogError> for TeamBuilderError {
    fn from(err: CatalogError) -> Self {
        TeamBuilderError::Catalog(err)
    }
}

impl From<StorageError> for TeamBuilderError {
    fn from(err: StorageError) -> Self {
        TeamBuilderError::Storage(err)
    }
}

impl From<ConfigError> for TeamBuilderError {
    fn from(err: ConfigError) -> Self {
        TeamBuilderError::Config(err)
    }
}

/// Type alias for Results using TeamBuilderError
pub type TeamBuilderResult<T> = Result<T, TeamBuilderError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using StorageError
pub type StorageResult<T> = Result<T, StorageError>;
