//! Constants used throughout the intake core crate.
//!
//! Path, filename and status-sentinel constants live here so that the file store, the HTTP
//! layer and the CLI agree on them.

/// Default directory for record storage when no explicit directory is configured.
pub const DEFAULT_RECORD_DATA_DIR: &str = "record_data";

/// Filename of the JSON document stored in each record directory.
pub const RECORD_JSON_FILENAME: &str = "record.json";

/// Field injected into every stored document holding its generated identifier.
pub const ID_FIELD: &str = "_id";

/// Status sentinel for a successful data-access call.
pub const STATUS_SUCCESS: &str = "success";

/// Status sentinel for a lookup that matched nothing.
pub const STATUS_NOT_FOUND: &str = "notFound";

/// Expected `resourceType` for documents written to the patients collection.
pub const PATIENT_RESOURCE_TYPE: &str = "Patient";

/// Id collisions tolerated before a record write gives up.
pub const MAX_ID_ATTEMPTS: usize = 5;
