//! Import of area records into a remote tabular store.

mod importer;
pub mod log;
pub mod mapping;

pub use importer::{AreaStore, ImportResult, Importer};
pub use log::{append_log, ImportLogEntry, ImportStatus};
pub use mapping::{Category, Polygon, Priority, ServiceArea, ServiceAreaMetadata, Status};
