// Content pipeline input side: topic catalogue, record shapes, the remote
// source and the fetch orchestrator that builds one snapshot per load.

pub mod handlers;
pub mod records;
pub mod snapshot;
pub mod source;
pub mod topic;

pub use snapshot::{load_snapshot, ContentSnapshot};
pub use source::{ContentSource, HttpContentSource};
pub use topic::Topic;
