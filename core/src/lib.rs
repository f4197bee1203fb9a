pub mod cache;
pub mod discovery;
pub mod error;
pub mod hunt_data;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod sighting;
pub mod spawnpoint;
pub mod submit;

// Re-exports for convenience
pub use cache::SightingCache;
pub use discovery::latest_log_file;
pub use error::{ScoutError, TransportError};
pub use hunt_data::Point;
pub use parser::LineParser;
pub use pipeline::Pipeline;
pub use reader::{LogLines, TailReader};
pub use sighting::{Sighting, SightingKey};
pub use spawnpoint::closest_spawnpoint;
pub use submit::{HttpTransport, Submitter, Transport, TurtleSighting, TurtleSightings};
