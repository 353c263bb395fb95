//! Per-chunk tallies of entity and block-state sightings, ranked by how
//! crowded each chunk is.

pub mod clock;
pub mod error;
pub mod location;
pub mod search;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::SearchError;
pub use location::{ChunkLocation, Observation};
pub use search::{SearchResult, SearchResultEntry, SearchSession, SearchType};
