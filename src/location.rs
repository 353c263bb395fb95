use crate::error::SearchError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// world names may themselves contain '/'
static CHUNK_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)/(-?\d+)/(-?\d+)$").expect("valid chunk key pattern"));

/// A chunk in a named world. Default bucket of a [`crate::SearchResult`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChunkLocation {
    world: String,
    x: i32,
    z: i32,
}

impl ChunkLocation {
    pub fn new(world: impl Into<String>, x: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            z,
        }
    }

    /// Chunk containing the given block coordinates.
    pub fn from_block(world: impl Into<String>, block_x: i32, block_z: i32) -> Self {
        Self::new(world, block_x >> 4, block_z >> 4)
    }

    pub fn world(&self) -> &str {
        &self.world
    }
    pub fn x(&self) -> i32 {
        self.x
    }
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Block coordinates of the chunk's north-west corner.
    pub fn block_origin(&self) -> (i64, i64) {
        (i64::from(self.x) * 16, i64::from(self.z) * 16)
    }
}

impl fmt::Display for ChunkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.world, self.x, self.z)
    }
}

impl FromStr for ChunkLocation {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CHUNK_KEY
            .captures(s)
            .ok_or_else(|| SearchError::InvalidChunkLocation(s.to_string()))?;
        let x: i32 = caps[2].parse()?;
        let z: i32 = caps[3].parse()?;
        Ok(Self::new(&caps[1], x, z))
    }
}

/// Something found during a search that can be tallied: an entity, a block,
/// a block state.
pub trait Observation {
    fn chunk(&self) -> ChunkLocation;
    fn label(&self) -> &str;
}
