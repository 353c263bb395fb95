pub mod entry;
pub mod result;

pub use entry::SearchResultEntry;
pub use result::SearchResult;

use crate::clock::{Clock, SystemClock};
use crate::error::SearchError;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
    Monster,
    Passive,
    Misc,
    Block,
    Entity,
    Custom,
}

impl SearchType {
    pub fn name(&self) -> &'static str {
        match self {
            SearchType::Monster => "monster",
            SearchType::Passive => "passive",
            SearchType::Misc => "misc",
            SearchType::Block => "block",
            SearchType::Entity => "entity",
            SearchType::Custom => "custom",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monster" => Ok(SearchType::Monster),
            "passive" => Ok(SearchType::Passive),
            "misc" => Ok(SearchType::Misc),
            "block" => Ok(SearchType::Block),
            "entity" => Ok(SearchType::Entity),
            "custom" => Ok(SearchType::Custom),
            _ => Err(SearchError::UnknownSearchType(s.to_string())),
        }
    }
}

/// Parameters of one search: what is being looked for and when it began.
#[derive(Clone)]
pub struct SearchSession {
    search_type: SearchType,
    entities: BTreeSet<String>,
    materials: BTreeSet<String>,
    block_states: BTreeSet<String>,
    clock: Arc<dyn Clock>,
    start_time: i64,
}

impl SearchSession {
    /// Starts a session; the start time is read from `clock` now.
    pub fn new(search_type: SearchType, clock: Arc<dyn Clock>) -> Self {
        let start_time = clock.now_millis();
        Self {
            search_type,
            entities: BTreeSet::new(),
            materials: BTreeSet::new(),
            block_states: BTreeSet::new(),
            clock,
            start_time,
        }
    }

    pub fn with_system_clock(search_type: SearchType) -> Self {
        Self::new(search_type, Arc::new(SystemClock))
    }

    pub fn with_entity(mut self, entity_type: impl Into<String>) -> Self {
        self.entities.insert(entity_type.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.materials.insert(material.into());
        self
    }

    /// `class_name` is the simple class name of the block state, e.g. `Hopper`.
    pub fn with_block_state(mut self, class_name: impl Into<String>) -> Self {
        self.block_states.insert(class_name.into());
        self
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }
    pub fn entities(&self) -> &BTreeSet<String> {
        &self.entities
    }
    pub fn materials(&self) -> &BTreeSet<String> {
        &self.materials
    }
    pub fn block_states(&self) -> &BTreeSet<String> {
        &self.block_states
    }
    pub fn start_time(&self) -> i64 {
        self.start_time
    }
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Union of every requested entity type, material and block-state name.
    pub fn searched_labels(&self) -> BTreeSet<String> {
        self.entities
            .iter()
            .chain(&self.materials)
            .chain(&self.block_states)
            .cloned()
            .collect()
    }

    pub fn start_result<B: Eq + Hash + Clone>(&self) -> SearchResult<B> {
        SearchResult::new(self)
    }
}
