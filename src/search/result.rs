use crate::clock::Clock;
use crate::location::{ChunkLocation, Observation};
use crate::search::entry::SearchResultEntry;
use crate::search::{SearchSession, SearchType};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::collections::BTreeSet;
use std::hash::Hash;
use std::sync::Arc;

/// Tallies of a running or finished search.
///
/// Observations go in through [`add`](Self::add). Nothing is ranked until
/// [`finalize`](Self::finalize) runs; [`sorted_entries`](Self::sorted_entries)
/// is empty before that.
pub struct SearchResult<B = ChunkLocation> {
    search_type: SearchType,
    searched: BTreeSet<String>,
    clock: Arc<dyn Clock>,
    start_time: i64,
    end_time: Option<i64>,
    // buckets in first-seen order
    entries: IndexMap<B, SearchResultEntry<B>>,
    // indices into `entries`, highest total first
    sorted: Vec<usize>,
}

impl<B: Eq + Hash + Clone> SearchResult<B> {
    pub fn new(session: &SearchSession) -> Self {
        Self {
            search_type: session.search_type(),
            searched: session.searched_labels(),
            clock: Arc::clone(session.clock()),
            start_time: session.start_time(),
            end_time: None,
            entries: IndexMap::new(),
            sorted: Vec::new(),
        }
    }

    pub fn add(&mut self, bucket: B, label: &str) {
        let next = self.entries.len();
        self.entries
            .entry(bucket)
            .or_insert_with_key(|b| {
                trace!("New bucket #{} for label {}", next, label);
                SearchResultEntry::new(b.clone())
            })
            .increment(label);
    }

    /// Sorts every bucket's labels, ranks the buckets and stamps the end
    /// time. Calling it again re-ranks but keeps the first end time.
    pub fn finalize(&mut self) {
        for entry in self.entries.values_mut() {
            entry.sort();
        }
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].total().cmp(&self.entries[a].total()));
        self.sorted = order;

        if self.end_time.is_none() {
            let now = self.clock.now_millis();
            if now < self.start_time {
                warn!(
                    "Clock went backwards: search ended at {} before it started at {}",
                    now, self.start_time
                );
            }
            self.end_time = Some(now);
        }
        debug!(
            "Search {} finished: {} observations in {} buckets, took {}ms",
            self.search_type,
            self.total_count(),
            self.entries.len(),
            self.duration_millis()
        );
    }

    pub fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }

    /// Buckets ranked by the last [`finalize`](Self::finalize), most
    /// observations first.
    pub fn sorted_entries(&self) -> impl ExactSizeIterator<Item = &SearchResultEntry<B>> + '_ {
        self.sorted.iter().map(move |&i| &self.entries[i])
    }

    pub fn entry(&self, bucket: &B) -> Option<&SearchResultEntry<B>> {
        self.entries.get(bucket)
    }

    pub fn bucket_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_count(&self) -> u64 {
        self.entries.values().map(|e| e.total()).sum()
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn searched(&self) -> &BTreeSet<String> {
        &self.searched
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// End of the search, or the current time while it is still running.
    pub fn end_time(&self) -> i64 {
        self.end_time.unwrap_or_else(|| self.clock.now_millis())
    }

    pub fn duration_millis(&self) -> u64 {
        self.end_time().saturating_sub(self.start_time).max(0) as u64
    }
}

impl SearchResult<ChunkLocation> {
    pub fn observe<O: Observation + ?Sized>(&mut self, observation: &O) {
        self.add(observation.chunk(), observation.label());
    }
}
