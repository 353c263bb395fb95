use indexmap::IndexMap;

/// Label counts for a single bucket.
#[derive(Clone, Debug)]
pub struct SearchResultEntry<B> {
    location: B,
    counts: IndexMap<String, u64>,
    total: u64,
}

impl<B> SearchResultEntry<B> {
    pub fn new(location: B) -> Self {
        Self {
            location,
            counts: IndexMap::new(),
            total: 0,
        }
    }

    pub fn location(&self) -> &B {
        &self.location
    }

    pub fn increment(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Sum of every label count.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Label counts, highest first once sorted; first-seen order until then.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Orders labels by descending count. Ties keep first-seen order.
    pub fn sort(&mut self) {
        self.counts.sort_by(|_, a, _, b| b.cmp(a));
    }
}
