use std::collections::HashSet;

/// Append-only accumulator shared by the generation phases
#[derive(Debug, Default)]
pub struct CandidateSet {
    inner: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: impl Into<String>) {
        self.inner.insert(candidate.into());
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.inner.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copy of the current contents, for phases that read and write the set
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.iter().cloned().collect()
    }

    /// Candidates whose character count lies in `[min_length, max_length]`, sorted
    pub fn into_filtered(self, min_length: usize, max_length: usize) -> Vec<String> {
        let mut filtered: Vec<String> = self.inner
            .into_iter()
            .filter(|candidate| {
                let len = candidate.chars().count();
                len >= min_length && len <= max_length
            })
            .collect();
        filtered.sort();
        filtered
    }
}
