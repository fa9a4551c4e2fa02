use crate::movie::{MovieId, MovieRecord};

const ID_PREFIX: &str = "movie";

/// Hands out identifiers unique within one store.
///
/// Sequence-based; a candidate already held by a record (for instance a
/// seed that happens to use the same scheme) is skipped.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_seq: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next_seq: 1 }
    }

    pub fn next_id(&mut self, existing: &[MovieRecord]) -> MovieId {
        loop {
            let candidate = MovieId::new(format!("{}-{}", ID_PREFIX, self.next_seq));
            self.next_seq += 1;
            if !existing.iter().any(|movie| movie.id() == &candidate) {
                return candidate;
            }
        }
    }
}
