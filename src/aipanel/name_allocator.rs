//! Unique display-name allocation for panelists.
//!
//! The allocator owns two disjoint pools: names still `available` in the
//! current exhaustion cycle and names already `used`. Allocation draws
//! uniformly at random from the available pool; once the pool runs dry the
//! used names are recycled wholesale and a new cycle begins. A name can
//! therefore repeat only after every other candidate has been handed out.

use crate::config::ConfigurationError;
use rand::Rng;

/// Hands out unique display names until the pool is exhausted, then recycles.
pub struct NameAllocator {
    available: Vec<String>,
    used: Vec<String>,
}

impl NameAllocator {
    /// Create an allocator over the given master name list.
    ///
    /// An empty master list is a configuration error: there would be nothing
    /// to allocate, ever.
    pub fn new(pool: Vec<String>) -> Result<Self, ConfigurationError> {
        if pool.is_empty() {
            return Err(ConfigurationError::EmptyNamePool);
        }
        Ok(NameAllocator {
            available: pool,
            used: Vec::new(),
        })
    }

    /// Create an allocator over the built-in panelist name pool.
    pub fn with_default_pool() -> Self {
        NameAllocator {
            available: default_name_pool(),
            used: Vec::new(),
        }
    }

    /// Draw one name uniformly at random from the available pool.
    ///
    /// When the pool is exhausted the used names are swapped back in and the
    /// used set is cleared, so repeats happen only across exhaustion cycles.
    /// Infallible: construction guarantees a non-empty master list.
    pub fn allocate(&mut self) -> String {
        if self.available.is_empty() {
            std::mem::swap(&mut self.available, &mut self.used);
            log::debug!(
                "name pool exhausted, recycling {} names",
                self.available.len()
            );
        }

        let idx = rand::thread_rng().gen_range(0..self.available.len());
        let name = self.available.swap_remove(idx);
        self.used.push(name.clone());
        name
    }

    /// How many names remain in the current exhaustion cycle.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }
}

/// Built-in panelist display names, enough for a full-size panel.
pub fn default_name_pool() -> Vec<String> {
    [
        "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy",
        "Mallory", "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter",
        "Wendy",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}
