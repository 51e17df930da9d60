use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, strictly increasing ids. Starts at 1 and steps by 1
/// unless built with [`IdGenerator::new`].
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }

    pub fn generate_next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
