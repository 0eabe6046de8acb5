use std::sync::atomic::{AtomicU64, Ordering};

/// Collision-free element id allocator scoped to one render session.
///
/// Ids combine a random per-session tag with a monotonic counter, so two documents produced by
/// different sessions can be embedded in the same page without clashing.
#[derive(Debug)]
pub struct IdAllocator {
    tag: String,
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator with a fresh random session tag.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self::with_tag(&uuid[..8])
    }

    /// Create an allocator with a fixed tag (deterministic output for tests and snapshots).
    pub fn with_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            next: AtomicU64::new(1),
        }
    }

    /// Session tag shared by every id of this allocator.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Allocate the next unique id token (`<tag>n<counter>`).
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}n{n}", self.tag)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
