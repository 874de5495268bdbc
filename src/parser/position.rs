//! Shared position counter for headings and list blocks.

/// Hands out increasing positions to headings and list blocks.
///
/// One counter is threaded through a structural pass; it is never shared
/// between documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positions {
    next: u32,
}

impl Positions {
    /// Start at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at an arbitrary position.
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Take the current position and advance.
    pub fn advance(&mut self) -> u32 {
        let position = self.next;
        self.next += 1;
        position
    }

    /// Position the next block will receive.
    pub fn peek(&self) -> u32 {
        self.next
    }
}
