//! Custom iterator

/// Counts from 1 up to a limit, inclusive
#[derive(Debug, Clone)]
pub struct NumberSequence {
    current: u32,
    limit: u32,
}

impl NumberSequence {
    pub fn new(limit: u32) -> Self {
        Self { current: 0, limit }
    }
}

impl Iterator for NumberSequence {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.current >= self.limit {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.limit - self.current.min(self.limit)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NumberSequence {}
