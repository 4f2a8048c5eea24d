//! Bounded value storage.

use crate::error::InputError;

/// Default capacity of the value buffer.
pub const MAX_N: usize = 100;

/// Value storage bounded by `capacity`. Slots grow as values arrive, so
/// neither the bound nor a claimed count allocates up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBuffer {
    slots: Vec<i32>,
    capacity: usize,
}

impl Default for SortBuffer {
    fn default() -> Self {
        Self::with_capacity(MAX_N)
    }
}

impl SortBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check that `n` values fit and start over with an empty buffer.
    pub fn claim(&mut self, n: usize) -> Result<(), InputError> {
        if n > self.capacity() {
            return Err(InputError::CapacityExceeded {
                requested: n,
                capacity: self.capacity(),
            });
        }
        self.slots.clear();
        self.slots.reserve(n.min(MAX_N));
        Ok(())
    }

    /// Append a value; the caller stays within the claimed count.
    pub fn push(&mut self, value: i32) {
        debug_assert!(self.slots.len() < self.capacity);
        self.slots.push(value);
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let buf = SortBuffer::default();
        assert_eq!(buf.capacity(), MAX_N);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_claim_up_to_capacity() {
        let mut buf = SortBuffer::with_capacity(3);
        buf.claim(3).unwrap();
        for v in [7, 8, 9] {
            buf.push(v);
        }
        assert_eq!(buf.as_slice(), &[7, 8, 9]);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_claim_past_capacity() {
        let mut buf = SortBuffer::with_capacity(3);
        assert_eq!(
            buf.claim(4),
            Err(InputError::CapacityExceeded {
                requested: 4,
                capacity: 3
            })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_huge_capacity_allocates_nothing_up_front() {
        let mut buf = SortBuffer::with_capacity(usize::MAX);
        assert_eq!(buf.capacity(), usize::MAX);
        buf.claim(usize::MAX).unwrap();
        buf.push(4);
        buf.push(5);
        assert_eq!(buf.as_slice(), &[4, 5]);
    }
}
