//! Identifier generation.
//!
//! Engines never create randomness on their own; callers hand them an
//! [`IdGenerator`]. Use [`UuidIds`] in production and [`SequentialIds`]
//! wherever output has to be reproducible.

use uuid::Uuid;

/// A source of unique string handles.
pub trait IdGenerator {
    /// Returns a new identifier. `hint` names the kind of object being created
    /// and may be folded into the id.
    fn next_id(&mut self, hint: &str) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _hint: &str) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<hint>-<n>` identifiers, counting from 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, hint: &str) -> String {
        self.next += 1;
        format!("{}-{}", hint, self.next)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self, hint: &str) -> String {
        (**self).next_id(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id("auto"), "auto-1");
        assert_eq!(ids.next_id("auto"), "auto-2");
        assert_eq!(ids.next_id("filler"), "filler-3");
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let a = ids.next_id("auto");
        let b = ids.next_id("auto");
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_generator_through_reference() {
        fn take(mut gen: impl IdGenerator) -> String {
            gen.next_id("x")
        }
        let mut ids = SequentialIds::new();
        assert_eq!(take(&mut ids), "x-1");
        assert_eq!(ids.issued(), 1);
    }
}
