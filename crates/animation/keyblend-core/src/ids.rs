//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

/// Entity owning one Animator inside an [`crate::AnimationSystem`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Node inside a host hierarchy (used while walking a bundle path).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Opaque handle of a writable transform target, issued by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetHandle(pub u32);

/// Monotonic allocator for EntityId.
/// Ids are never reused, so a despawned entity cannot alias a new one.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_entity: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity = self.next_entity.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_entity(), EntityId(0));
        assert_eq!(alloc.alloc_entity(), EntityId(1));
    }
}
