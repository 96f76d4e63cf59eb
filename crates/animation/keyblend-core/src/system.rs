//! AnimationSystem: reference driver that steps one Animator per entity.
//!
//! Stands in for a host scheduler. Each entity owns an Animator and a root
//! node in the shared host hierarchy; `update()` steps them in spawn order,
//! so writes from different entities must target disjoint subtrees.

use serde::{Deserialize, Serialize};

use crate::animator::Animator;
use crate::binding::TargetHost;
use crate::config::Config;
use crate::error::{AnimError, Result};
use crate::ids::{EntityId, IdAllocator, NodeId};
use crate::outputs::AnimatorEvent;

/// An animator event tagged with the entity that produced it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntityEvent {
    pub entity: EntityId,
    pub event: AnimatorEvent,
}

#[derive(Debug)]
struct Slot {
    id: EntityId,
    root: NodeId,
    animator: Animator,
}

#[derive(Debug, Default)]
pub struct AnimationSystem {
    cfg: Config,
    ids: IdAllocator,
    slots: Vec<Slot>,

    // Per-update events
    events: Vec<EntityEvent>,
}

impl AnimationSystem {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Register an entity rooted at `root` with a fresh Animator.
    pub fn spawn(&mut self, root: NodeId) -> EntityId {
        let id = self.ids.alloc_entity();
        self.slots.push(Slot {
            id,
            root,
            animator: Animator::new(self.cfg.clone()),
        });
        id
    }

    /// Remove an entity, returning its Animator.
    pub fn despawn(&mut self, id: EntityId) -> Result<Animator> {
        let pos = self
            .slots
            .iter()
            .position(|s| s.id == id)
            .ok_or(AnimError::UnknownEntity(id))?;
        Ok(self.slots.remove(pos).animator)
    }

    pub fn animator(&self, id: EntityId) -> Result<&Animator> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| &s.animator)
            .ok_or(AnimError::UnknownEntity(id))
    }

    pub fn animator_mut(&mut self, id: EntityId) -> Result<&mut Animator> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.animator)
            .ok_or(AnimError::UnknownEntity(id))
    }

    pub fn root_of(&self, id: EntityId) -> Result<NodeId> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.root)
            .ok_or(AnimError::UnknownEntity(id))
    }

    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Step every animator by `dt` against `host`, returning this frame's events.
    pub fn update<H: TargetHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> &[EntityEvent] {
        self.events.clear();
        for slot in &mut self.slots {
            let out = slot.animator.update(dt, host, slot.root);
            for event in out.events.iter().cloned() {
                self.events.push(EntityEvent {
                    entity: slot.id,
                    event,
                });
            }
        }
        &self.events
    }
}
