//! Host-facing traits: path resolution and transform targets.
//!
//! The core never owns scene objects. A host exposes its hierarchy through
//! [`Resolvable`] (walk children by name, turn a node into a writable target)
//! and hands out mutable [`Target`]s by handle through [`TargetHost`].
//! Resolved handles are cached per playback state, so resolution for a given
//! bundle happens once per state lifetime.

use crate::ids::{NodeId, TargetHandle};

/// Named-child lookup over a host hierarchy.
pub trait Resolvable {
    /// Direct child of `parent` whose name equals `name`.
    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId>;

    /// Writable transform behind `node`, if it has one.
    fn as_target(&self, node: NodeId) -> Option<TargetHandle>;
}

/// Transform-like object the sampler writes to. Orientation is euler radians.
pub trait Target {
    fn local_position(&self) -> [f32; 3];
    fn set_local_position(&mut self, position: [f32; 3]);
    fn local_orientation(&self) -> [f32; 3];
    fn set_local_orientation(&mut self, euler_radians: [f32; 3]);
}

/// A host hierarchy that can also hand out its targets for writing.
pub trait TargetHost: Resolvable {
    fn target_mut(&mut self, handle: TargetHandle) -> Option<&mut dyn Target>;
}

/// Resolve a `/`-delimited path relative to `root`.
///
/// Empty segments are skipped, so `""` and `"/"` address `root` itself and
/// `"spine//neck"` equals `"spine/neck"`. Returns `None` when a segment has no
/// matching child or the final node is not a target.
pub fn resolve_path<R: Resolvable + ?Sized>(
    resolver: &R,
    root: NodeId,
    path: &str,
) -> Option<TargetHandle> {
    let mut node = root;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        node = resolver.find_child(node, segment)?;
    }
    resolver.as_target(node)
}
