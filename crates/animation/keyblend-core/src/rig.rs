//! Rig: a minimal named transform hierarchy implementing the host traits.
//!
//! Useful as a standalone pose buffer (tools, tests, headless playback) and as
//! a reference for hosts wiring their own scene graph. Every node is a target;
//! node ids and target handles share the same index space.

use hashbrown::HashMap;

use crate::binding::{Resolvable, Target, TargetHost};
use crate::ids::{NodeId, TargetHandle};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RigNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub position: [f32; 3],
    /// Euler angles in radians.
    pub orientation: [f32; 3],
}

impl Target for RigNode {
    fn local_position(&self) -> [f32; 3] {
        self.position
    }

    fn set_local_position(&mut self, position: [f32; 3]) {
        self.position = position;
    }

    fn local_orientation(&self) -> [f32; 3] {
        self.orientation
    }

    fn set_local_orientation(&mut self, euler_radians: [f32; 3]) {
        self.orientation = euler_radians;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Rig {
    nodes: Vec<RigNode>,
    /// First node registered under each name.
    by_name: HashMap<String, NodeId>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, name: &str) -> NodeId {
        self.push_node(name, None)
    }

    /// Add a child under `parent`. Returns `None` if `parent` does not exist.
    pub fn add_child(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes.get(parent.0 as usize)?;
        let id = self.push_node(name, Some(parent));
        self.nodes[parent.0 as usize].children.push(id);
        Some(id)
    }

    fn push_node(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RigNode {
            name: name.to_string(),
            parent,
            ..RigNode::default()
        });
        self.by_name.entry(name.to_string()).or_insert(id);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&RigNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut RigNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `/`-joined names from the topmost ancestor down to `id`.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut cur = Some(id);
        while let Some(n) = cur {
            let node = self.node(n)?;
            names.push(node.name.as_str());
            cur = node.parent;
        }
        names.reverse();
        Some(names.join("/"))
    }
}

impl Resolvable for Rig {
    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)?
            .children
            .iter()
            .copied()
            .find(|c| self.node(*c).is_some_and(|n| n.name == name))
    }

    fn as_target(&self, node: NodeId) -> Option<TargetHandle> {
        self.node(node).map(|_| TargetHandle(node.0))
    }
}

impl TargetHost for Rig {
    fn target_mut(&mut self, handle: TargetHandle) -> Option<&mut dyn Target> {
        self.nodes
            .get_mut(handle.0 as usize)
            .map(|n| n as &mut dyn Target)
    }
}
