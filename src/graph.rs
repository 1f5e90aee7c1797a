use crate::error::{Result, TsortError};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Dense index of a node in the graph arena
pub type NodeId = usize;

/// Opaque token bytes, compared byte for byte
pub type Token = Vec<u8>;

/// A token with its incoming and outgoing edges
#[derive(Debug, Default)]
struct Node {
    name: Token,
    predecessors: HashSet<NodeId>,
    successors: Vec<NodeId>,
}

/// Directed "must precede" graph over byte-string tokens.
///
/// Nodes live in an arena in first-appearance order and tokens are interned
/// to their index. Ordering consumes the graph, so it can only run once.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<Token, NodeId>,
    edge_count: usize,
    self_loop: Option<NodeId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token, returning its id. Existing tokens keep their id.
    pub fn add_node(&mut self, token: &[u8]) -> NodeId {
        if let Some(&id) = self.index.get(token) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            name: token.to_vec(),
            ..Node::default()
        });
        self.index.insert(token.to_vec(), id);
        id
    }

    /// Record that `from` must be ordered before `to`.
    ///
    /// Both tokens are created on first reference. Repeating an edge is a no-op.
    pub fn add_edge(&mut self, from: &[u8], to: &[u8]) {
        let from_id = self.add_node(from);
        let to_id = self.add_node(to);

        if !self.nodes[to_id].predecessors.insert(from_id) {
            return;
        }
        self.nodes[from_id].successors.push(to_id);
        self.edge_count += 1;

        if from_id == to_id && self.self_loop.is_none() {
            self.self_loop = Some(from_id);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, token: &[u8]) -> bool {
        self.index.contains_key(token)
    }

    /// Order every node so each edge's source precedes its target.
    ///
    /// Kahn's algorithm with a FIFO ready queue seeded in first-appearance
    /// order. Fails with [`TsortError::Cycle`] when any node cannot be
    /// ordered; no partial order is returned in that case.
    pub fn compute_order(self) -> Result<Vec<Token>> {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "computing topological order"
        );

        if let Some(id) = self.self_loop {
            let name = self.nodes[id].name.clone();
            debug!(node = %String::from_utf8_lossy(&name), "self-loop");
            return Err(TsortError::Cycle {
                cycle: vec![name.clone(), name],
            });
        }

        // Remaining unsatisfied predecessors per node
        let mut in_degree: Vec<usize> = self
            .nodes
            .iter()
            .map(|node| node.predecessors.len())
            .collect();

        let mut ready: VecDeque<NodeId> = (0..self.nodes.len())
            .filter(|&id| in_degree[id] == 0)
            .collect();

        let mut order: Vec<NodeId> = Vec::with_capacity(self.nodes.len());
        while let Some(id) = ready.pop_front() {
            order.push(id);
            for &next in &self.nodes[id].successors {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push_back(next);
                }
            }
        }

        if order.len() < self.nodes.len() {
            debug!(
                ordered = order.len(),
                unresolved = self.nodes.len() - order.len(),
                "ordering stalled"
            );
            let cycle = self.find_cycle(&in_degree).unwrap_or_default();
            return Err(TsortError::Cycle { cycle });
        }

        let mut nodes = self.nodes;
        Ok(order
            .into_iter()
            .map(|id| std::mem::take(&mut nodes[id].name))
            .collect())
    }

    /// Extract one cycle from the nodes Kahn's pass never emitted.
    ///
    /// Every unresolved node has an unresolved predecessor, so walking
    /// predecessors must revisit a node. The walk runs against the edges
    /// and is reversed before returning. The cycle starts at its earliest-seen
    /// node and repeats it at the end.
    fn find_cycle(&self, in_degree: &[usize]) -> Option<Vec<Token>> {
        let mut current = (0..self.nodes.len()).find(|&id| in_degree[id] > 0)?;
        let mut position: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut walk: Vec<NodeId> = Vec::new();

        let begin = loop {
            if let Some(pos) = position[current] {
                break pos;
            }
            position[current] = Some(walk.len());
            walk.push(current);
            // Lowest id keeps the reported cycle stable across runs
            current = self.nodes[current]
                .predecessors
                .iter()
                .copied()
                .filter(|&pred| in_degree[pred] > 0)
                .min()?;
        };

        let mut ids: Vec<NodeId> = walk[begin..].iter().rev().copied().collect();
        // Start from the earliest-seen member
        let (start, _) = ids.iter().enumerate().min_by_key(|&(_, &id)| id)?;
        ids.rotate_left(start);
        ids.push(ids[0]);

        Some(
            ids.into_iter()
                .map(|id| self.nodes[id].name.clone())
                .collect(),
        )
    }
}
