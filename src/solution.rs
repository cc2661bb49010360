//! Solver output: a set of pairwise non-adjacent antennas.

use crate::error::{Error, Result};
use crate::graph::AntennaGraph;
use crate::types::{NodeId, Side};

/// Sorted, duplicate-free set of antenna ids.
///
/// Independence is a promise of the solver; [`IndependentSet::verify`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndependentSet {
    members: Vec<NodeId>,
}

impl IndependentSet {
    pub fn new(mut members: Vec<NodeId>) -> Self {
        radsort::sort(&mut members);
        members.dedup();
        IndependentSet { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.members.binary_search(&id).is_ok()
    }

    /// Members in ascending order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn side_of(&self, id: NodeId) -> Side {
        if self.contains(id) {
            Side::Selected
        } else {
            Side::Unselected
        }
    }

    /// Checks that every member is a node of `graph` and no two members share an edge.
    pub fn verify(&self, graph: &AntennaGraph) -> Result<()> {
        for &u in &self.members {
            if !graph.contains_node(u) {
                return Err(Error::InvalidSolution(format!(
                    "node {u} is not part of the graph"
                )));
            }
            for v in graph.neighbors(u) {
                if self.contains(v) {
                    return Err(Error::InvalidSolution(format!(
                        "nodes {} and {} are adjacent",
                        u.min(v),
                        u.max(v)
                    )));
                }
            }
        }
        Ok(())
    }

    /// True if no node outside the set could be added without breaking independence.
    pub fn is_maximal(&self, graph: &AntennaGraph) -> bool {
        graph
            .nodes()
            .into_iter()
            .filter(|&v| !self.contains(v))
            .all(|v| graph.neighbors(v).into_iter().any(|u| self.contains(u)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AntennaGraph {
        AntennaGraph::from_edges(&[(1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn test_members_are_sorted_and_unique() {
        let set = IndependentSet::new(vec![9, 3, 3, 1]);
        assert_eq!(set.members(), &[1, 3, 9]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_verify_accepts_independent_set() {
        let set = IndependentSet::new(vec![1, 3]);
        assert!(set.verify(&path()).is_ok());
        assert!(set.is_maximal(&path()));
    }

    #[test]
    fn test_verify_rejects_adjacent_members() {
        let set = IndependentSet::new(vec![2, 3]);
        let err = set.verify(&path()).unwrap_err();
        assert!(matches!(err, Error::InvalidSolution(_)));
    }

    #[test]
    fn test_verify_rejects_unknown_node() {
        let set = IndependentSet::new(vec![1, 30]);
        assert!(set.verify(&path()).is_err());
    }

    #[test]
    fn test_side_of() {
        let set = IndependentSet::new(vec![1, 4]);
        assert_eq!(set.side_of(1), Side::Selected);
        assert_eq!(set.side_of(2), Side::Unselected);
        assert!(!set.is_maximal(&AntennaGraph::from_edges(&[(1, 2), (4, 5), (6, 7)]).unwrap()));
    }
}
