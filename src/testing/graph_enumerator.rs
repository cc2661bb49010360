use crate::types::NodeId;

/// Walks every edge subset of the complete graph on ids `1..=n`, one edge
/// list per mask.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        GraphEnumeratorState {
            n,
            mask: 0,
            last_mask: 1 << pairs,
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Vec<(NodeId, NodeId)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut edges = Vec::new();
        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    edges.push((i as NodeId + 1, j as NodeId + 1));
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_every_edge_subset() {
        let all: Vec<_> = GraphEnumeratorState::new(3).collect();
        assert_eq!(all.len(), 8);
        assert!(all[0].is_empty());
        assert_eq!(all[7], vec![(1, 2), (1, 3), (2, 3)]);
    }
}
