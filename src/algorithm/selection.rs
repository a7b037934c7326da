use indexmap::{IndexMap, IndexSet};

use crate::graph::{NodeId, Weight};

/// Returns the unprocessed node with the smallest recorded cost.
///
/// Linear scan over `costs` in insertion order. A node only displaces the
/// current pick when it is strictly cheaper, so among equal costs the one
/// discovered first wins. `None` means the frontier is exhausted.
pub fn find_lowest_cost<N, W>(costs: &IndexMap<N, W>, processed: &IndexSet<N>) -> Option<N>
where
    N: NodeId,
    W: Weight,
{
    let mut lowest: Option<(&N, W)> = None;

    for (node, &cost) in costs {
        if processed.contains(node) {
            continue;
        }
        match lowest {
            Some((_, best)) if best <= cost => {}
            _ => lowest = Some((node, cost)),
        }
    }

    lowest.map(|(node, _)| node.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_cheapest_unprocessed() {
        let costs: IndexMap<_, _> = [("a", 7u32), ("b", 3), ("c", 1)].into_iter().collect();
        let processed: IndexSet<_> = ["c"].into_iter().collect();

        assert_eq!(find_lowest_cost(&costs, &processed), Some("b"));
    }

    #[test]
    fn test_ties_go_to_first_inserted() {
        let costs: IndexMap<_, _> = [("z", 4u32), ("a", 4), ("m", 4)].into_iter().collect();

        assert_eq!(find_lowest_cost(&costs, &IndexSet::new()), Some("z"));
    }

    #[test]
    fn test_exhausted_frontier() {
        let costs: IndexMap<_, _> = [("a", 1u32)].into_iter().collect();
        let processed: IndexSet<_> = ["a"].into_iter().collect();

        assert_eq!(find_lowest_cost(&costs, &processed), None);
        assert_eq!(find_lowest_cost::<&str, u32>(&IndexMap::new(), &IndexSet::new()), None);
    }
}
