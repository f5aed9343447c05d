#[cfg(test)]
mod tests {
    use rust_da_bn254_encoder::allocation::{add_offsets, new_tree, Allocation};
    use rust_da_bn254_primitives::errors::KzgError;

    #[test]
    fn test_build_tree() {
        let tree = new_tree(3);

        assert_eq!(tree.value, 8);
        assert_eq!(tree.offset, 0);

        let left = tree.left.as_ref().unwrap();
        let right = tree.right.as_ref().unwrap();
        assert_eq!(left.value, 4);
        assert_eq!(left.offset, 0);
        assert_eq!(right.value, 4);
        assert_eq!(right.offset, 1);

        assert_eq!(left.left.as_ref().unwrap().value, 2);
        assert_eq!(left.left.as_ref().unwrap().offset, 0);
        assert_eq!(left.right.as_ref().unwrap().value, 2);
        assert_eq!(left.right.as_ref().unwrap().offset, 2);
        assert_eq!(right.left.as_ref().unwrap().value, 2);
        assert_eq!(right.left.as_ref().unwrap().offset, 1);
        assert_eq!(right.right.as_ref().unwrap().value, 2);
        assert_eq!(right.right.as_ref().unwrap().offset, 3);
    }

    #[test]
    fn test_add_offsets_covers_domain_exactly_once() {
        let num_evaluations = [4usize, 8, 8, 16, 32, 64, 128, 256, 512, 1024];
        let mut allocations: Vec<Allocation> =
            num_evaluations.iter().map(|&n| Allocation::new(n)).collect();

        add_offsets(&mut allocations).unwrap();

        // Input ordering is preserved.
        for (allocation, &n) in allocations.iter().zip(&num_evaluations) {
            assert_eq!(allocation.num_evaluations, n);
        }

        let total: usize = num_evaluations.iter().sum();
        let global = total.next_power_of_two();
        assert_eq!(global, 2048);

        let mut covered = vec![false; global];
        for allocation in &allocations {
            let interval = global / allocation.num_evaluations;
            for t in 0..allocation.num_evaluations {
                let index = allocation.root_index + t * interval;
                assert!(
                    !covered[index],
                    "index {index} assigned twice (root {} over {} evaluations)",
                    allocation.root_index, allocation.num_evaluations
                );
                covered[index] = true;
            }
        }
        assert!(covered.into_iter().all(|c| c), "global domain not fully covered");
    }

    #[test]
    fn test_add_offsets_assigns_distinct_roots() {
        let mut allocations: Vec<Allocation> =
            [8usize, 8, 8].iter().map(|&n| Allocation::new(n)).collect();
        add_offsets(&mut allocations).unwrap();

        let mut roots: Vec<usize> = allocations.iter().map(|a| a.root_index).collect();
        roots.sort_unstable();
        roots.dedup();
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn test_add_offsets_rejects_non_power_of_two() {
        let mut allocations = vec![Allocation::new(6)];
        match add_offsets(&mut allocations) {
            Err(KzgError::AllocationInfeasible) => {}
            other => panic!("expected AllocationInfeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_add_offsets_rejects_empty_total() {
        let mut allocations = vec![Allocation::new(0)];
        assert!(add_offsets(&mut allocations).is_err());
    }
}
