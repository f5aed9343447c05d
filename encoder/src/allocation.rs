use ark_bn254::Fr;
use ark_std::Zero;

use rust_da_bn254_primitives::{errors::KzgError, fft};

/// One configuration's slot in the global evaluation domain of the mixed
/// encoding. After [add_offsets], the configuration owns the coset
/// `{ root_index + t * (M / num_evaluations) : t in [0, num_evaluations) }`
/// of the size-M global domain, and `offset = w_M^root_index`.
#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub num_evaluations: usize,
    pub root_index: usize,
    pub offset: Fr,
}

impl Allocation {
    pub fn new(num_evaluations: usize) -> Self {
        Allocation {
            num_evaluations,
            root_index: 0,
            offset: Fr::zero(),
        }
    }
}

/// Node at depth `d` represents the coset `{ offset + t * 2^d }` of the
/// global domain, with `value = M / 2^d` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    pub value: usize,
    pub offset: usize,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(value: usize, offset: usize) -> Self {
        TreeNode {
            value,
            offset,
            left: None,
            right: None,
        }
    }
}

/// Perfect binary tree over a domain of `2^depth` points; children split a
/// node's coset into its even and odd halves.
pub fn new_tree(depth: u32) -> TreeNode {
    let mut root = TreeNode::new(1 << depth, 0);
    build_tree(0, depth, &mut root);
    root
}

fn build_tree(depth: u32, max_depth: u32, node: &mut TreeNode) {
    if depth == max_depth {
        return;
    }

    let depth = depth + 1;
    let value = 1 << (max_depth - depth);
    let mut left = Box::new(TreeNode::new(value, node.offset));
    let mut right = Box::new(TreeNode::new(value, node.offset + (1 << (depth - 1))));

    build_tree(depth, max_depth, &mut left);
    build_tree(depth, max_depth, &mut right);

    node.left = Some(left);
    node.right = Some(right);
}

/// Assigns every allocation a disjoint coset of the global domain of size
/// `M = next_pow2(sum of num_evaluations)`.
///
/// Allocations are placed largest first by a left-first depth-first walk
/// that consumes the head whenever a node of matching size is reached. With
/// every size a power of two this greedy fit is exact, so failure means the
/// sizes themselves are infeasible (e.g. not a power of two).
pub fn add_offsets(allocations: &mut [Allocation]) -> Result<(), KzgError> {
    let total: usize = allocations.iter().map(|a| a.num_evaluations).sum();
    if total == 0 {
        return Err(KzgError::AllocationInfeasible);
    }

    let depth = total.next_power_of_two().trailing_zeros();
    let roots = fft::expanded_roots_of_unity(1 << depth)?;

    // Sort stably by size, descending; ties keep input order.
    let mut order: Vec<usize> = (0..allocations.len()).collect();
    order.sort_by(|&a, &b| {
        allocations[b]
            .num_evaluations
            .cmp(&allocations[a].num_evaluations)
    });

    let tree = new_tree(depth);
    let mut cursor = 0;
    dfs_assign(&tree, &order, &mut cursor, allocations, &roots);

    if cursor != order.len() {
        return Err(KzgError::AllocationInfeasible);
    }
    Ok(())
}

fn dfs_assign(
    node: &TreeNode,
    order: &[usize],
    cursor: &mut usize,
    allocations: &mut [Allocation],
    roots: &[Fr],
) {
    if *cursor >= order.len() {
        return;
    }

    let head = order[*cursor];
    if allocations[head].num_evaluations == node.value {
        allocations[head].root_index = node.offset;
        allocations[head].offset = roots[node.offset];
        *cursor += 1;
        return;
    }

    if let Some(left) = &node.left {
        dfs_assign(left, order, cursor, allocations, roots);
    }
    if let Some(right) = &node.right {
        dfs_assign(right, order, cursor, allocations, roots);
    }
}
