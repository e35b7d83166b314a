use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use binary_trunk::{NodeId, SearchTree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order, so every node only has a right child.
fn get_unbalanced_tree(num_levels: usize) -> (SearchTree<i32>, NodeId) {
    let (mut tree, root) = SearchTree::with_root(0);
    for x in (1..).take(num_nodes_in_full_tree(num_levels) - 1) {
        tree.insert(root, x);
    }

    (tree, root)
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that, without
/// any rebalancing, the resultant tree is still balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> (SearchTree<i32>, NodeId) {
    let xs = (0..).take(num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    let mid = xs.len() / 2;
    let (mut tree, root) = SearchTree::with_root(xs[mid]);
    fill_balanced_tree(&mut tree, root, &xs[..mid]);
    fill_balanced_tree(&mut tree, root, &xs[mid + 1..]);
    (tree, root)
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut SearchTree<i32>, root: NodeId, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(root, xs[mid]);
        fill_balanced_tree(tree, root, &xs[..mid]);
        fill_balanced_tree(tree, root, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a search tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut SearchTree<i32>, NodeId, i32)) {
    let mut group = c.benchmark_group(name);

    // Unbalanced trees are as deep as they are large and the walks recurse, so stay small.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, (tree, root)) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, root, black_box(largest_element_in_tree as i32));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, root, i| {
        let _node = black_box(tree.find(root, &i));
    });
    bench_helper(c, "find-miss", |tree, root, i| {
        let _node = black_box(tree.find(root, &(i + 1)));
    });
    bench_helper(c, "insert", |tree, root, i| {
        tree.insert(root, i + 1);
    });
    bench_helper(c, "rotate", |tree, root, i| {
        if let Some(node) = tree.find(root, &i) {
            tree.rotate(node);
        }
    });
    bench_helper(c, "visit-inorder", |tree, root, _| {
        let mut sum = 0i64;
        tree.visit_inorder(root, |node, _| sum += i64::from(*node.data()));
        black_box(sum);
    });
    bench_helper(c, "clone-subtree", |tree, root, _| {
        black_box(tree.clone_subtree(root));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
