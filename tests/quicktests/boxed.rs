use bstree::boxed::Tree;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vec.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, duplicates included.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                let pos = model.partition_point(|x| x <= k);
                model.insert(pos, k.clone());
            }
            Op::Delete(k) => {
                let removed = bst.delete(k);
                match model.binary_search(k) {
                    Ok(pos) => {
                        model.remove(pos);
                        assert!(removed);
                    }
                    Err(_) => assert!(!removed),
                }
            }
            Op::Clear => {
                bst.clear();
                model.clear();
            }
        }
    }
}

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

fn is_sorted(keys: &[&i8]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);

    tree.in_order().into_iter().eq(model.iter())
        && tree.len() == model.len()
        && tree.min() == model.first()
        && tree.max() == model.last()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    is_sorted(&build(&xs).in_order())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = build(&xs);
    let copies = xs.iter().filter(|&&x| x == k).count();
    let len = tree.len();

    let removed = tree.delete(&k);

    removed == (copies > 0)
        && tree.len() == len - copies.min(1)
        && tree.contains(&k) == (copies > 1)
        && is_sorted(&tree.in_order())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        // We may have inserted the same key multiple times - delete each one.
        while tree.delete(delete) {}
    }

    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deletes.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn deleting_missing_key_changes_nothing(xs: Vec<i8>, k: i8) -> bool {
    if xs.contains(&k) {
        return true;
    }
    let mut tree = build(&xs);
    let before = tree.clone();

    !tree.delete(&k)
        && tree.len() == before.len()
        && tree.height() == before.height()
        && tree.in_order() == before.in_order()
}

#[quickcheck]
fn counts_agree(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let len = tree.len();

    len == xs.len()
        && tree.pre_order().len() == len
        && tree.post_order().len() == len
        && tree.count_leaves() <= len
        && tree.height() <= len
        && (len == 0) == (tree.count_leaves() == 0)
        && tree.render().lines().count() == len
}

#[quickcheck]
fn height_is_at_least_balanced(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    // A tree with `h` levels holds at most `2^h - 1` nodes.
    let height = tree.height() as u32;
    height >= 64 || tree.len() < 2usize.pow(height)
}

#[quickcheck]
fn render_is_deterministic(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.render() == tree.render() && tree.render() == tree.clone().render()
}
