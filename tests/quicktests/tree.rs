use bstree::Tree;

use std::collections::BTreeSet;
use std::ops::Bound;

/// Builds a tree and the `BTreeSet` it should behave like.
fn build(xs: &[i16]) -> (Tree<i16>, BTreeSet<i16>) {
    (xs.iter().copied().collect(), xs.iter().copied().collect())
}

#[quickcheck]
fn inorder_is_sorted_distinct_input(xs: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    let mut expected = String::new();
    for x in &set {
        expected.push_str(&format!("{x} "));
    }
    let mut inorder = String::new();
    tree.traverse_inorder(&mut inorder).unwrap();

    inorder == expected && tree.check_sorting_invariant()
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    tree.len() == set.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i16>) -> bool {
    let (tree, _) = build(&xs);

    xs.iter().all(|x| tree.find(x).get() == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let (tree, added) = build(&xs);

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x) == tree.end() && !tree.contains(x))
}

#[quickcheck]
fn min_greater_than_matches_btreeset(xs: Vec<i16>, queries: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    queries.iter().chain(&xs).all(|q| {
        let expected = set.range((Bound::Excluded(q), Bound::Unbounded)).next();
        tree.min_greater_than(q).get() == expected
    })
}

#[quickcheck]
fn extremes(xs: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    tree.min_element().get() == set.first()
        && tree.max_element().get() == set.last()
        && tree.min_element() == tree.begin()
}

#[quickcheck]
fn cursor_walk_matches_btreeset(xs: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    let mut cursor = tree.begin();
    for x in &set {
        if cursor.get() != Some(x) {
            return false;
        }
        cursor.move_next();
    }
    cursor == tree.end()
}

#[quickcheck]
fn copies_match(xs: Vec<i16>) -> bool {
    let (tree, _) = build(&xs);
    let copy = tree.clone();

    let (mut pre_tree, mut pre_copy) = (String::new(), String::new());
    tree.traverse_preorder(&mut pre_tree).unwrap();
    copy.traverse_preorder(&mut pre_copy).unwrap();

    copy.len() == tree.len() && pre_tree == pre_copy && copy.height() == tree.height()
}

#[quickcheck]
fn owned_iteration_matches_btreeset(xs: Vec<i16>) -> bool {
    let (tree, set) = build(&xs);

    tree.into_iter().eq(set)
}
