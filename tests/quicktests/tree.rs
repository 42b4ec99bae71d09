use ordtree::Tree;

use quickcheck::TestResult;
use std::collections::HashSet;

/// Height of a minimal tree holding `n` values, `⌈lg(n + 1)⌉`.
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn sorted(mut xs: Vec<i8>) -> Vec<i8> {
    xs.sort();
    xs
}

#[test]
fn empty_trees() {
    let trees = [
        Tree::<i8>::new(),
        Tree::from_array(None),
        Tree::from_list(None::<Vec<i8>>),
    ];

    for tree in trees {
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
    }
}

#[test]
fn balance_examples() {
    let balanced: Tree<_> = [10, 20, 5, 25].into_iter().collect();
    assert_eq!(balanced.height(), 3);
    assert!(balanced.is_balanced());

    let mut unbalanced: Tree<_> = [10, 20, 30, 40].into_iter().collect();
    assert!(!unbalanced.is_balanced());

    let before = unbalanced.to_sorted_array();
    unbalanced.rebalance();
    assert!(unbalanced.is_balanced());
    assert_eq!(unbalanced.to_sorted_array(), before);
}

quickcheck::quickcheck! {
    fn len_counts_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        tree.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn sorted_extractions_match_inserted_values(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected = sorted(xs);

        tree.to_sorted_list() == expected
            && *tree.to_sorted_array() == *expected
            && tree.iter().copied().eq(expected.iter().copied())
    }
}

quickcheck::quickcheck! {
    fn extraction_is_idempotent(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.to_sorted_array() == tree.to_sorted_array()
            && tree.to_sorted_list() == tree.to_sorted_list()
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.to_sorted_array();

        tree.rebalance();

        tree.len() == xs.len() && tree.to_sorted_array() == before
    }
}

quickcheck::quickcheck! {
    fn rebalance_balances_distinct_values(xs: HashSet<i16>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();

        tree.rebalance();

        tree.is_balanced() && tree.height() == minimal_height(xs.len())
    }
}

quickcheck::quickcheck! {
    fn from_array_is_balanced(xs: HashSet<i16>) -> bool {
        let tree = Tree::from_array(Some(xs.iter().copied().collect()));

        tree.is_balanced()
            && tree.height() == minimal_height(xs.len())
            && xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn from_list_matches_sequential_inserts(xs: Vec<i8>) -> TestResult {
        if xs.is_empty() {
            return TestResult::discard();
        }
        let listed = Tree::from_list(Some(xs.clone()));
        let mut inserted = Tree::new();
        for x in &xs {
            inserted.insert(*x);
        }

        TestResult::from_bool(
            listed.height() == inserted.height()
                && listed.root().map(|n| *n.value()) == Some(xs[0])
                && listed.to_sorted_list() == inserted.to_sorted_list(),
        )
    }
}
