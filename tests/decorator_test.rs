//! Tests for the labeling pass

use rstest::rstest;

use randtree::domain::{
    concat_label, decorate, decorate_in_place, label_for, Identifier, TreeArena, TreeGenerator,
    TreeNode, WidthBounds,
};

fn random_tree(seed: u64) -> TreeArena {
    TreeGenerator::seeded(seed)
        .generate(4, WidthBounds::new(1, 3).unwrap(), &Identifier::root())
        .unwrap()
}

#[rstest]
#[case(vec![0], "0")]
#[case(vec![0, 1, 2], "012")]
#[case(vec![0, 10, 2], "0102")]
fn given_identifier_when_label_for_then_concatenated(#[case] components: Vec<u32>, #[case] expected: &str) {
    assert_eq!(label_for(&Identifier::new(components)), expected);
}

#[rstest]
fn given_random_tree_when_decorate_then_every_node_labeled(#[values(1, 2, 3, 4)] seed: u64) {
    let tree = random_tree(seed);
    let labeled = decorate(&tree, concat_label).unwrap();

    assert_eq!(labeled.len(), tree.len());
    for (_, node) in labeled.iter() {
        let label = node.label().expect("label set");
        assert!(!label.is_empty());
        assert_eq!(label, label_for(node.identifier()));
    }
}

#[test]
fn given_different_shapes_when_decorate_then_same_identifier_same_label() {
    let target = Identifier::new(vec![0, 1, 0]);
    for seed in 0..20 {
        let tree = TreeGenerator::seeded(seed)
            .generate(3, WidthBounds::new(2, 4).unwrap(), &Identifier::root())
            .unwrap();
        let labeled = decorate(&tree, concat_label).unwrap();
        assert_eq!(labeled.get(&target).unwrap().label(), Some("010"));
    }
}

#[test]
fn given_tree_when_decorate_then_input_untouched_and_structure_equal() {
    let tree = random_tree(7);
    let labeled = decorate(&tree, concat_label).unwrap();

    assert!(tree.iter().all(|(_, n)| n.label().is_none()));
    let before: Vec<_> = tree.iter().map(|(_, n)| n.identifier().clone()).collect();
    let after: Vec<_> = labeled.iter().map(|(_, n)| n.identifier().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn given_failing_label_fn_when_decorate_then_error_returned_unmodified() {
    let tree = random_tree(3);
    let mut calls = 0;
    let result = decorate(&tree, |node: &mut TreeNode| {
        calls += 1;
        if node.identifier().depth() == 1 {
            return Err(format!("refused {}", node.identifier()));
        }
        node.set_label("ok");
        Ok(())
    });

    let err = result.unwrap_err();
    assert!(err.starts_with("refused (0, "));
    assert!(calls <= tree.len());
}

#[test]
fn given_tree_when_decorate_in_place_then_labels_applied_once_per_node() {
    let mut tree = random_tree(11);
    let mut calls = 0usize;
    decorate_in_place(&mut tree, |node: &mut TreeNode| -> Result<(), ()> {
        calls += 1;
        node.set_label(format!("n{}", label_for(node.identifier())));
        Ok(())
    })
    .unwrap();

    assert_eq!(calls, tree.len());
    assert_eq!(tree.root_node().unwrap().label(), Some("n0"));
}

#[test]
fn given_labeled_tree_when_render_then_shows_labels() {
    let tree = TreeGenerator::seeded(0)
        .generate(1, WidthBounds::new(2, 2).unwrap(), &Identifier::root())
        .unwrap();
    let rendered = decorate(&tree, concat_label).unwrap().to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0");
    assert!(lines[1].ends_with("00"));
    assert!(lines[2].ends_with("01"));
}
