//! Validates cell ordering, shape normalization, and transform round trips

use polyform::EnumerationError;
use polyform::geometry::{Cell, Shape};

#[test]
fn test_cell_ordering_is_lexicographic() {
    let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
    cells.sort_unstable();
    assert_eq!(
        cells,
        vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]
    );
}

#[test]
fn test_construction_translates_and_sorts() {
    let shape = Shape::new(vec![Cell::new(3, 5), Cell::new(2, 5), Cell::new(2, 4)])
        .expect("three cells form a valid shape");
    assert_eq!(
        shape.cells(),
        &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
    );
    assert_eq!(shape.len(), 3);
    assert!(!shape.is_empty());
}

#[test]
fn test_construction_deduplicates_cells() {
    let shape = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0)])
        .expect("duplicates collapse to a valid shape");
    assert_eq!(shape.cells(), &[Cell::new(0, 0), Cell::new(1, 0)]);
}

#[test]
fn test_empty_construction_is_rejected() {
    let result = Shape::new(Vec::new());
    assert!(matches!(result, Err(EnumerationError::EmptyShape)));
}

#[test]
fn test_equal_cell_sets_compare_and_hash_equal() {
    let a = Shape::new(vec![Cell::new(4, 4), Cell::new(5, 4)]).expect("valid shape");
    let b = Shape::new(vec![Cell::new(1, 0), Cell::new(0, 0)]).expect("valid shape");
    assert_eq!(a, b);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
}

#[test]
fn test_with_cell_renormalizes_negative_coordinates() {
    let extended = Shape::monomino().with_cell(Cell::new(-1, 0));
    assert_eq!(extended.cells(), &[Cell::new(0, 0), Cell::new(1, 0)]);
}

#[test]
fn test_rotation_maps_horizontal_to_vertical() {
    let horizontal = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0)]).expect("valid shape");
    let vertical = horizontal.rotated90();
    assert_eq!(vertical.cells(), &[Cell::new(0, 0), Cell::new(0, 1)]);
}

#[test]
fn test_four_rotations_return_the_original() {
    let shape = Shape::new(vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(2, 1),
    ])
    .expect("valid shape");
    let rotated = shape.rotated90().rotated90().rotated90().rotated90();
    assert_eq!(shape, rotated);
}

#[test]
fn test_double_reflection_returns_the_original() {
    let shape = Shape::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)])
        .expect("valid shape");
    assert_eq!(shape, shape.reflected().reflected());
}

#[test]
fn test_membership_and_extent() {
    let shape = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)])
        .expect("valid shape");
    assert!(shape.contains(Cell::new(1, 1)));
    assert!(!shape.contains(Cell::new(0, 1)));
    assert_eq!(shape.extent(), (2, 2));
}
