//! Validates frontier computation and full enumeration counts

use polyform::EnumerationError;
use polyform::algorithm::growth::{GrowthConfig, GrowthEngine};
use polyform::algorithm::occupancy::frontier_cells;
use polyform::algorithm::symmetry::SymmetryMode;
use polyform::geometry::{Cell, Shape};
use polyform::io::configuration::MAX_TARGET_SIZE;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn count_for(target_size: usize, mode: SymmetryMode) -> usize {
    let engine = GrowthEngine::new(GrowthConfig { target_size, mode }).expect("size is in range");
    engine
        .run()
        .expect("no cancellation flag installed")
        .count()
}

#[test]
fn test_monomino_frontier_has_four_candidates() {
    let frontier = frontier_cells(&Shape::monomino());
    assert_eq!(frontier.len(), 4);
}

#[test]
fn test_domino_frontier_has_six_candidates() {
    let domino = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0)]).expect("valid shape");
    assert_eq!(frontier_cells(&domino).len(), 6);
}

#[test]
fn test_frontier_deduplicates_shared_neighbours() {
    // (1, 1) touches two members of the L tromino and must appear once
    let tromino = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)])
        .expect("valid shape");
    let frontier = frontier_cells(&tromino);
    assert_eq!(frontier.len(), 7);
    assert_eq!(
        frontier
            .iter()
            .filter(|&&cell| cell == Cell::new(1, 1))
            .count(),
        1
    );
}

#[test]
fn test_frontier_is_disjoint_from_the_shape() {
    let tromino = Shape::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)])
        .expect("valid shape");
    for cell in frontier_cells(&tromino) {
        assert!(!tromino.contains(cell));
    }
}

#[test]
fn test_free_counts_match_the_reference() {
    let expected = [1, 1, 2, 5, 12, 35, 108];
    for (index, &count) in expected.iter().enumerate() {
        assert_eq!(count_for(index + 1, SymmetryMode::Free), count);
    }
}

#[test]
fn test_one_sided_counts_match_the_reference() {
    let expected = [1, 1, 2, 7, 18, 60];
    for (index, &count) in expected.iter().enumerate() {
        assert_eq!(count_for(index + 1, SymmetryMode::OneSided), count);
    }
}

#[test]
fn test_fixed_counts_match_the_reference() {
    let expected = [1, 2, 6, 19, 63, 216];
    for (index, &count) in expected.iter().enumerate() {
        assert_eq!(count_for(index + 1, SymmetryMode::Fixed), count);
    }
}

#[test]
fn test_single_growth_step_yields_the_domino() {
    assert_eq!(count_for(2, SymmetryMode::Free), 1);
    assert_eq!(count_for(2, SymmetryMode::OneSided), 1);
    // Horizontal and vertical dominoes stay distinct without rotation collapse
    assert_eq!(count_for(2, SymmetryMode::Fixed), 2);
}

#[test]
fn test_fixed_mode_never_merges_orientations() {
    assert!(count_for(4, SymmetryMode::Fixed) > count_for(4, SymmetryMode::Free));
}

#[test]
fn test_generation_contains_the_square_tetromino() {
    let engine = GrowthEngine::new(GrowthConfig {
        target_size: 4,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    assert_eq!(engine.config().target_size, 4);

    let generation = engine.run().expect("no cancellation flag installed");
    // The square maps to itself under every transform, so it is canonical
    let square = Shape::new(vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(0, 1),
        Cell::new(1, 1),
    ])
    .expect("four cells form a valid shape");
    assert!(generation.contains(&square));
}

#[test]
fn test_generation_shapes_have_the_target_size() {
    let engine = GrowthEngine::new(GrowthConfig {
        target_size: 4,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    let generation = engine.run().expect("no cancellation flag installed");
    assert_eq!(generation.size(), 4);
    for shape in &generation {
        assert_eq!(shape.len(), 4);
    }
}

#[test]
fn test_sorted_extraction_is_strictly_increasing() {
    let engine = GrowthEngine::new(GrowthConfig {
        target_size: 5,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    let shapes = engine
        .run()
        .expect("no cancellation flag installed")
        .into_sorted_shapes();
    for (previous, next) in shapes.iter().zip(shapes.iter().skip(1)) {
        assert!(previous < next);
    }
}

#[test]
fn test_advance_stops_at_the_target_size() {
    let mut engine = GrowthEngine::new(GrowthConfig {
        target_size: 3,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    assert_eq!(engine.current_size(), 1);
    assert!(engine.advance());
    assert_eq!(engine.current_size(), 2);
    assert!(!engine.advance());
    assert_eq!(engine.current_size(), 3);
    assert!(!engine.advance());
    assert_eq!(engine.current_size(), 3);
}

#[test]
fn test_counters_report_the_final_transition() {
    let engine = GrowthEngine::new(GrowthConfig {
        target_size: 2,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    let counters = engine.counters();
    let generation = engine.run().expect("no cancellation flag installed");
    assert_eq!(generation.count(), 1);

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.current_size, 2);
    assert_eq!(snapshot.canonical_count, 1);
    // The monomino has exactly four frontier cells
    assert_eq!(snapshot.raw_extensions, 4);
}

#[test]
fn test_zero_size_is_rejected_before_any_work() {
    let result = GrowthEngine::new(GrowthConfig {
        target_size: 0,
        mode: SymmetryMode::Free,
    });
    assert!(matches!(
        result,
        Err(EnumerationError::InvalidSize { size: 0, .. })
    ));
}

#[test]
fn test_oversized_target_is_rejected() {
    let result = GrowthEngine::new(GrowthConfig {
        target_size: MAX_TARGET_SIZE + 1,
        mode: SymmetryMode::Free,
    });
    assert!(matches!(result, Err(EnumerationError::InvalidSize { .. })));
}

#[test]
fn test_preset_cancellation_flag_stops_before_growth() {
    let mut engine = GrowthEngine::new(GrowthConfig {
        target_size: 6,
        mode: SymmetryMode::Free,
    })
    .expect("size is in range");
    let flag = Arc::new(AtomicBool::new(true));
    engine.set_cancel_flag(Arc::clone(&flag));

    let result = engine.run();
    assert!(matches!(
        result,
        Err(EnumerationError::Cancelled { completed_size: 1 })
    ));
}
