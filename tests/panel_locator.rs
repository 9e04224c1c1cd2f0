#![allow(missing_docs)]
//! Pixel order inside a single panel, for every corner, axis and sequence.

use matrix_envoy::matrix::layout::{Corner, MajorAxis, MatrixLayout, PanelOrdering, Sequence};
use proptest::prelude::*;

const CORNERS: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomLeft,
    Corner::BottomRight,
];
const AXES: [MajorAxis; 2] = [MajorAxis::Rows, MajorAxis::Columns];
const SEQUENCES: [Sequence; 2] = [Sequence::Progressive, Sequence::Zigzag];

fn all_orderings() -> impl Iterator<Item = PanelOrdering> {
    CORNERS.into_iter().flat_map(|corner| {
        AXES.into_iter().flat_map(move |axis| {
            SEQUENCES
                .into_iter()
                .map(move |sequence| PanelOrdering::new(corner, axis, sequence))
        })
    })
}

/// LED indexes laid out as the canvas looks, one inner vector per row.
fn index_grid(layout: &MatrixLayout) -> Vec<Vec<usize>> {
    (0..layout.height() as u16)
        .map(|y| {
            (0..layout.width() as u16)
                .map(|x| layout.led_index(x, y).expect("coordinate is on the canvas"))
                .collect()
        })
        .collect()
}

fn assert_bijection(layout: &MatrixLayout) {
    let mut seen = vec![false; layout.led_count()];
    for index in index_grid(layout).into_iter().flatten() {
        assert!(index < layout.led_count(), "{layout:?} produced {index}");
        assert!(!seen[index], "{layout:?} produced {index} twice");
        seen[index] = true;
    }
    assert!(seen.into_iter().all(|hit| hit));
}

#[test]
fn top_left_rows_zigzag() {
    let layout = MatrixLayout::single(
        4,
        3,
        PanelOrdering::new(Corner::TopLeft, MajorAxis::Rows, Sequence::Zigzag),
    );
    assert_eq!(
        index_grid(&layout),
        [[0, 1, 2, 3], [7, 6, 5, 4], [8, 9, 10, 11]]
    );
}

#[test]
fn top_right_columns_progressive() {
    let layout = MatrixLayout::single(
        4,
        3,
        PanelOrdering::new(Corner::TopRight, MajorAxis::Columns, Sequence::Progressive),
    );
    assert_eq!(
        index_grid(&layout),
        [[9, 6, 3, 0], [10, 7, 4, 1], [11, 8, 5, 2]]
    );
}

#[test]
fn bottom_right_columns_zigzag() {
    let layout = MatrixLayout::single(
        3,
        2,
        PanelOrdering::new(Corner::BottomRight, MajorAxis::Columns, Sequence::Zigzag),
    );
    assert_eq!(index_grid(&layout), [[5, 2, 1], [4, 3, 0]]);
}

#[test]
fn default_ordering_is_row_major_from_top_left() {
    let layout = MatrixLayout::single(3, 2, PanelOrdering::default());
    assert_eq!(index_grid(&layout), [[0, 1, 2], [3, 4, 5]]);
}

#[test]
fn first_led_sits_in_the_configured_corner() {
    for ordering in all_orderings() {
        let layout = MatrixLayout::single(5, 4, ordering);
        let x = if ordering.corner.is_right() { 4 } else { 0 };
        let y = if ordering.corner.is_bottom() { 3 } else { 0 };
        assert_eq!(layout.led_index(x, y), Some(0), "{ordering:?}");
    }
}

#[test]
fn every_ordering_is_a_bijection() {
    for ordering in all_orderings() {
        assert_bijection(&MatrixLayout::single(5, 3, ordering));
        assert_bijection(&MatrixLayout::single(1, 4, ordering));
        assert_bijection(&MatrixLayout::single(4, 1, ordering));
    }
}

#[test]
fn off_panel_coordinates_have_no_led() {
    let layout = MatrixLayout::single(4, 3, PanelOrdering::default());
    assert_eq!(layout.led_index(4, 0), None);
    assert_eq!(layout.led_index(0, 3), None);
    assert_eq!(layout.led_index(u16::MAX, u16::MAX), None);
}

proptest! {
    #[test]
    fn random_panels_are_bijections(
        width in 1u16..=12,
        height in 1u16..=12,
        corner in 0usize..4,
        axis in 0usize..2,
        sequence in 0usize..2,
    ) {
        let ordering = PanelOrdering::new(CORNERS[corner], AXES[axis], SEQUENCES[sequence]);
        assert_bijection(&MatrixLayout::single(width, height, ordering));
    }

    #[test]
    fn zigzag_neighbors_are_adjacent(width in 1u16..=10, height in 1u16..=10, corner in 0usize..4) {
        // Consecutive LEDs on a serpentine panel are always physically next to each other.
        let layout = MatrixLayout::single(
            width,
            height,
            PanelOrdering::new(CORNERS[corner], MajorAxis::Rows, Sequence::Zigzag),
        );
        let mut positions = vec![(0i32, 0i32); layout.led_count()];
        for (y, row) in index_grid(&layout).into_iter().enumerate() {
            for (x, index) in row.into_iter().enumerate() {
                positions[index] = (x as i32, y as i32);
            }
        }
        for pair in positions.windows(2) {
            let distance = (pair[0].0 - pair[1].0).abs() + (pair[0].1 - pair[1].1).abs();
            prop_assert_eq!(distance, 1);
        }
    }
}
