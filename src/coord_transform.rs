// src/coord_transform.rs
//
// Coordinate-axis flips on bounding-box tables.

use ndarray::{Array2, Axis};

use crate::constants::BOX_TABLE_COLUMNS;
use crate::error::EvalError;

/// Swap the x and y coordinates in a box table of shape [n, 5].
///
/// Rows are [x1, y1, x2, y2, class_id]; the result holds
/// [y1, x1, y2, x2, class_id]. The input is left untouched and a new table
/// is returned.
///
/// # Errors
/// `EvalError::ShapeMismatch` when the table does not have exactly 5 columns.
///
/// The swap is a single column gather so every output column reads the
/// original values; sequential in-place writes would corrupt a row by
/// reading an already-overwritten column.
pub fn swap_box_axes(boxes: &Array2<f64>) -> Result<Array2<f64>, EvalError> {
    if boxes.ncols() != BOX_TABLE_COLUMNS {
        return Err(EvalError::ShapeMismatch {
            expected: BOX_TABLE_COLUMNS,
            found: boxes.ncols(),
        });
    }
    Ok(boxes.select(Axis(1), &[1, 0, 3, 2, 4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_boxes() -> Array2<f64> {
        array![
            [10.0, 5.0, 15.0, 6.0, 0.0],
            [11.0, 3.0, 13.0, 6.0, 0.0],
            [5.0, 3.0, 13.0, 6.0, 1.0],
            [4.0, 4.0, 13.0, 6.0, 1.0],
            [6.0, 5.0, 13.0, 16.0, 1.0],
        ]
    }

    #[test]
    fn test_swap_exchanges_coordinate_columns() {
        let boxes = sample_boxes();
        let swapped = swap_box_axes(&boxes).unwrap();
        assert_eq!(swapped.row(0).to_vec(), vec![5.0, 10.0, 6.0, 15.0, 0.0]);
        for row in 0..boxes.nrows() {
            assert_eq!(swapped[[row, 0]], boxes[[row, 1]]);
            assert_eq!(swapped[[row, 1]], boxes[[row, 0]]);
            assert_eq!(swapped[[row, 2]], boxes[[row, 3]]);
            assert_eq!(swapped[[row, 3]], boxes[[row, 2]]);
            assert_eq!(swapped[[row, 4]], boxes[[row, 4]]);
        }
    }

    #[test]
    fn test_swap_leaves_input_unmodified() {
        let boxes = sample_boxes();
        let original = boxes.clone();
        let _ = swap_box_axes(&boxes).unwrap();
        assert_eq!(boxes, original);
    }

    #[test]
    fn test_swap_twice_is_identity() {
        let boxes = sample_boxes();
        let twice = swap_box_axes(&swap_box_axes(&boxes).unwrap()).unwrap();
        assert_eq!(twice, boxes);
    }

    #[test]
    fn test_swap_empty_table() {
        let boxes = Array2::<f64>::zeros((0, 5));
        let swapped = swap_box_axes(&boxes).unwrap();
        assert_eq!(swapped.dim(), (0, 5));
    }

    #[test]
    fn test_swap_rejects_wrong_column_count() {
        let boxes = Array2::<f64>::zeros((3, 4));
        match swap_box_axes(&boxes) {
            Err(EvalError::ShapeMismatch {
                expected: 5,
                found: 4,
            }) => {}
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }
}
