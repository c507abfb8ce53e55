use fdinterp::interpolation::errors::{ErrorKind, InterpolationError};
use fdinterp::interpolation::table::{build_table, DifferenceTable, TableSamples};

type TableResult = Result<(), InterpolationError>;

fn sample_points() -> Vec<(f64, f64)> {
    vec![(1.0, 4.0), (2.0, 8.0), (3.0, 3.0), (4.0, 9.0), (5.0, 3.0)]
}

#[test]
fn columns_of_reference_table() -> TableResult {
    let table = build_table(&sample_points())?;

    assert_eq!(table.len(), 5);
    assert_eq!(table.order(), 4);
    assert_eq!(table.column(0), vec![4.0, 8.0, 3.0, 9.0, 3.0]);
    assert_eq!(table.column(1), vec![4.0, -5.0, 6.0, -6.0]);
    assert_eq!(table.column(2), vec![-9.0, 11.0, -12.0]);
    assert_eq!(table.column(3), vec![20.0, -23.0]);
    assert_eq!(table.column(4), vec![-43.0]);
    assert!(table.column(5).is_empty());
    Ok(())
}

#[test]
fn rows_follow_recurrence() -> TableResult {
    let table = build_table(&sample_points())?;
    let n = table.len();

    for j in 1..n {
        for i in 0..n - j {
            let expected = table.get(i + 1, j - 1).unwrap() - table.get(i, j - 1).unwrap();
            assert_eq!(table.get(i, j), Some(expected), "cell ({i}, {j})");
        }
    }
    assert_eq!(table.row(0), &[4.0, 4.0, -9.0, 20.0, -43.0]);
    assert_eq!(table.row(4), &[3.0]);
    Ok(())
}

#[test]
fn undefined_cells_are_none() -> TableResult {
    let table = build_table(&sample_points())?;

    assert_eq!(table.get(1, 4), None);
    assert_eq!(table.get(4, 1), None);
    assert_eq!(table.get(9, 0), None);

    let padded = table.padded_rows();
    assert_eq!(padded.len(), 5);
    assert!(padded.iter().all(|row| row.len() == 5));
    assert_eq!(padded[4], vec![Some(3.0), None, None, None, None]);
    assert_eq!(padded[3], vec![Some(9.0), Some(-6.0), None, None, None]);
    Ok(())
}

#[test]
fn sorts_unordered_samples() -> TableResult {
    let table = build_table(&[(3.0, 9.0), (1.0, 1.0), (2.0, 4.0)])?;

    assert_eq!(table.x(), &[1.0, 2.0, 3.0]);
    assert_eq!(table.y(), vec![1.0, 4.0, 9.0]);
    assert_eq!(table.column(1), vec![3.0, 5.0]);
    assert_eq!(table.column(2), vec![2.0]);
    assert_eq!(table.x_min(), 1.0);
    assert_eq!(table.x_max(), 3.0);
    Ok(())
}

#[test]
fn single_sample_is_constant_column() -> TableResult {
    let table = build_table(&[(2.5, -7.0)])?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.order(), 0);
    assert_eq!(table.row(0), &[-7.0]);
    assert_eq!(table.get(0, 1), None);
    assert_eq!(table.center_index(), 0);
    Ok(())
}

#[test]
fn center_index_is_structural_middle() -> TableResult {
    let odd  = build_table(&sample_points())?;
    let even = build_table(&[(0.0, 0.0), (1.0, 1.0), (2.0, 8.0), (3.0, 27.0)])?;

    assert_eq!(odd.center_index(), 2);
    assert_eq!(even.center_index(), 1);
    Ok(())
}

#[test]
fn from_xy_matches_pairs() -> TableResult {
    let x = [5.0, 4.0, 3.0, 2.0, 1.0];
    let y = [3.0, 9.0, 3.0, 8.0, 4.0];

    let a = DifferenceTable::from_xy(&x, &y)?;
    let b = build_table(&sample_points())?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn empty_input_error() {
    let err = build_table(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn duplicate_x_error() {
    let err = build_table(&[(1.0, 1.0), (1.0, 2.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 1.0 && x2 == 1.0));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn duplicate_x_detected_after_sorting() {
    let err = build_table(&[(2.0, 0.0), (5.0, 1.0), (2.0, 3.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn near_duplicate_x_error() {
    let err = build_table(&[(0.0, 0.0), (1e-13, 1.0), (1.0, 2.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn distinct_small_scale_x_accepted() -> TableResult {
    let table = build_table(&[(1e-13, 2.0), (0.0, 1.0)])?;
    assert_eq!(table.x(), &[0.0, 1e-13]);
    assert_eq!(table.column(1), vec![1.0]);

    let tiny = build_table(&[(0.0, 0.0), (1e-15, 1.0), (2e-15, 4.0)])?;
    assert_eq!(tiny.len(), 3);
    Ok(())
}

#[test]
fn repeated_single_value_error() {
    let err = build_table(&[(3.0, 1.0), (3.0, 1.0), (3.0, 1.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 3.0 && x2 == 3.0));
}

#[test]
fn custom_x_tol() -> TableResult {
    let samples = [(0.0, 0.0), (0.01, 1.0)];

    // tolerance is a fraction of the span (0.01 here)
    assert!(DifferenceTable::with_x_tol(&samples, 0.5).is_ok());
    let err = DifferenceTable::with_x_tol(&samples, 1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));

    let err = DifferenceTable::with_x_tol(&samples, 0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == 0.0));
    Ok(())
}

#[test]
fn non_finite_sample_error() {
    let err = build_table(&[(0.0, 1.0), (1.0, f64::NAN)]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    let err = build_table(&[(f64::INFINITY, 1.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
}

#[test]
fn unequal_length_error() {
    let err = DifferenceTable::from_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn display_blanks_undefined_cells() -> TableResult {
    let table = build_table(&[(0.0, 1.0), (1.0, 2.0), (2.0, 4.0)])?;
    let text = format!("{:.1}", table);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains('x') && lines[0].contains("d2"));
    assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["0.0", "1.0", "1.0", "1.0"]);
    assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["1.0", "2.0", "2.0"]);
    assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["2.0", "4.0"]);
    Ok(())
}

#[test]
fn table_is_shareable_across_threads() -> TableResult {
    let table = build_table(&sample_points())?;

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(table.column(1), vec![4.0, -5.0, 6.0, -6.0]);
            });
        }
    });
    Ok(())
}

#[test]
fn samples_round_trip_through_validation() -> TableResult {
    let table = build_table(&sample_points())?;
    let samples = TableSamples::from(table.clone());

    assert_eq!(samples.x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(samples.y, vec![4.0, 8.0, 3.0, 9.0, 3.0]);
    assert_eq!(DifferenceTable::try_from(samples)?, table);
    Ok(())
}

#[test]
fn malformed_samples_rejected() {
    let empty = TableSamples { x: vec![], y: vec![] };
    assert!(matches!(DifferenceTable::try_from(empty), Err(InterpolationError::EmptyInput)));

    let dup = TableSamples { x: vec![2.0, 1.0, 1.0], y: vec![1.0, 5.0, 0.0] };
    assert!(matches!(DifferenceTable::try_from(dup), Err(InterpolationError::DuplicateX { .. })));

    let ragged = TableSamples { x: vec![2.0, 1.0, 0.0], y: vec![1.0, 5.0] };
    assert!(matches!(
        DifferenceTable::try_from(ragged),
        Err(InterpolationError::UnequalLength { x_len: 3, y_len: 2 })
    ));
}
