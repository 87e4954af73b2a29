//! Tests for validated board positions.

use tictacrl_engine::{InvalidPositionError, Position};

#[test]
fn test_every_in_range_pair_constructs() {
    for row in 0..3 {
        for column in 0..3 {
            let pos = Position::new(row, column).expect("in range");
            assert_eq!(pos.row() as i64, row);
            assert_eq!(pos.column() as i64, column);
        }
    }
}

#[test]
fn test_out_of_range_pairs_fail() {
    for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 3), (3, 3), (-5, 7), (i64::MIN, i64::MAX)] {
        assert_eq!(
            Position::new(row, column),
            Err(InvalidPositionError {
                row: row.into(),
                column: column.into()
            }),
            "({row}, {column}) should be rejected"
        );
    }
}

#[test]
fn test_oversized_usize_reported_unchanged() {
    let err = Position::try_from((usize::MAX, 1)).unwrap_err();
    assert_eq!(err.row, usize::MAX as i128);
    assert_eq!(err.to_string(), format!("Invalid board position ({}, 1)", usize::MAX));
}

#[test]
fn test_error_message_names_coordinates() {
    let err = Position::new(4, -2).unwrap_err();
    assert_eq!(err.to_string(), "Invalid board position (4, -2)");
}

#[test]
fn test_all_positions_row_major() {
    let all: Vec<_> = Position::all().map(|p| (p.row(), p.column())).collect();
    assert_eq!(all.len(), 9);
    assert_eq!(all[0], (0, 0));
    assert_eq!(all[3], (1, 0));
    assert_eq!(all[8], (2, 2));
}

#[test]
fn test_serde_validates_on_deserialize() {
    let pos = Position::new(2, 1).unwrap();
    let json = serde_json::to_string(&pos).unwrap();
    assert_eq!(json, r#"{"row":2,"column":1}"#);
    assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), pos);

    let err = serde_json::from_str::<Position>(r#"{"row":3,"column":0}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid board position (3, 0)"));
}

#[test]
fn test_display() {
    assert_eq!(Position::new(0, 2).unwrap().to_string(), "(0, 2)");
}
