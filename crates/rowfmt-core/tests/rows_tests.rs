//! Integration tests for the row partitioning invariants.

use rowfmt_core::{write_rows, RowError, RowWidth, Rows};

/// Render a sequence to a string through the public write path.
fn render<T: std::fmt::Display>(items: &[T], width: usize) -> String {
    let mut out = Vec::new();
    write_rows(&mut out, items, width).expect("formatting failed");
    String::from_utf8(out).expect("invalid UTF-8")
}

#[test]
fn test_spec_example_numbers() {
    let output = render(&[1, 2, 3, 4, 5], 2);
    assert_eq!(output, "1, 2\n3, 4\n5\n");
}

#[test]
fn test_spec_example_strings_one_row() {
    let output = render(&["a", "b", "c"], 5);
    assert_eq!(output, "a, b, c\n");
}

#[test]
fn test_empty_sequence_emits_no_rows() {
    for width in 1..=5 {
        let output = render::<i32>(&[], width);
        assert_eq!(output, "", "width {width} produced output for empty input");
    }
}

#[test]
fn test_rows_reproduce_sequence_in_order() {
    let items: Vec<u32> = (0..17).collect();

    for width in 1..=20 {
        let output = render(&items, width);
        let recovered: Vec<u32> = output
            .lines()
            .flat_map(|line| line.split(", "))
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(recovered, items, "order lost at width {width}");
    }
}

#[test]
fn test_row_lengths() {
    let items: Vec<u32> = (0..17).collect();

    for width in 1..=20 {
        let output = render(&items, width);
        let lines: Vec<&str> = output.lines().collect();

        let expected_rows = (items.len() + width - 1) / width;
        assert_eq!(lines.len(), expected_rows);

        for (i, line) in lines.iter().enumerate() {
            let elements = line.split(", ").count();
            if i + 1 < lines.len() {
                assert_eq!(elements, width, "short row before the last at width {width}");
            } else {
                let expected_last = match items.len() % width {
                    0 => width,
                    k => k,
                };
                assert_eq!(elements, expected_last, "wrong last row at width {width}");
            }
        }
    }
}

#[test]
fn test_width_equal_to_length() {
    let output = render(&[1, 2, 3], 3);
    assert_eq!(output, "1, 2, 3\n");
}

#[test]
fn test_zero_width_is_an_error() {
    let mut out = Vec::new();
    let err = write_rows(&mut out, &[1, 2, 3], 0).unwrap_err();
    assert!(matches!(err, RowError::InvalidRowWidth { width: 0 }));
    assert!(out.is_empty());
}

#[test]
fn test_display_wrapper_matches_write_path() {
    let items = [10, 20, 30, 40];
    let width = RowWidth::new(3).unwrap();
    assert_eq!(format!("{}", Rows::new(&items, width)), render(&items, 3));
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let items = ["x", "y", "z"];
    assert_eq!(render(&items, 2), render(&items, 2));
}
