/// Asserts that the field renders as the given glyph rows.
#[macro_export]
macro_rules! assert_field {
    ($field:expr, [$($row:expr),* $(,)?]) => {
        let expected: Vec<String> = vec![$($row.to_string()),*];
        assert_eq!(
            $crate::common::snapshot(&$field),
            expected,
            "Field does not match expected glyphs"
        );
    };
}

/// Asserts that no cell in the field is dead.
#[macro_export]
macro_rules! assert_no_dead {
    ($field:expr) => {
        assert_eq!(
            $field.census().count(biotope_lib::model::Cell::Dead),
            0,
            "Field should contain no dead cells"
        );
    };
}
