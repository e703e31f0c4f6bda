#[cfg(test)]
mod tests {
    use crate::flavor::InterpolateError;
    use crate::literal::HostValue;
    use crate::value::SqlValue;
    use crate::{escape, sql_values};
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn zoo_example() {
        let q = escape(
            "SELECT * FROM zoos WHERE name = ? AND acreage > ?",
            &sql_values!["Dallas", 40],
        )
        .unwrap();
        assert_eq!(q, "SELECT * FROM zoos WHERE name = 'Dallas' AND acreage > 40");
    }

    #[test]
    fn no_placeholders_no_args_is_unchanged() {
        let sql = "SELECT 1 FROM dual WHERE 'a' = 'a'";
        assert_eq!(escape(sql, &[]).unwrap(), sql);
        assert_eq!(escape("", &[]).unwrap(), "");
    }

    #[test]
    fn too_few_args() {
        let err = escape("SELECT * FROM zoos WHERE name = ?", &[]).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::BindingMismatch {
                supplied: 0,
                expected: 1,
            }
        );
    }

    #[test]
    fn too_few_args_still_counts_every_marker() {
        let err = escape("? ? ? ?", &sql_values![1, 2]).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::BindingMismatch {
                supplied: 2,
                expected: 4,
            }
        );
        assert_eq!(
            err.to_string(),
            "binding mismatch: 2 args supplied for 4 placeholders"
        );
    }

    #[test]
    fn too_many_args() {
        let err = escape("SELECT 1", &sql_values!["x"]).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::BindingMismatch {
                supplied: 1,
                expected: 0,
            }
        );

        let err = escape("a = ?", &sql_values![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::BindingMismatch {
                supplied: 3,
                expected: 1,
            }
        );
    }

    #[test]
    fn substitutes_in_argument_order() {
        let q = escape("?,?,?", &sql_values![3, 1, 2]).unwrap();
        assert_eq!(q, "3,1,2");
    }

    #[test]
    fn placeholder_inside_quoted_text_is_still_a_marker() {
        let q = escape("SELECT '?' WHERE a = ?", &sql_values![1, 2]).unwrap();
        assert_eq!(q, "SELECT '1' WHERE a = 2");

        let err = escape("SELECT '?' WHERE a = ?", &sql_values![1]).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::BindingMismatch {
                supplied: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let q = escape("a = ? AND b = ?", &sql_values!["?", "it's"]).unwrap();
        assert_eq!(q, "a = '?' AND b = 'it''s'");
    }

    #[test]
    fn multibyte_template_is_preserved() {
        let q = escape("SELECT '名字' WHERE x = ?", &sql_values!["值"]).unwrap();
        assert_eq!(q, "SELECT '名字' WHERE x = '值'");
    }

    #[test]
    fn composite_kinds_end_to_end() {
        let args = vec![
            SqlValue::range(1, 40),
            SqlValue::list(["a", "b"]),
            SqlValue::Null,
            datetime!(2020-01-02 03:04:05 UTC).into(),
        ];
        let q = escape(
            "SELECT * FROM t WHERE n BETWEEN ? AND s IN ? AND d IS ? AND ts < ?",
            &args,
        )
        .unwrap();
        assert_eq!(
            q,
            "SELECT * FROM t WHERE n BETWEEN 1 AND 40 AND s IN ('a', 'b') AND d IS NULL AND ts < '2020-01-02T03:04:05Z'"
        );
    }

    #[derive(Debug, Clone)]
    struct Handle;

    impl HostValue for Handle {}

    #[test]
    fn unsupported_value_fails_whole_call() {
        let err = escape("a = ? AND b = ?", &[1.into(), SqlValue::host(Handle)]).unwrap_err();
        let InterpolateError::UnsupportedKind { kind, value } = err else {
            panic!("expected UnsupportedKind");
        };
        assert!(kind.ends_with("Handle"));
        assert_eq!(value, "Handle");
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let handles: Vec<_> = (0..8_i64)
            .map(|i| {
                std::thread::spawn(move || escape("x = ?", &sql_values![i]).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("x = {i}"));
        }
    }
}
