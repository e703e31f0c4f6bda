#[cfg(test)]
mod tests {
    use crate::{SqlValue, escape, sql_values};
    use pretty_assertions::assert_eq;

    #[test]
    fn sql_values_empty() {
        let args = sql_values![];
        assert!(args.is_empty());
    }

    #[test]
    fn sql_values_mixed_kinds_feed_escape() {
        let args = sql_values!["a", 1_u8, true, SqlValue::range(1, 2)];
        assert_eq!(args.len(), 4);
        assert_eq!(
            escape("? ? ? ?", &args).unwrap(),
            "'a' 1 TRUE 1 AND 2"
        );
    }
}
