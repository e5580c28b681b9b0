#[cfg(test)]
mod tests {
    use sqlbind::{AsValue, embed_named, embed_ordered};

    #[test]
    fn embed_ordered_inlines_literals() {
        let sql = embed_ordered(
            "select * from guests where id={?} and name={?}",
            &[1.as_value(), "it's".as_value()],
        )
        .unwrap();
        assert_eq!(sql, "select * from guests where id=1 and name='it''s'");
    }

    #[test]
    fn embed_ordered_ignores_surplus_values() {
        let sql = embed_ordered("select * from guests where id={?}", &[1.as_value(), 2.as_value()])
            .unwrap();
        assert_eq!(sql, "select * from guests where id=1");
    }

    #[test]
    fn embed_ordered_fails_on_unresolved_marker() {
        let error = embed_ordered("select * from guests where id={?}", &[]).unwrap_err();
        assert!(
            error.to_string().contains("could not embed all parameters"),
            "{}",
            error
        );
    }

    #[test]
    fn embed_named_inlines_by_position() {
        let sql = embed_named(
            "select * from guests where name={:name} and id={:id}",
            [("id", 1.as_value()), ("name", "a".as_value())],
        )
        .unwrap();
        assert_eq!(sql, "select * from guests where name='a' and id=1");
    }

    #[test]
    fn embed_named_fails_on_missing_name() {
        let error = embed_named(
            "select * from guests where name={:name} and id={:id}",
            [("name", 1.as_value())],
        )
        .unwrap_err();
        assert!(
            error.to_string().contains("could not embed all parameters"),
            "{}",
            error
        );
    }
}
