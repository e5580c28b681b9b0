use crate::{
    AsValue, Error, ParameterizedStatement, Result, Value, count_placeholders, named::placeholders,
    special_placeholder_indexes,
};

/// Mutable builder accumulating positional parameters against a SQL
/// template, consumed by [`OrderedBinder::resolve`] into an immutable
/// [`ParameterizedStatement`].
///
/// Walking the template left to right, each plain `?` consumes one added
/// value and each `<?>` list marker consumes one added list or array value,
/// expanding to as many comma-joined `?`s as it has elements.
///
/// ```rust
/// use sqlbind::OrderedBinder;
///
/// let statement = OrderedBinder::of("select * from guests where address in (<?>)")
///     .add(vec!["Tokyo", "Kyoto"])
///     .resolve()
///     .unwrap();
/// assert_eq!(statement.sql(), "select * from guests where address in (?,?)");
/// ```
pub struct OrderedBinder {
    sql: String,
    parameters: Vec<Value>,
}

impl OrderedBinder {
    pub fn of(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends one positional value. List and array values stay whole until
    /// resolution pairs them with a `<?>` marker.
    pub fn add(mut self, value: impl AsValue) -> Self {
        self.parameters.push(value.as_value());
        self
    }

    pub fn add_all(self, values: impl IntoIterator<Item = impl AsValue>) -> Self {
        values
            .into_iter()
            .fold(self, |binder, value| binder.add(value))
    }

    pub fn resolve(self) -> Result<ParameterizedStatement> {
        let total = count_placeholders(&self.sql);
        if total != self.parameters.len() {
            return Err(Error::msg(format!(
                "template holds {} placeholders but {} parameters were added: {}",
                total,
                self.parameters.len(),
                self.sql,
            )));
        }
        let special = special_placeholder_indexes(&self.sql, '<', '>');
        let mut flattened = Vec::with_capacity(self.parameters.len());
        for (i, value) in self.parameters.iter().enumerate() {
            if special.contains(&i) {
                let Some(elements) = value.elements() else {
                    return Err(Error::msg(
                        "list marker <?> requires a list or array value",
                    ));
                };
                flattened.extend(elements.iter().cloned());
            } else {
                flattened.push(value.clone());
            }
        }
        Ok(ParameterizedStatement::new(
            self.expand_markers(),
            flattened,
        ))
    }

    /// Rewrites every `<?>` marker into its `?,?,...` expansion, leaving
    /// plain placeholders untouched.
    fn expand_markers(&self) -> String {
        let chars: Vec<char> = self.sql.chars().collect();
        let mut out = String::with_capacity(self.sql.len());
        let mut parameter = 0;
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '<' && i + 2 < chars.len() && chars[i + 1] == '?' && chars[i + 2] == '>'
            {
                out.push_str(&placeholders(self.parameters[parameter].expansion_len()));
                parameter += 1;
                i += 3;
            } else {
                if chars[i] == '?' {
                    parameter += 1;
                }
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }
}
