use crate::{AsValue, EngineConfig, Error, ParameterizedStatement, Result, Value, is_wrapped};
use std::collections::HashMap;

/// Mutable builder accumulating named parameter bindings against a SQL
/// template, consumed by [`NamedBinder::resolve`] into an immutable
/// [`ParameterizedStatement`].
///
/// Named tokens are `prefix + name` (plus an optional suffix), `:name` by
/// default. A token wrapped in angle brackets (`<:name>`) is a list marker
/// and must be bound to a list or array value; it expands to one `?` per
/// element. Binding the same name twice keeps the later value.
///
/// ```rust
/// use sqlbind::NamedBinder;
///
/// let statement = NamedBinder::of("select * from guests where id = :id")
///     .bind("id", 1)
///     .resolve()
///     .unwrap();
/// assert_eq!(statement.sql(), "select * from guests where id = ?");
/// ```
pub struct NamedBinder {
    sql: String,
    prefix: String,
    suffix: String,
    parameters: HashMap<String, Value>,
}

impl NamedBinder {
    pub fn of(sql: impl Into<String>) -> Self {
        Self::with_config(sql, &EngineConfig::default())
    }

    pub fn with_config(sql: impl Into<String>, config: &EngineConfig) -> Self {
        Self {
            sql: sql.into(),
            prefix: config.named_prefix.clone().into_owned(),
            suffix: config.named_suffix.clone().into_owned(),
            parameters: HashMap::new(),
        }
    }

    /// Binds `value` under `name`, overwriting any previous binding.
    pub fn bind(mut self, name: impl Into<String>, value: impl AsValue) -> Self {
        self.parameters.insert(name.into(), value.as_value());
        self
    }

    pub fn bind_all(
        self,
        parameters: impl IntoIterator<Item = (impl Into<String>, impl AsValue)>,
    ) -> Self {
        parameters
            .into_iter()
            .fold(self, |binder, (name, value)| binder.bind(name, value))
    }

    /// Resolves the bound names against the template.
    ///
    /// Names are substituted longest first so that a short name never
    /// matches inside a longer one sharing its prefix (`:id` inside
    /// `:idid`). Every occurrence of a token is replaced and contributes
    /// its own copy of the value; the final parameter order follows the
    /// textual position of each occurrence. A bound name with no matching
    /// token is skipped silently.
    pub fn resolve(self) -> Result<ParameterizedStatement> {
        // Longest first so that a bound `idid` wins over a bound `id` at
        // the same offset.
        let mut tokens: Vec<(String, &Value)> = self
            .parameters
            .iter()
            .map(|(name, value)| {
                let token = format!("{}{}{}", self.prefix, name, self.suffix);
                (token, value)
            })
            .collect();
        tokens.sort_unstable_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let source = self.sql.as_str();
        let mut sql = String::with_capacity(source.len());
        let mut parameters = Vec::new();
        let mut i = 0;
        'source: while i < source.len() {
            if source[i..].starts_with(self.prefix.as_str()) {
                for (token, value) in &tokens {
                    if !source[i..].starts_with(token.as_str()) {
                        continue;
                    }
                    let end = i + token.len();
                    if self.suffix.is_empty() && continues_as_name(source, end) {
                        // Prefix of a longer (unbound) token, not this name.
                        continue;
                    }
                    if is_wrapped(source, i, end, '<', '>') {
                        let Some(elements) = value.elements() else {
                            return Err(Error::msg(format!(
                                "list marker <{}> requires a list or array value",
                                token,
                            )));
                        };
                        // The opening `<` was already copied verbatim.
                        sql.pop();
                        sql.push_str(&placeholders(elements.len()));
                        parameters.extend(elements.iter().cloned());
                        i = end + 1;
                    } else {
                        sql.push('?');
                        parameters.push((*value).clone());
                        i = end;
                    }
                    continue 'source;
                }
            }
            let Some(c) = source[i..].chars().next() else {
                break;
            };
            sql.push(c);
            i += c.len_utf8();
        }
        Ok(ParameterizedStatement::new(sql, parameters))
    }
}

fn continues_as_name(sql: &str, end: usize) -> bool {
    sql[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `?,?,...,?` with `count` placeholders.
pub(crate) fn placeholders(count: usize) -> String {
    let mut out = String::with_capacity(2 * count);
    for i in 0..count {
        if i > 0 {
            out.push(',');
        }
        out.push('?');
    }
    out
}
