//! Rendering of [`QuerySpec`] into a parameterised `WHERE` clause.
//!
//! The clause and its parameter list are built once and bound into both the
//! count query and the row query, so the two cannot drift apart.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

use crate::domain::shipment::{Predicate, QuerySpec, SEARCH_COLUMNS};

/// A bound value for a `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SqlParam {
    BigInt(i64),
    Text(String),
    Bool(bool),
}

/// `WHERE` clause text (without the keyword) plus its parameters, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WhereClause {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl WhereClause {
    /// Number of the next free placeholder.
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }

    /// Bind every parameter, in order.
    pub fn bind<'q>(
        &'q self,
        mut query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        for param in &self.params {
            query = match param {
                SqlParam::BigInt(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.as_str()),
                SqlParam::Bool(v) => query.bind(*v),
            };
        }
        query
    }
}

/// Renders the query as a conjunction of predicates.
pub(crate) fn render_where(spec: &QuerySpec) -> WhereClause {
    let mut clauses = Vec::with_capacity(spec.predicates().len());
    let mut params = Vec::with_capacity(spec.predicates().len());

    for predicate in spec.predicates() {
        let n = params.len() + 1;
        match predicate {
            Predicate::Owner(user_id) => {
                clauses.push(format!("user_id = ${}", n));
                params.push(SqlParam::BigInt(user_id.as_i64()));
            }
            Predicate::Status(status) => {
                clauses.push(format!("status = ${}", n));
                params.push(SqlParam::Text(status.as_str().to_string()));
            }
            Predicate::Priority(priority) => {
                clauses.push(format!("priority = ${}", n));
                params.push(SqlParam::Text(priority.as_str().to_string()));
            }
            Predicate::Express(express) => {
                clauses.push(format!("is_express = ${}", n));
                params.push(SqlParam::Bool(*express));
            }
            Predicate::Search(term) => {
                let any_column = SEARCH_COLUMNS
                    .iter()
                    .map(|column| format!("COALESCE({}, '') LIKE ${}", column, n))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                clauses.push(format!("({})", any_column));
                params.push(SqlParam::Text(contains_pattern(term)));
            }
        }
    }

    let sql = if clauses.is_empty() {
        "TRUE".to_string()
    } else {
        clauses.join(" AND ")
    };

    WhereClause { sql, params }
}

/// `LIKE` pattern matching `term` as a literal substring.
///
/// Backslash is PostgreSQL's default `LIKE` escape character.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::shipment::{Priority, ShipmentFilter, ShipmentStatus};

    fn user() -> UserId {
        UserId::new(7).unwrap()
    }

    #[test]
    fn owner_only() {
        let clause = render_where(&QuerySpec::for_owner(user()));
        assert_eq!(clause.sql, "user_id = $1");
        assert_eq!(clause.params, vec![SqlParam::BigInt(7)]);
        assert_eq!(clause.next_placeholder(), 2);
    }

    #[test]
    fn filters_number_placeholders_in_order() {
        let filter = ShipmentFilter {
            status: Some(ShipmentStatus::OutForDelivery),
            priority: Some(Priority::Priority),
            express_only: true,
        };
        let clause = render_where(&QuerySpec::filtered(user(), &filter));
        assert_eq!(
            clause.sql,
            "user_id = $1 AND status = $2 AND priority = $3 AND is_express = $4"
        );
        assert_eq!(
            clause.params,
            vec![
                SqlParam::BigInt(7),
                SqlParam::Text("out_for_delivery".to_string()),
                SqlParam::Text("priority".to_string()),
                SqlParam::Bool(true),
            ]
        );
    }

    #[test]
    fn search_reuses_one_placeholder_across_columns() {
        let clause = render_where(&QuerySpec::search(user(), "Laptop"));
        assert_eq!(
            clause.sql,
            "user_id = $1 AND (COALESCE(tracking_number, '') LIKE $2 \
             OR COALESCE(sender_name, '') LIKE $2 \
             OR COALESCE(recipient_name, '') LIKE $2 \
             OR COALESCE(package_description, '') LIKE $2)"
        );
        assert_eq!(clause.params[1], SqlParam::Text("%Laptop%".to_string()));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn unsafe_text_never_reaches_sql() {
        let clause = render_where(&QuerySpec::search(user(), "'; DROP TABLE shipments; --"));
        assert!(!clause.sql.contains("DROP"));
    }
}
