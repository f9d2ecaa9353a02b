//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

/// The alias of the subquery wrapped by the json aggregation helpers.
pub const ROWS_ALIAS: &str = "rows";

/// The column that holds the json aggregated result of a wrapped query.
pub const RESULT_COLUMN: &str = "data";

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Aliasing //

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: impl Into<String>) -> ColumnAlias {
    ColumnAlias { name: name.into() }
}

/// Create table aliases using this function so we build everything in one place.
pub fn make_table_alias(name: impl Into<String>) -> TableAlias {
    TableAlias { name: name.into() }
}

/// A FROM clause for a database table, aliased to its own name.
pub fn table_from(table_name: &str) -> From {
    From::Table {
        reference: TableReference::DBTable(TableName(table_name.to_string())),
        alias: make_table_alias(table_name),
    }
}

/// A reference to the alias introduced by `table_from`.
pub fn table_reference(table_name: &str) -> TableReference {
    TableReference::AliasedTable(make_table_alias(table_name))
}

/// A column of a table that is in scope.
pub fn column_expr(table: &TableReference, column_name: &str) -> Expression {
    Expression::ColumnReference(ColumnReference::TableColumn {
        table: table.clone(),
        name: ColumnName(column_name.to_string()),
    })
}

/// Generate a column expression refering to a specific table.
pub fn make_column(
    table: &TableReference,
    column_name: &str,
    alias: ColumnAlias,
) -> (ColumnAlias, Expression) {
    (alias, column_expr(table, column_name))
}

// Predicates //

/// `left = $n`, with the value bound as a parameter.
pub fn equals(left: Expression, value: impl Into<String>) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator: BinaryOperator("=".to_string()),
        right: Box::new(Expression::Value(Value::String(value.into()))),
    }
}

/// Drop the absent predicates and combine the rest with `AND`.
/// No predicates at all means no constraint, i.e. `true`.
pub fn conjunction(predicates: impl IntoIterator<Item = Option<Expression>>) -> Expression {
    predicates
        .into_iter()
        .flatten()
        .reduce(|left, right| Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        })
        .unwrap_or_else(true_expr)
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<(ColumnAlias, Expression)>) -> Select {
    Select {
        distinct: false,
        select_list: SelectList::SelectList(select_list),
        from: None,
        where_: Where(empty_where()),
        group_by: empty_group_by(),
    }
}

/// Build a simple select *
pub fn star_select(from: From) -> Select {
    Select {
        distinct: false,
        select_list: SelectList::SelectStar,
        from: Some(from),
        where_: Where(empty_where()),
        group_by: empty_group_by(),
    }
}

/// Wrap a select so that it returns a single row with a single json array
/// holding one object per row of the original select:
///
/// ```sql
/// SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data"
/// FROM (<select>) AS "rows"
/// ```
pub fn select_rows_as_json(select: Select) -> Select {
    let rows = TableReference::AliasedTable(make_table_alias(ROWS_ALIAS));
    wrap_in_json_agg(select, Expression::RowToJson(rows))
}

/// Wrap a select so that it returns a single row with a single json array
/// holding the values of one of its columns, in the order the database produced them.
pub fn select_column_as_json(select: Select, column: &ColumnAlias) -> Select {
    let rows = TableReference::AliasedTable(make_table_alias(ROWS_ALIAS));
    wrap_in_json_agg(
        select,
        Expression::ColumnReference(ColumnReference::AliasedColumn {
            table: rows,
            column: column.clone(),
        }),
    )
}

fn wrap_in_json_agg(select: Select, element: Expression) -> Select {
    let aggregate = Expression::FunctionCall {
        function: Function::Coalesce,
        args: vec![
            Expression::FunctionCall {
                function: Function::JsonAgg,
                args: vec![element],
            },
            Expression::Value(Value::EmptyJsonArray),
        ],
    };

    let mut final_select = simple_select(vec![(make_column_alias(RESULT_COLUMN), aggregate)]);
    final_select.from = Some(From::Select {
        select: Box::new(select),
        alias: make_table_alias(ROWS_ALIAS),
    });
    final_select
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate(column: &str, value: &str) -> Expression {
        equals(
            column_expr(&table_reference("marketing_user"), column),
            value,
        )
    }

    #[test]
    fn conjunction_of_nothing_is_true() {
        assert_eq!(conjunction(vec![None, None]), true_expr());
        assert_eq!(conjunction(Vec::new()), true_expr());
    }

    #[test]
    fn conjunction_of_one_is_that_predicate() {
        let education = predicate("education", "PhD");
        assert_eq!(
            conjunction(vec![Some(education.clone()), None]),
            education.clone()
        );
        assert_eq!(conjunction(vec![None, Some(education.clone())]), education);
    }

    #[test]
    fn conjunction_keeps_predicate_order() {
        let education = predicate("education", "PhD");
        let marital = predicate("marital_status", "Single");
        assert_eq!(
            conjunction(vec![Some(education.clone()), Some(marital.clone())]),
            Expression::And {
                left: Box::new(education),
                right: Box::new(marital),
            }
        );
    }
}
