//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::*;

// Convert to SQL strings

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, (col, expr)) in select_list.iter().enumerate() {
                    expr.to_sql(sql);
                    sql.append_syntax(" AS ");
                    col.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        if self.distinct {
            sql.append_syntax("DISTINCT ");
        }

        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            sql.append_syntax(" ");
            from.to_sql(sql);
        }

        self.where_.to_sql(sql);

        self.group_by.to_sql(sql);
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match &self {
            From::Table { reference, alias } => {
                reference.to_sql(sql);
                sql.append_syntax(" AS ");
                alias.to_sql(sql);
            }
            From::Select { select, alias } => {
                sql.append_syntax("(");
                select.to_sql(sql);
                sql.append_syntax(")");
                sql.append_syntax(" AS ");
                alias.to_sql(sql);
            }
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" GROUP BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_reference) => column_reference.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::And { left, right } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                sql.append_syntax(" AND ");
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::FunctionCall { function, args } => {
                function.to_sql(sql);
                sql.append_syntax("(");
                for (index, arg) in args.iter().enumerate() {
                    arg.to_sql(sql);
                    if index < (args.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
                sql.append_syntax(")");
            }
            Expression::RowToJson(table) => {
                sql.append_syntax("row_to_json");
                sql.append_syntax("(");
                table.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Count(count_type) => {
                sql.append_syntax("COUNT");
                sql.append_syntax("(");
                count_type.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        let BinaryOperator(operator) = self;
        sql.append_syntax(" ");
        sql.append_syntax(operator);
        sql.append_syntax(" ");
    }
}

impl Function {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Function::Coalesce => sql.append_syntax("coalesce"),
            Function::JsonAgg => sql.append_syntax("json_agg"),
        }
    }
}

impl CountType {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            CountType::Star => sql.append_syntax("*"),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::EmptyJsonArray => sql.append_syntax("'[]'::json"),
            Value::String(s) => sql.append_param(Param::String(s.clone())),
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
        }
    }
}

// names
impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            TableReference::DBTable(table) => table.to_sql(sql),
            TableReference::AliasedTable(alias) => alias.to_sql(sql),
        };
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl TableAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            ColumnReference::TableColumn { table, name } => {
                table.to_sql(sql);
                sql.append_syntax(".");
                name.to_sql(sql);
            }
            ColumnReference::AliasedColumn { table, column } => {
                table.to_sql(sql);
                sql.append_syntax(".");
                column.to_sql(sql);
            }
        };
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn render(select: &Select) -> SQL {
        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        sql
    }

    #[test]
    fn it_converts_star_select() {
        let select = helpers::star_select(helpers::table_from("marketing_user"));
        assert_eq!(
            render(&select).sql,
            r#"SELECT * FROM "marketing_user" AS "marketing_user""#
        );
    }

    #[test]
    fn it_omits_a_trivial_where() {
        let mut select = helpers::star_select(helpers::table_from("marketing_user"));
        select.where_ = Where(helpers::true_expr());
        assert!(!render(&select).sql.contains("WHERE"));
    }

    #[test]
    fn it_converts_distinct_group_by_and_count() {
        let table = helpers::table_reference("supermarket_sales");
        let city = helpers::column_expr(&table, "city");
        let mut select = helpers::simple_select(vec![
            (helpers::make_column_alias("city"), city.clone()),
            (
                helpers::make_column_alias("num"),
                Expression::Count(CountType::Star),
            ),
        ]);
        select.from = Some(helpers::table_from("supermarket_sales"));
        select.group_by = GroupBy {
            elements: vec![city],
        };
        select.distinct = true;

        assert_eq!(
            render(&select).sql,
            r#"SELECT DISTINCT "supermarket_sales"."city" AS "city", COUNT(*) AS "num" FROM "supermarket_sales" AS "supermarket_sales" GROUP BY "supermarket_sales"."city""#
        );
    }

    #[test]
    fn string_values_become_parameters() {
        let table = helpers::table_reference("supermarket_sales");
        let mut select = helpers::star_select(helpers::table_from("supermarket_sales"));
        select.where_ = Where(helpers::equals(
            helpers::column_expr(&table, "date"),
            "1/5/2019' OR '1'='1",
        ));

        let sql = render(&select);
        assert_eq!(
            sql.sql,
            r#"SELECT * FROM "supermarket_sales" AS "supermarket_sales" WHERE ("supermarket_sales"."date" = $1)"#
        );
        assert_eq!(
            sql.params,
            vec![Param::String("1/5/2019' OR '1'='1".to_string())]
        );
    }
}
