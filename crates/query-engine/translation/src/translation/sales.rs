//! Queries over the supermarket sales table.

use query_engine_metadata::metadata::{self, SUPERMARKET_SALES};
use query_engine_sql::sql;
use sql::execution_plan::ExecutionPlan;

use super::error::Error;
use super::helpers::Env;

pub const INVOICE_ID_COLUMN: &str = "invoice_id";
pub const DATE_COLUMN: &str = "date";
/// The name of the count column of a summary.
pub const SUMMARY_COUNT_COLUMN: &str = "num";

/// A calendar date as it is written in the sales table, e.g. `1/5/2019`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesDate {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl SalesDate {
    /// The literal the date column is compared against: `{month}/{day}/{year}`.
    pub fn filter_value(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

/// The distinct values of a caller-chosen column.
pub fn list(metadata: &metadata::Metadata, column: &str) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(SUPERMARKET_SALES)?;
    Ok(ExecutionPlan::new("sales_list", table.distinct_values(column)?))
}

/// The invoice identifiers of the sales made on a given date.
///
/// The date is bound as a text parameter, so the `date` column is expected to hold text
/// such as `1/5/2019`. Against a column of type `date` PostgreSQL rejects the comparison
/// (`operator does not exist: date = text`) and the request fails.
pub fn by_date(metadata: &metadata::Metadata, date: &SalesDate) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(SUPERMARKET_SALES)?;

    let (invoice_alias, invoice_expression) = table.column(INVOICE_ID_COLUMN)?;
    let date_column = table.lookup_column(DATE_COLUMN)?;

    let mut select = sql::helpers::simple_select(vec![(invoice_alias.clone(), invoice_expression)]);
    select.from = Some(table.from());
    select.where_ = sql::ast::Where(sql::helpers::equals(
        sql::helpers::column_expr(&table.reference, &date_column.name),
        date.filter_value(),
    ));

    Ok(ExecutionPlan::new(
        "sales_date",
        sql::helpers::select_column_as_json(select, &invoice_alias),
    ))
}

/// The number of sales per distinct value of a caller-chosen column.
pub fn summary(metadata: &metadata::Metadata, column: &str) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(SUPERMARKET_SALES)?;

    let (alias, expression) = table.column(column)?;

    let mut select = sql::helpers::simple_select(vec![
        (alias, expression.clone()),
        (
            sql::helpers::make_column_alias(SUMMARY_COUNT_COLUMN),
            sql::ast::Expression::Count(sql::ast::CountType::Star),
        ),
    ]);
    select.from = Some(table.from());
    select.group_by = sql::ast::GroupBy {
        elements: vec![expression],
    };

    Ok(ExecutionPlan::new(
        "sales_summary",
        sql::helpers::select_rows_as_json(select),
    ))
}
