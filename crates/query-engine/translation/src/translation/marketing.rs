//! Queries over the marketing users table.

use query_engine_metadata::metadata::{self, MARKETING_USER};
use query_engine_sql::sql;
use sql::execution_plan::ExecutionPlan;

use super::error::Error;
use super::helpers::{Env, TableNameAndReference};

pub const EDUCATION_COLUMN: &str = "education";
pub const MARITAL_STATUS_COLUMN: &str = "marital_status";

/// Optional equality constraints on the users table. Absent values constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersFilter {
    pub education: Option<String>,
    pub marital_status: Option<String>,
}

impl UsersFilter {
    /// Build a filter from raw request values, treating empty strings as absent.
    pub fn new(education: Option<String>, marital_status: Option<String>) -> Self {
        UsersFilter {
            education: education.filter(|value| !value.is_empty()),
            marital_status: marital_status.filter(|value| !value.is_empty()),
        }
    }
}

/// All users, as json records.
pub fn users(metadata: &metadata::Metadata) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(MARKETING_USER)?;
    let select = sql::helpers::star_select(table.from());
    Ok(ExecutionPlan::new(
        "marketing_users",
        sql::helpers::select_rows_as_json(select),
    ))
}

/// The distinct education values.
pub fn list_educations(metadata: &metadata::Metadata) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(MARKETING_USER)?;
    Ok(ExecutionPlan::new(
        "marketing_list_educations",
        table.distinct_values(EDUCATION_COLUMN)?,
    ))
}

/// The distinct marital status values.
pub fn list_maritals(metadata: &metadata::Metadata) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(MARKETING_USER)?;
    Ok(ExecutionPlan::new(
        "marketing_list_maritals",
        table.distinct_values(MARITAL_STATUS_COLUMN)?,
    ))
}

/// The users matching every constraint present in the filter.
pub fn filter(
    metadata: &metadata::Metadata,
    filter: &UsersFilter,
) -> Result<ExecutionPlan, Error> {
    let env = Env::new(metadata);
    let table = env.lookup_table(MARKETING_USER)?;

    let predicates = [
        equals_if_present(&table, EDUCATION_COLUMN, filter.education.as_deref())?,
        equals_if_present(&table, MARITAL_STATUS_COLUMN, filter.marital_status.as_deref())?,
    ];

    let mut select = sql::helpers::star_select(table.from());
    select.where_ = sql::ast::Where(sql::helpers::conjunction(predicates));

    Ok(ExecutionPlan::new(
        "marketing_users_filter",
        sql::helpers::select_rows_as_json(select),
    ))
}

fn equals_if_present(
    table: &TableNameAndReference,
    column: &str,
    value: Option<&str>,
) -> Result<Option<sql::ast::Expression>, Error> {
    value
        .map(|value| {
            let info = table.lookup_column(column)?;
            Ok(sql::helpers::equals(
                sql::helpers::column_expr(&table.reference, &info.name),
                value,
            ))
        })
        .transpose()
}
