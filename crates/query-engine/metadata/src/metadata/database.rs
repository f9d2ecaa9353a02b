//! Metadata information regarding the database and tracked information.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The marketing users table.
pub const MARKETING_USER: &str = "marketing_user";
/// The supermarket sales table.
pub const SUPERMARKET_SALES: &str = "supermarket_sales";

const MARKETING_USER_COLUMNS: [&str; 2] = ["education", "marital_status"];

const SUPERMARKET_SALES_COLUMNS: [&str; 17] = [
    "invoice_id",
    "branch",
    "city",
    "customer_type",
    "gender",
    "product_line",
    "unit_price",
    "quantity",
    "tax",
    "total",
    "date",
    "time",
    "payment",
    "cogs",
    "gross_margin_percentage",
    "gross_income",
    "rating",
];

/// Mapping from a "table" name to its information.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct TablesInfo(pub BTreeMap<String, TableInfo>);

impl TablesInfo {
    pub fn empty() -> Self {
        TablesInfo(BTreeMap::new())
    }
}

impl Default for TablesInfo {
    fn default() -> Self {
        TablesInfo(BTreeMap::from([
            (
                MARKETING_USER.to_string(),
                TableInfo::with_columns(MARKETING_USER, &MARKETING_USER_COLUMNS),
            ),
            (
                SUPERMARKET_SALES.to_string(),
                TableInfo::with_columns(SUPERMARKET_SALES, &SUPERMARKET_SALES_COLUMNS),
            ),
        ]))
    }
}

/// Information about a database table (or any other kind of relation).
///
/// Only the columns listed here can be addressed by name from a request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub table_name: String,
    pub columns: BTreeMap<String, ColumnInfo>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TableInfo {
    /// A table whose exposed column names are the database column names.
    pub fn with_columns(table_name: &str, columns: &[&str]) -> Self {
        TableInfo {
            table_name: table_name.to_string(),
            columns: columns
                .iter()
                .map(|column| {
                    (
                        (*column).to_string(),
                        ColumnInfo {
                            name: (*column).to_string(),
                            description: None,
                        },
                    )
                })
                .collect(),
            description: None,
        }
    }
}

/// Information about a database column.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
