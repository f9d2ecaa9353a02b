//! Helpers for looking up tracked tables and columns.

use query_engine_metadata::metadata;
use query_engine_sql::sql;

use super::error::Error;

/// Static information from the metadata, shared by all translations.
#[derive(Debug)]
pub struct Env<'a> {
    metadata: &'a metadata::Metadata,
}

/// A tracked table, resolved against the metadata and ready to be queried.
#[derive(Debug)]
pub struct TableNameAndReference<'a> {
    /// The collection name, as exposed to callers.
    pub name: &'a str,
    pub info: &'a metadata::TableInfo,
    /// How columns of this table are qualified in the query.
    pub reference: sql::ast::TableReference,
}

impl<'a> Env<'a> {
    pub fn new(metadata: &'a metadata::Metadata) -> Self {
        Env { metadata }
    }

    /// Lookup a tracked table by its collection name.
    pub fn lookup_table(&self, name: &'a str) -> Result<TableNameAndReference<'a>, Error> {
        let info = self
            .metadata
            .tables
            .0
            .get(name)
            .ok_or_else(|| Error::CollectionNotFound(name.to_string()))?;

        Ok(TableNameAndReference {
            name,
            info,
            reference: sql::helpers::table_reference(&info.table_name),
        })
    }
}

impl TableNameAndReference<'_> {
    /// Resolve a column name supplied by a caller. Anything that is not tracked is rejected,
    /// so the name never reaches the SQL text unless it is a known column.
    ///
    /// Names are folded to lowercase when they do not match as given, the way PostgreSQL
    /// treats unquoted identifiers, so `Date` resolves to the `date` column.
    pub fn lookup_column(&self, column: &str) -> Result<&metadata::ColumnInfo, Error> {
        let columns = &self.info.columns;
        columns
            .get(column)
            .or_else(|| columns.get(&column.to_lowercase()))
            .ok_or_else(|| {
                tracing::warn!(column, collection = self.name, "rejected unknown column");
                Error::ColumnNotFoundInCollection(column.to_string(), self.name.to_string())
            })
    }

    /// `FROM <table> AS <table>`.
    pub fn from(&self) -> sql::ast::From {
        sql::helpers::table_from(&self.info.table_name)
    }

    /// A column of this table, aliased to the name the caller used.
    pub fn column(&self, column: &str) -> Result<(sql::ast::ColumnAlias, sql::ast::Expression), Error> {
        let info = self.lookup_column(column)?;
        Ok(sql::helpers::make_column(
            &self.reference,
            &info.name,
            sql::helpers::make_column_alias(column),
        ))
    }

    /// `SELECT DISTINCT <column> FROM <table>`, returned as a flat json array.
    pub fn distinct_values(&self, column: &str) -> Result<sql::ast::Select, Error> {
        let (alias, expression) = self.column(column)?;
        let mut select = sql::helpers::simple_select(vec![(alias.clone(), expression)]);
        select.distinct = true;
        select.from = Some(self.from());
        Ok(sql::helpers::select_column_as_json(select, &alias))
    }
}
