use query_engine_metadata::metadata;
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::string::Param;
use query_engine_translation::translation::{error::Error, marketing, sales};

fn params(plan: &ExecutionPlan) -> Vec<Param> {
    plan.query_sql().params
}

fn string_params(values: &[&str]) -> Vec<Param> {
    values
        .iter()
        .map(|value| Param::String((*value).to_string()))
        .collect()
}

mod marketing_users {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn select_all_users() {
        let plan = marketing::users(&metadata::Metadata::default()).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT * FROM "marketing_user" AS "marketing_user") AS "rows""#);
        assert!(params(&plan).is_empty());
    }

    #[test]
    fn list_educations_is_distinct() {
        let plan = marketing::list_educations(&metadata::Metadata::default()).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."education"), '[]'::json) AS "data" FROM (SELECT DISTINCT "marketing_user"."education" AS "education" FROM "marketing_user" AS "marketing_user") AS "rows""#);
    }

    #[test]
    fn list_maritals_is_distinct() {
        let plan = marketing::list_maritals(&metadata::Metadata::default()).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."marital_status"), '[]'::json) AS "data" FROM (SELECT DISTINCT "marketing_user"."marital_status" AS "marital_status" FROM "marketing_user" AS "marketing_user") AS "rows""#);
    }

    #[test]
    fn filter_without_constraints_is_the_full_table() {
        let metadata = metadata::Metadata::default();
        let filtered = marketing::filter(&metadata, &marketing::UsersFilter::default()).unwrap();
        let all = marketing::users(&metadata).unwrap();
        assert_eq!(filtered.query_sql(), all.query_sql());
    }

    #[test]
    fn filter_by_education_only() {
        let filter = marketing::UsersFilter::new(Some("PhD".to_string()), None);
        let plan = marketing::filter(&metadata::Metadata::default(), &filter).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT * FROM "marketing_user" AS "marketing_user" WHERE ("marketing_user"."education" = $1)) AS "rows""#);
        assert_eq!(params(&plan), string_params(&["PhD"]));
    }

    #[test]
    fn filter_by_marital_status_only() {
        let filter = marketing::UsersFilter::new(Some(String::new()), Some("Single".to_string()));
        let plan = marketing::filter(&metadata::Metadata::default(), &filter).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT * FROM "marketing_user" AS "marketing_user" WHERE ("marketing_user"."marital_status" = $1)) AS "rows""#);
        assert_eq!(params(&plan), string_params(&["Single"]));
    }

    #[test]
    fn filter_by_both_uses_and() {
        let filter = marketing::UsersFilter::new(
            Some("Graduation".to_string()),
            Some("Married".to_string()),
        );
        let plan = marketing::filter(&metadata::Metadata::default(), &filter).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT * FROM "marketing_user" AS "marketing_user" WHERE (("marketing_user"."education" = $1) AND ("marketing_user"."marital_status" = $2))) AS "rows""#);
        assert_eq!(params(&plan), string_params(&["Graduation", "Married"]));
    }

    #[test]
    fn untracked_table_is_reported() {
        let err = marketing::users(&metadata::Metadata::empty()).unwrap_err();
        assert_eq!(err, Error::CollectionNotFound("marketing_user".to_string()));
    }
}

mod supermarket_sales {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn list_a_tracked_column() {
        let plan = sales::list(&metadata::Metadata::default(), "city").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."city"), '[]'::json) AS "data" FROM (SELECT DISTINCT "supermarket_sales"."city" AS "city" FROM "supermarket_sales" AS "supermarket_sales") AS "rows""#);
    }

    #[test]
    fn list_rejects_untracked_columns() {
        let err = sales::list(
            &metadata::Metadata::default(),
            "city FROM supermarket_sales; DROP TABLE supermarket_sales; --",
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::ColumnNotFoundInCollection(
                "city FROM supermarket_sales; DROP TABLE supermarket_sales; --".to_string(),
                "supermarket_sales".to_string()
            )
        );
    }

    #[test]
    fn date_is_bound_as_month_day_year() {
        let date = sales::SalesDate {
            month: "1".to_string(),
            day: "5".to_string(),
            year: "2019".to_string(),
        };
        let plan = sales::by_date(&metadata::Metadata::default(), &date).unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."invoice_id"), '[]'::json) AS "data" FROM (SELECT "supermarket_sales"."invoice_id" AS "invoice_id" FROM "supermarket_sales" AS "supermarket_sales" WHERE ("supermarket_sales"."date" = $1)) AS "rows""#);
        assert_eq!(params(&plan), string_params(&["1/5/2019"]));
    }

    #[test]
    fn date_segments_never_reach_the_sql_text() {
        let date = sales::SalesDate {
            month: "1".to_string(),
            day: "5".to_string(),
            year: "2019' OR '1'='1".to_string(),
        };
        let plan = sales::by_date(&metadata::Metadata::default(), &date).unwrap();
        let sql = plan.query_sql();
        assert!(!sql.sql.contains("2019"));
        assert_eq!(sql.params, string_params(&["1/5/2019' OR '1'='1"]));
    }

    #[test]
    fn summary_counts_per_value() {
        let plan = sales::summary(&metadata::Metadata::default(), "city").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT "supermarket_sales"."city" AS "city", COUNT(*) AS "num" FROM "supermarket_sales" AS "supermarket_sales" GROUP BY "supermarket_sales"."city") AS "rows""#);
    }

    #[test]
    fn summary_folds_column_names_to_lowercase() {
        let plan = sales::summary(&metadata::Metadata::default(), "City").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg(row_to_json("rows")), '[]'::json) AS "data" FROM (SELECT "supermarket_sales"."city" AS "City", COUNT(*) AS "num" FROM "supermarket_sales" AS "supermarket_sales" GROUP BY "supermarket_sales"."city") AS "rows""#);
    }

    #[test]
    fn list_folds_column_names_to_lowercase() {
        let metadata = metadata::Metadata::default();
        let plan = sales::list(&metadata, "Date").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."Date"), '[]'::json) AS "data" FROM (SELECT DISTINCT "supermarket_sales"."date" AS "Date" FROM "supermarket_sales" AS "supermarket_sales") AS "rows""#);

        let plan = sales::list(&metadata, "INVOICE_ID").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."INVOICE_ID"), '[]'::json) AS "data" FROM (SELECT DISTINCT "supermarket_sales"."invoice_id" AS "INVOICE_ID" FROM "supermarket_sales" AS "supermarket_sales") AS "rows""#);
    }

    #[test]
    fn summary_rejects_untracked_columns() {
        let err = sales::summary(&metadata::Metadata::default(), "Revenue").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Column 'Revenue' not found in collection 'supermarket_sales'."
        );
    }

    #[test]
    fn exposed_names_map_to_database_columns() {
        let mut metadata = metadata::Metadata::default();
        let sales_table = metadata
            .tables
            .0
            .get_mut(metadata::SUPERMARKET_SALES)
            .unwrap();
        sales_table.columns.insert(
            "day".to_string(),
            metadata::ColumnInfo {
                name: "Date".to_string(),
                description: None,
            },
        );

        let plan = sales::list(&metadata, "day").unwrap();
        insta::assert_snapshot!(plan.query_sql().sql, @r#"SELECT coalesce(json_agg("rows"."day"), '[]'::json) AS "data" FROM (SELECT DISTINCT "supermarket_sales"."Date" AS "day" FROM "supermarket_sales" AS "supermarket_sales") AS "rows""#);
    }
}
