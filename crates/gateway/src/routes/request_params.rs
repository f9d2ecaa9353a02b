//! Routes echoing the parameters they were called with.
//!
//! Missing query and form fields are rendered as `None`, missing json fields as `null`.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    Form, Json,
};

use crate::error::ServerError;

const PARAM_1: &str = "param1";
const PARAM_2: &str = "param2";
const MISSING_FIELD: &str = "None";

pub async fn capture(Path((value_1, value_2)): Path<(String, String)>) -> String {
    format!("Your capture parameter {value_1} & {value_2}")
}

pub async fn query(Query(params): Query<HashMap<String, String>>) -> String {
    echo_fields(&params)
}

/// A body that is not form encoded counts as a form without fields.
pub async fn form(form: Option<Form<HashMap<String, String>>>) -> String {
    let fields = form.map(|Form(fields)| fields).unwrap_or_default();
    echo_fields(&fields)
}

/// Only bodies sent as `application/json` are accepted.
pub async fn json(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<String, ServerError> {
    let Json(raw) = body.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(rejection) => {
            ServerError::UnsupportedMediaType(rejection.body_text())
        }
        other => ServerError::BadRequest(format!("Invalid json body: {}", other.body_text())),
    })?;

    let field = |name: &str| {
        raw.get(name)
            .map_or_else(|| "null".to_string(), render_json_field)
    };
    let (param_1, param_2) = (field(PARAM_1), field(PARAM_2));

    Ok(format!(
        "\n    RAW: {raw}\n    Params: {param_1} & {param_2}\n    "
    ))
}

fn echo_fields(fields: &HashMap<String, String>) -> String {
    let field = |name: &str| fields.get(name).map_or(MISSING_FIELD, String::as_str);
    format!("{} & {}", field(PARAM_1), field(PARAM_2))
}

/// Strings are echoed without their quotes, anything else as json text.
fn render_json_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}
