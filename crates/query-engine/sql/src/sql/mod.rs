//! Build SQL statements as an AST and render them to parameterized strings.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
