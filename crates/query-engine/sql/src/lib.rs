//! SQL AST, its string rendering, and the plans handed over to execution.

pub mod sql;
