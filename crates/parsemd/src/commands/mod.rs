//! CLI command implementations.

mod convert;
mod parse;

pub(crate) use convert::ConvertArgs;
pub(crate) use parse::ParseArgs;
