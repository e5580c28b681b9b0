mod as_value;
mod batch;
mod binding;
mod config;
mod connection;
mod embed;
mod literal;
mod multirow;
mod named;
mod ordered;
mod scan;
mod statement;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use batch::*;
pub use binding::*;
pub use config::*;
pub use connection::*;
pub use embed::*;
pub use literal::*;
pub use multirow::*;
pub use named::*;
pub use ordered::*;
pub use scan::*;
pub use statement::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
