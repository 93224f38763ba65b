pub mod book;
pub mod facets;
pub mod query;

pub use book::*;
pub use facets::*;
pub use query::*;
