//! Document layer: parsing input files into a normalized tree and
//! resolving key paths inside it.

pub mod parse;
pub mod resolve;

pub use parse::{load_document, parse_document};
pub use resolve::{path_exists, resolve};
