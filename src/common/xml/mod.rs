//! XML helpers shared by the package and document writers.

mod escape;

pub use escape::{escape_xml, resolve_entity, unescape_xml};
