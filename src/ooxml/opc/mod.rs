/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the package layer underneath a WordprocessingML
/// document:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging with deterministic output
/// - Atomic writes to disk
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
