//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::InvalidPackUri(s) => Error::InvalidFormat(s),
            OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            OpcError::XmlError(s) => Error::XmlError(s),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::IoError(e) => Error::Io(e),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(opc_err) => Error::from(opc_err),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::DuplicateStyle(s) => Error::DuplicateStyle(s),
            OoxmlError::UnknownStyle(s) => Error::UnknownStyle(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(OoxmlError::Opc(OpcError::IoError(io)));
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_style_errors_map_directly() {
        let err = Error::from(OoxmlError::DuplicateStyle("CustomTitle".to_string()));
        assert!(matches!(err, Error::DuplicateStyle(ref s) if s == "CustomTitle"));
        assert_eq!(err.to_string(), "Style already exists: CustomTitle");

        let err = Error::from(OoxmlError::UnknownStyle("Missing".to_string()));
        assert!(matches!(err, Error::UnknownStyle(_)));
    }
}
