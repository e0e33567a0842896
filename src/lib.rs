//! A lenient parser and serializer for Common Platform Enumeration (CPE)
//! names.
//!
//! Supports both textual bindings defined by the CPE specifications: the
//! legacy 2.2 URI binding (`cpe:/a:vendor:product:...`), including its
//! tilde-packed extended attributes tail, and the 2.3 formatted binding
//! (`cpe:2.3:a:vendor:product:...`).
//!
//! Parsing is total: every input produces a [`Cpe`] record, with malformed or
//! partial names degrading to empty attributes instead of errors. Callers
//! that need validation should inspect the returned record.
//!
//! ```
//! use cpe::{parse, stringify, CpeBinding};
//!
//! let record = parse("cpe:2.3:a:subscribe2_project:subscribe2:10.17.2:*:*:*:*:wordpress:*:*");
//! assert_eq!(record.vendor, "subscribe2 project");
//! assert_eq!(record.target_sw, "wordpress");
//!
//! let formatted = stringify(&record, Some(CpeBinding::Formatted));
//! assert_eq!(
//!     formatted,
//!     "cpe:2.3:a:subscribe2_project:subscribe2:10.17.2:*:*:*:*:wordpress:*:*"
//! );
//! ```

pub mod cpe_parser;
pub mod cpe_record;

pub use cpe_parser::{
    CpeBinding, EXTENDED_ATTRIBUTES_DELIMITER, FORMATTED_BINDING_PREFIX, URI_BINDING_PREFIX,
    has_formatted_binding, has_uri_binding, parse, stringify,
};
pub use cpe_record::Cpe;
