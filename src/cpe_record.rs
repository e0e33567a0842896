use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cpe_parser;

/// A structured CPE name.
///
/// Eleven ordered attributes, matching the slot order of the CPE 2.3
/// formatted binding:
///
/// `part:vendor:product:version:update:edition:language:sw_edition:target_sw:target_hw:other`
///
/// An empty string means the attribute was absent from the input. The wire
/// formats are purely positional, so the order of the fields here is part of
/// the contract and must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpe {
    /// Category of the named platform, conventionally `a` (application),
    /// `o` (operating system) or `h` (hardware).
    pub part: String,
    pub vendor: String,
    pub product: String,
    pub version: String,
    /// Update or patch level.
    pub update: String,
    /// Legacy edition attribute. Under the URI binding this slot may carry
    /// the tilde-packed extended attributes, which `parse` unpacks into the
    /// four fields below.
    pub edition: String,
    pub language: String,
    /// Software edition, a CPE 2.3-only attribute.
    pub sw_edition: String,
    /// Target software environment, a CPE 2.3-only attribute.
    pub target_sw: String,
    /// Target hardware environment, a CPE 2.3-only attribute.
    pub target_hw: String,
    /// Catch-all trailing attribute, a CPE 2.3-only attribute.
    pub other: String,
}

impl Cpe {
    /// The attributes in their fixed wire order.
    pub(crate) fn attributes(&self) -> [&str; 11] {
        [
            &self.part,
            &self.vendor,
            &self.product,
            &self.version,
            &self.update,
            &self.edition,
            &self.language,
            &self.sw_edition,
            &self.target_sw,
            &self.target_hw,
            &self.other,
        ]
    }
}

/// Renders the bare 11-field attribute string, without a binding prefix.
impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cpe_parser::stringify(self, None))
    }
}

impl FromStr for Cpe {
    type Err = Infallible;

    /// Parsing is total, so this never fails; malformed input degrades to a
    /// record with empty attributes. See [`cpe_parser::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(cpe_parser::parse(s))
    }
}
