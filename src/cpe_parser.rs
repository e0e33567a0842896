use log::trace;

use crate::cpe_record::Cpe;

/// Prefix marking the legacy CPE 2.2 URI binding.
pub const URI_BINDING_PREFIX: &str = "cpe:/";

/// Prefix marking the CPE 2.3 formatted binding.
pub const FORMATTED_BINDING_PREFIX: &str = "cpe:2.3:";

/// Marker for the tilde-packed extended attributes tail of a URI binding.
///
/// The URI binding has only seven positional slots; when the name carries any
/// of the four CPE 2.3-only attributes, the edition slot is reused as a
/// `~`-delimited container for them.
pub const EXTENDED_ATTRIBUTES_DELIMITER: &str = ":~";

/// Which binding prefix [`stringify`] should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpeBinding {
    /// `cpe:/` (CPE 2.2 URI binding).
    Uri,
    /// `cpe:2.3:` (CPE 2.3 formatted binding).
    Formatted,
}

/// Checks whether `cpe` uses the URI binding syntax, i.e. starts with
/// `cpe:/`.
pub fn has_uri_binding(cpe: &str) -> bool {
    !cpe.is_empty() && cpe.starts_with(URI_BINDING_PREFIX)
}

/// Checks whether `cpe` uses the formatted binding syntax, i.e. starts with
/// `cpe:2.3:`.
pub fn has_formatted_binding(cpe: &str) -> bool {
    !cpe.is_empty() && cpe.starts_with(FORMATTED_BINDING_PREFIX)
}

/// Parses a CPE name with either URI or formatted binding into a [`Cpe`]
/// record.
///
/// Parsing is lenient and total: a string with neither binding prefix is
/// treated as a bare attribute list, missing attributes stay empty, and
/// attributes past the eleventh are discarded. There is no failure path.
pub fn parse(cpe: &str) -> Cpe {
    let trimmed = cpe.trim();
    let attributes = attribute_list(trimmed, attributes_substring(trimmed));

    let mut record = Cpe::default();
    for (i, raw) in attributes.into_iter().enumerate() {
        let value = parse_attribute_value(raw);
        match i {
            0 => record.part = value,
            1 => record.vendor = value,
            2 => record.product = value,
            3 => record.version = value,
            4 => record.update = value,
            5 => record.edition = value,
            6 => record.language = value,
            7 => record.sw_edition = value,
            8 => record.target_sw = value,
            9 => record.target_hw = value,
            10 => record.other = value,
            _ => {}
        }
    }

    record
}

/// Serializes a [`Cpe`] record into a colon-delimited string, optionally
/// prepending a binding prefix.
///
/// All eleven attributes are always emitted, even when [`CpeBinding::Uri`] is
/// requested; the tilde-packed extended attributes form is never produced.
/// Round-tripping a packed URI binding name therefore yields its fully
/// expanded eleven-field equivalent, not the original string.
pub fn stringify(cpe: &Cpe, binding: Option<CpeBinding>) -> String {
    let values = cpe
        .attributes()
        .iter()
        .map(|value| format_attribute_value(value))
        .collect::<Vec<_>>()
        .join(":");

    match binding {
        Some(CpeBinding::Formatted) => format!("{FORMATTED_BINDING_PREFIX}{values}"),
        Some(CpeBinding::Uri) => format!("{URI_BINDING_PREFIX}{values}"),
        None => values,
    }
}

/// Strips whichever binding prefix is present; a string with no recognized
/// prefix is taken to be a bare attribute list.
fn attributes_substring(full_cpe: &str) -> &str {
    full_cpe
        .strip_prefix(FORMATTED_BINDING_PREFIX)
        .or_else(|| full_cpe.strip_prefix(URI_BINDING_PREFIX))
        .unwrap_or(full_cpe)
}

/// Splits the attribute substring on `:`, expanding the tilde-packed
/// extended attributes tail of a URI binding name when one is present.
///
/// The `:~` marker on the full name is the authoritative gate for packing;
/// the per-token `~` prefix only locates which token to unpack. If the marker
/// is present but no token starts with `~`, the list is left untouched.
fn attribute_list<'a>(full_cpe: &'a str, attributes: &'a str) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = attributes.split(':').collect();

    if !has_uri_binding(full_cpe) || !full_cpe.contains(EXTENDED_ATTRIBUTES_DELIMITER) {
        return tokens;
    }

    if let Some(index) = tokens.iter().rposition(|token| token.starts_with('~')) {
        let packed = tokens.remove(index);
        trace!("expanding packed extended attributes `{packed}`");

        // Empty segments are absent attributes, which the packed form leaves
        // blank but the expanded form spells `*`.
        tokens.extend(
            packed
                .split('~')
                .map(|segment| if segment.is_empty() { "*" } else { segment }),
        );
    }

    tokens
}

/// Applies the value decoding of section 5.3.2 of NISTIR 7695: trim the raw
/// attribute and replace underscores with spaces.
///
/// TODO: backslash-quoted characters are passed through verbatim for now.
fn parse_attribute_value(raw: &str) -> String {
    raw.trim().replace('_', " ")
}

/// Inverse of [`parse_attribute_value`]: whitespace becomes underscores.
/// Empty attributes stay empty on the wire.
fn format_attribute_value(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
