mod fixtures;
use fixtures::*;

use cpe::{Cpe, parse};
use pretty_assertions::assert_eq;

#[test]
fn test_parses_formatted_binding_application_sample() {
    ensure_env_logger_initialized();
    let record = parse("cpe:2.3:a:subscribe2_project:subscribe2:10.17.2:*:*:*:*:wordpress:*:*");

    let expected = Cpe {
        part: "a".to_string(),
        vendor: "subscribe2 project".to_string(),
        product: "subscribe2".to_string(),
        version: "10.17.2".to_string(),
        update: "*".to_string(),
        edition: "*".to_string(),
        language: "*".to_string(),
        sw_edition: "*".to_string(),
        target_sw: "wordpress".to_string(),
        target_hw: "*".to_string(),
        other: "*".to_string(),
    };

    assert_eq!(record, expected);
}

#[test]
fn test_parses_formatted_binding_os_sample() {
    ensure_env_logger_initialized();
    let record = parse("cpe:2.3:o:juniper:netscreen_screenos:3.0.3r3:*:*:*:*:*:*:*");

    assert_eq!(record.part, "o");
    assert_eq!(record.vendor, "juniper");
    assert_eq!(record.product, "netscreen screenos");
    assert_eq!(record.version, "3.0.3r3");
    assert_eq!(record.update, "*");
    assert_eq!(record.other, "*");
}

#[test]
fn test_parses_formatted_binding_hardware_sample() {
    ensure_env_logger_initialized();
    let record = parse("cpe:2.3:h:f5:big-ip_protocol_security_manager:10.2.3:*:*:*:*:*:*:*");

    assert_eq!(record.part, "h");
    assert_eq!(record.vendor, "f5");
    assert_eq!(record.product, "big-ip protocol security manager");
    assert_eq!(record.version, "10.2.3");
}

#[test]
fn test_parses_uri_binding_with_packed_extended_attributes() {
    ensure_env_logger_initialized();
    let record =
        parse("cpe:/a:search_autocomplete_project:search_autocomplete:7.x-3.0:rc3:~~~drupal~~");

    let expected = Cpe {
        part: "a".to_string(),
        vendor: "search autocomplete project".to_string(),
        product: "search autocomplete".to_string(),
        version: "7.x-3.0".to_string(),
        update: "rc3".to_string(),
        edition: "*".to_string(),
        language: "*".to_string(),
        sw_edition: "*".to_string(),
        target_sw: "drupal".to_string(),
        target_hw: "*".to_string(),
        other: "*".to_string(),
    };

    assert_eq!(record, expected);
}

#[test]
fn test_parses_uri_binding_without_extended_attributes() {
    ensure_env_logger_initialized();
    let record = parse("cpe:/o:huawei:ecns210_td_firmware:v100r004c10spc410");

    assert_eq!(record.part, "o");
    assert_eq!(record.vendor, "huawei");
    assert_eq!(record.product, "ecns210 td firmware");
    assert_eq!(record.version, "v100r004c10spc410");

    // No tokens exist past `version`; absent attributes stay empty rather
    // than becoming the `*` wildcard.
    assert_eq!(record.update, "");
    assert_eq!(record.edition, "");
    assert_eq!(record.language, "");
    assert_eq!(record.sw_edition, "");
    assert_eq!(record.target_sw, "");
    assert_eq!(record.target_hw, "");
    assert_eq!(record.other, "");
}

#[test]
fn test_parses_uri_binding_hardware_sample() {
    ensure_env_logger_initialized();
    let record = parse("cpe:/h:netgear:rp114:-");

    assert_eq!(record.part, "h");
    assert_eq!(record.vendor, "netgear");
    assert_eq!(record.product, "rp114");
    assert_eq!(record.version, "-");
    assert_eq!(record.update, "");
    assert_eq!(record.other, "");
}

#[test]
fn test_parse_is_total_on_degenerate_inputs() {
    ensure_env_logger_initialized();

    assert_eq!(parse(""), Cpe::default());
    assert_eq!(parse("   "), Cpe::default());

    let record = parse("cpe:/");
    assert_eq!(record, Cpe::default());
}

#[test]
fn test_from_str_never_fails() {
    ensure_env_logger_initialized();
    let record: Cpe = "cpe:/h:netgear:rp114:-".parse().unwrap();

    assert_eq!(record.vendor, "netgear");
}
