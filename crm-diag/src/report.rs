//! Rendering for the diagnostic report.
//!
//! The stats value is inspected at runtime: object-shaped results get their
//! keys enumerated, anything else is reported by type name. Object key order
//! is `serde_json`'s map order, which is deterministic.

use std::fmt::Write;

use crm_types::Tenant;
use serde_json::Value;

/// Runtime type name of a JSON value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shape-dependent section of the report: key/value enumeration for objects,
/// type name otherwise.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut out = String::from("Keys available:\n");
            for (key, val) in map {
                let _ = writeln!(out, "  - {key}: {val}");
            }
            out
        }
        other => format!("Not an object, it's: {}\n", type_name(other)),
    }
}

/// Full diagnostic report: tenant header, return type, raw value, and the
/// shape-dependent section.
pub fn render_report(tenant: &Tenant, value: &Value) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Mapping Service Diagnostic ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Tenant: {}", tenant.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Return type: {}", type_name(value));
    let _ = writeln!(out);
    let _ = writeln!(out, "Full output:\n{value:#}");
    let _ = writeln!(out);
    out.push_str(&render_value(value));
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Diagnostic Complete ===");
    out
}
