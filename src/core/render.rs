//! String coercion for untyped values, matching how a JavaScript runtime
//! prints a value through `String(value)`. Used for error messages only.

use serde_json::{Number, Value};

pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // null elements join as empty
                if !item.is_null() {
                    write_value(out, item);
                }
            }
        }
        Value::Object(_) => out.push_str("[object Object]"),
    }
}

pub fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => render_float(f),
        _ => n.to_string(),
    }
}

/// Shortest round-trip digits; exponent form outside `[1e-6, 1e21)` with a
/// signed exponent (`1e+21`, `1e-7`).
fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        f.to_string()
    }
}
