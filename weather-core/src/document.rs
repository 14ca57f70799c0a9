//! Default-valued field access on untyped JSON documents.
//!
//! The HKO payloads are loosely shaped, so extractors read them through these
//! accessors instead of strict serde structs: a missing or mistyped field
//! yields the caller's default, never an error.

use serde_json::Value;

pub trait DocExt {
    /// String field, or `default` when absent or not a string.
    fn str_or(&self, key: &str, default: &str) -> String;

    /// String field as a borrowed slice, if present.
    fn opt_str(&self, key: &str) -> Option<&str>;

    fn opt_f64(&self, key: &str) -> Option<f64>;

    fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.opt_f64(key).unwrap_or(default)
    }

    /// Array field, empty when absent or not an array.
    fn items(&self, key: &str) -> &[Value];

    /// `{ "<key>": { "data": [...] } }`, the shape HKO uses for reading blocks.
    fn block_data(&self, key: &str) -> &[Value];
}

impl DocExt for Value {
    fn str_or(&self, key: &str, default: &str) -> String {
        self.opt_str(key).unwrap_or(default).to_string()
    }

    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn opt_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    fn items(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn block_data(&self, key: &str) -> &[Value] {
        self.get(key).map(|block| block.items("data")).unwrap_or(&[])
    }
}
