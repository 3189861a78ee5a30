//! Legacy character fixup for query results.
//!
//! Rows coming out of the older store carry Turkish text that was written
//! under a Latin-1 collation, so a fixed set of characters arrives
//! mis-encoded (e.g. `Ý` where `İ` is meant). The substitution table is
//! one-to-one and applied in a single pass; no mapped output character is
//! itself a key, which makes the whole transform idempotent.

use serde_json::Value as JsonValue;

/// Replaces every mis-encoded legacy character in `text` with its correct
/// form. Characters outside the table pass through unchanged.
pub fn fix_legacy_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'Ý' => out.push('İ'),
            'ý' => out.push('ı'),
            'Þ' => out.push('Ş'),
            'þ' => out.push('ş'),
            'Ð' => out.push('Ğ'),
            'ð' => out.push('ğ'),
            'Ñ' => out.push('N'),
            'ñ' => out.push('n'),
            'Æ' => out.push_str("AE"),
            'æ' => out.push_str("ae"),
            'Ø' => out.push('O'),
            'ø' => out.push('o'),
            'Å' => out.push('A'),
            'å' => out.push('a'),
            'Ä' => out.push('A'),
            'ä' => out.push('a'),
            'Ë' => out.push('E'),
            'ë' => out.push('e'),
            'Ï' => out.push('I'),
            'ï' => out.push('i'),
            'Ò' => out.push('O'),
            'ò' => out.push('o'),
            'Ù' => out.push('U'),
            'ù' => out.push('u'),
            'À' => out.push('A'),
            'à' => out.push('a'),
            'È' => out.push('E'),
            'è' => out.push('e'),
            'Ì' => out.push('I'),
            'ì' => out.push('i'),
            'Á' => out.push('A'),
            'á' => out.push('a'),
            'É' => out.push('E'),
            'é' => out.push('e'),
            'Í' => out.push('I'),
            'í' => out.push('i'),
            'Ó' => out.push('O'),
            'ó' => out.push('o'),
            'Ú' => out.push('U'),
            'ú' => out.push('u'),
            'Â' => out.push('A'),
            'â' => out.push('a'),
            'Ê' => out.push('E'),
            'ê' => out.push('e'),
            'Î' => out.push('I'),
            'î' => out.push('i'),
            'Ô' => out.push('O'),
            'ô' => out.push('o'),
            'Û' => out.push('U'),
            'û' => out.push('u'),
            'Ã' => out.push('A'),
            'ã' => out.push('a'),
            'Õ' => out.push('O'),
            'õ' => out.push('o'),
            // Correctly-encoded Turkish letters (Ü, Ö, Ç, ...) fall through here.
            other => out.push(other),
        }
    }
    out
}

/// Recursively fixes string leaves in a JSON tree.
///
/// Arrays are mapped element-wise (order and length preserved), objects are
/// mapped value-wise (keys untouched), and non-string scalars are returned
/// unchanged. Total over all of `serde_json::Value`.
pub fn clean_value(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::String(s) => JsonValue::String(fix_legacy_chars(&s)),
        JsonValue::Array(items) => {
            JsonValue::Array(items.into_iter().map(clean_value).collect())
        }
        JsonValue::Object(map) => {
            JsonValue::Object(map.into_iter().map(|(k, v)| (k, clean_value(v))).collect())
        }
        other => other,
    }
}

/// Convenience for row sets: cleans every record in place of a fetched batch.
pub fn clean_records(records: Vec<JsonValue>) -> Vec<JsonValue> {
    records.into_iter().map(clean_value).collect()
}
