use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{FieldType, Number, Presence, Schema, Text};

/// A single constraint violation, addressed by dotted path (`factors.0.severity`).
///
/// An empty path refers to the input as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Outcome of validating raw input against a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    /// Every field satisfied its constraint; holds the coerced payload.
    Valid(T),
    /// One entry per violated field, in schema order. Never empty.
    Invalid(Vec<FieldError>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// The reported errors; empty for `Valid`.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<T, Vec<FieldError>> {
        match self {
            Validation::Valid(v) => Ok(v),
            Validation::Invalid(errors) => Err(errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
        match self {
            Validation::Valid(v) => Validation::Valid(f(v)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

/// Validate `raw` against `schema`.
///
/// Every field is checked before returning, so the error list is complete.
/// On success the returned object holds only declared fields, with defaults
/// filled in and numeric/boolean strings coerced to their declared types.
pub fn validate(schema: &Schema, raw: &Value) -> Validation<Value> {
    let mut errors = Vec::new();
    let out = check_object(schema, raw, "", &mut errors);
    finish(out, errors)
}

/// Validate `raw` against a bare [`FieldType`], which need not be an object.
pub fn validate_type(ty: &FieldType, raw: &Value) -> Validation<Value> {
    let mut errors = Vec::new();
    let out = check(ty, raw, "", &mut errors);
    finish(out, errors)
}

fn finish(out: Option<Value>, errors: Vec<FieldError>) -> Validation<Value> {
    match out {
        Some(value) if errors.is_empty() => Validation::Valid(value),
        _ => Validation::Invalid(errors),
    }
}

/// Validate `raw` against `schema` and decode the coerced value into `T`.
pub fn validate_as<T: DeserializeOwned>(schema: &Schema, raw: &Value) -> Validation<T> {
    decode(validate(schema, raw))
}

/// Decode an already-validated value into `T`.
///
/// A decoding failure means the schema and `T` disagree; it is reported as a
/// root-level error rather than a panic.
pub fn decode<T: DeserializeOwned>(checked: Validation<Value>) -> Validation<T> {
    match checked {
        Validation::Valid(value) => match serde_json::from_value(value) {
            Ok(typed) => Validation::Valid(typed),
            Err(e) => Validation::Invalid(vec![FieldError::new("", e.to_string())]),
        },
        Validation::Invalid(errors) => Validation::Invalid(errors),
    }
}

// --- checking ----------------------------------------------------------------

fn check(ty: &FieldType, value: &Value, path: &str, errors: &mut Vec<FieldError>) -> Option<Value> {
    let result = match ty {
        FieldType::Number(rule) => check_number(rule, value),
        FieldType::Text(rule) => check_text(rule, value),
        FieldType::Boolean => check_bool(value),
        FieldType::Enum(values) => check_enum(values, value),
        FieldType::Array(item) => return check_array(item, value, path, errors),
        FieldType::Object(schema) => return check_object(schema, value, path, errors),
        FieldType::Any => Ok(value.clone()),
    };
    match result {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(FieldError::new(path, message));
            None
        }
    }
}

fn check_object(
    schema: &Schema,
    value: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    let Some(input) = value.as_object() else {
        errors.push(FieldError::new(path, mismatch("object", value)));
        return None;
    };

    let before = errors.len();
    let mut out = Map::new();
    for field in schema.fields() {
        let field_path = join(path, field.name());
        let supplied = input.get(field.name()).filter(|v| !v.is_null());
        let candidate = match (supplied, field.presence()) {
            (Some(v), _) => v,
            (None, Presence::Default(default)) => default,
            (None, Presence::Optional) => continue,
            (None, Presence::Required) => {
                errors.push(FieldError::new(field_path, "Required"));
                continue;
            }
        };
        if let Some(checked) = check(field.ty(), candidate, &field_path, errors) {
            out.insert(field.name().to_string(), checked);
        }
    }

    (errors.len() == before).then_some(Value::Object(out))
}

fn check_array(
    item: &FieldType,
    value: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Value> {
    let Some(items) = value.as_array() else {
        errors.push(FieldError::new(path, mismatch("array", value)));
        return None;
    };

    let before = errors.len();
    let checked: Vec<Value> = items
        .iter()
        .enumerate()
        .filter_map(|(i, v)| check(item, v, &join(path, &i.to_string()), errors))
        .collect();

    (errors.len() == before).then_some(Value::Array(checked))
}

fn check_number(rule: &Number, value: &Value) -> Result<Value, String> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
    .ok_or_else(|| mismatch(if rule.integer { "integer" } else { "number" }, value))?;

    if rule.integer && n.fract() != 0.0 {
        return Err("Expected integer, received float".into());
    }
    if let Some(min) = &rule.min {
        if n < min.value {
            return Err(min.message.map(str::to_string).unwrap_or_else(|| {
                format!("Number must be greater than or equal to {}", min.value)
            }));
        }
    }
    if let Some(max) = &rule.max {
        if n > max.value {
            return Err(max.message.map(str::to_string).unwrap_or_else(|| {
                format!("Number must be less than or equal to {}", max.value)
            }));
        }
    }
    Ok(number_value(n))
}

fn check_text(rule: &Text, value: &Value) -> Result<Value, String> {
    let s = value.as_str().ok_or_else(|| mismatch("string", value))?;
    let len = s.chars().count();

    if let Some(min) = &rule.min_len {
        if len < min.value {
            return Err(min.message.map(str::to_string).unwrap_or_else(|| {
                format!("String must contain at least {} character(s)", min.value)
            }));
        }
    }
    if let Some(max) = &rule.max_len {
        if len > max.value {
            return Err(max.message.map(str::to_string).unwrap_or_else(|| {
                format!("String must contain at most {} character(s)", max.value)
            }));
        }
    }
    if let Some(message) = rule.email {
        if !EMAIL_RE.is_match(s) {
            return Err(message.to_string());
        }
    }
    Ok(Value::String(s.to_string()))
}

fn check_bool(value: &Value) -> Result<Value, String> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::String(s) if s == "true" => Ok(Value::Bool(true)),
        Value::String(s) if s == "false" => Ok(Value::Bool(false)),
        _ => Err(mismatch("boolean", value)),
    }
}

fn check_enum(values: &[&str], value: &Value) -> Result<Value, String> {
    match value.as_str() {
        Some(s) if values.contains(&s) => Ok(Value::String(s.to_string())),
        _ => {
            let expected = values
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(" | ");
            let received = match value {
                Value::String(s) => format!("'{s}'"),
                other => kind(other).to_string(),
            };
            Err(format!("Invalid enum value. Expected {expected}, received {received}"))
        }
    }
}

// --- helpers -----------------------------------------------------------------

fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn mismatch(expected: &str, value: &Value) -> String {
    format!("Expected {expected}, received {}", kind(value))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integral values become JSON integers so `"3"` and `3` produce the same output.
fn number_value(n: f64) -> Value {
    const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if n.fract() == 0.0 && n.abs() < EXACT {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mood_schema() -> Schema {
        Schema::new()
            .field(
                "mood",
                Number::new().min(1.0).max_msg(5.0, "Mood must be between 1 and 5").integer(),
            )
            .optional("notes", Text::new())
            .with_default("factors", FieldType::array(Text::new()), json!([]))
    }

    fn paths(v: &Validation<Value>) -> Vec<&str> {
        v.errors().iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn valid_input_applies_default() {
        let out = validate(&mood_schema(), &json!({"mood": 3, "notes": "ok"}));
        assert_eq!(
            out,
            Validation::Valid(json!({"mood": 3, "notes": "ok", "factors": []}))
        );
    }

    #[test]
    fn numeric_string_is_coerced() {
        let out = validate(&mood_schema(), &json!({"mood": "3"}));
        assert_eq!(out, Validation::Valid(json!({"mood": 3, "factors": []})));
    }

    #[test]
    fn out_of_range_names_field_and_bound() {
        let out = validate(&mood_schema(), &json!({"mood": 6}));
        let errors = out.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "mood");
        assert!(errors[0].message.contains('5'));
        assert_eq!(errors[0].to_string(), "mood: Mood must be between 1 and 5");
    }

    #[test]
    fn generated_messages_name_the_bound() {
        let schema = Schema::new().field("n", Number::new().min(0.0).max(10.0));
        let out = validate(&schema, &json!({"n": 11}));
        assert_eq!(out.errors()[0].message, "Number must be less than or equal to 10");
        let out = validate(&schema, &json!({"n": -1}));
        assert_eq!(out.errors()[0].message, "Number must be greater than or equal to 0");
    }

    #[test]
    fn fractional_value_rejected_for_integer_field() {
        let out = validate(&mood_schema(), &json!({"mood": 2.5}));
        assert_eq!(out.errors()[0].message, "Expected integer, received float");
    }

    #[test]
    fn missing_required_field_reported() {
        let out = validate(&mood_schema(), &json!({}));
        assert_eq!(out.errors(), &[FieldError::new("mood", "Required")]);
    }

    #[test]
    fn null_treated_as_missing() {
        let out = validate(&mood_schema(), &json!({"mood": 1, "notes": null}));
        assert_eq!(out, Validation::Valid(json!({"mood": 1, "factors": []})));
    }

    #[test]
    fn null_required_or_defaulted_field_reads_as_absent() {
        let out = validate(&mood_schema(), &json!({"mood": null, "factors": null}));
        assert_eq!(out.errors(), &[FieldError::new("mood", "Required")]);
        let out = validate(&mood_schema(), &json!({"mood": 2, "factors": null}));
        assert_eq!(out, Validation::Valid(json!({"mood": 2, "factors": []})));
    }

    #[test]
    fn all_violations_reported_in_schema_order() {
        let schema = Schema::new()
            .field("name", Text::new().min_len(2, "Name must be at least 2 characters"))
            .field("email", Text::new().email("Invalid email address"))
            .field("role", FieldType::one_of(&["parent", "student", "counselor"]));
        let out = validate(&schema, &json!({"role": "admin", "email": "nope", "name": "A"}));
        assert_eq!(paths(&out), ["name", "email", "role"]);
        assert_eq!(
            out.errors()[2].message,
            "Invalid enum value. Expected 'parent' | 'student' | 'counselor', received 'admin'"
        );
    }

    #[test]
    fn one_entry_per_field_even_when_several_constraints_fail() {
        let schema = Schema::new().field(
            "email",
            Text::new().min_len(20, "too short").email("Invalid email address"),
        );
        let out = validate(&schema, &json!({"email": "x"}));
        assert_eq!(out.errors(), &[FieldError::new("email", "too short")]);
    }

    #[test]
    fn nested_paths_are_dotted() {
        let factor = Schema::new()
            .field("category", Text::new())
            .field("severity", Number::new().min(0.0).max(10.0));
        let schema = Schema::new().field("factors", FieldType::array(factor));
        let out = validate(
            &schema,
            &json!({"factors": [{"category": "sleep", "severity": 2},
                                {"category": "school", "severity": 12}]}),
        );
        assert_eq!(paths(&out), ["factors.1.severity"]);
    }

    #[test]
    fn nested_defaults_apply_through_object_default() {
        let inner = Schema::new()
            .with_default("email", FieldType::Boolean, json!(true))
            .with_default("sms", FieldType::Boolean, json!(false));
        let schema = Schema::new().with_default("notifications", inner, json!({}));
        let out = validate(&schema, &json!({"notifications": {"sms": "true"}}));
        assert_eq!(
            out,
            Validation::Valid(json!({"notifications": {"email": true, "sms": true}}))
        );
        let out = validate(&schema, &json!({}));
        assert_eq!(
            out,
            Validation::Valid(json!({"notifications": {"email": true, "sms": false}}))
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let out = validate(&mood_schema(), &json!({"mood": 4, "extra": "x"}));
        assert_eq!(out, Validation::Valid(json!({"mood": 4, "factors": []})));
    }

    #[test]
    fn non_object_input_is_a_root_error() {
        let out = validate(&mood_schema(), &json!([1, 2]));
        assert_eq!(out.errors(), &[FieldError::new("", "Expected object, received array")]);
        assert_eq!(out.errors()[0].to_string(), "(root): Expected object, received array");
    }

    #[test]
    fn type_mismatch_message() {
        let out = validate(&mood_schema(), &json!({"mood": "happy", "factors": "sleep"}));
        assert_eq!(
            out.errors(),
            &[
                FieldError::new("mood", "Expected integer, received string"),
                FieldError::new("factors", "Expected array, received string"),
            ]
        );
    }

    #[test]
    fn text_length_counts_characters() {
        let schema = Schema::new().field("content", Text::new().max_len(3, "Message too long"));
        assert!(validate(&schema, &json!({"content": "äöü"})).is_valid());
        assert!(!validate(&schema, &json!({"content": "äöüß"})).is_valid());
    }

    #[test]
    fn validation_does_not_touch_schema() {
        let schema = mood_schema();
        let before = schema.clone();
        let _ = validate(&schema, &json!({"mood": 9}));
        let _ = validate(&schema, &json!({"mood": 2}));
        assert_eq!(schema, before);
    }

    #[test]
    fn validate_as_decodes_typed_payload() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Mood {
            mood: u8,
            factors: Vec<String>,
        }
        let out: Validation<Mood> = validate_as(&mood_schema(), &json!({"mood": "2"}));
        assert_eq!(out, Validation::Valid(Mood { mood: 2, factors: vec![] }));
    }

    #[test]
    fn any_passes_value_through() {
        let out = validate_type(&FieldType::Any, &json!({"k": [1, "two"]}));
        assert_eq!(out, Validation::Valid(json!({"k": [1, "two"]})));
    }
}
