//! Declarative field schemas.
//!
//! A [`Schema`] is an ordered list of [`Field`]s, each pairing a name with a
//! [`FieldType`] and a [`Presence`] marker. Schemas are assembled once with the
//! consuming builder methods below and then only ever read; nothing in this
//! crate takes a `&mut Schema`.
//!
//! ```rust
//! use mitra::schema::{FieldType, Number, Schema, Text};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("mood", Number::new().min(1.0).max(5.0).integer())
//!     .optional("notes", Text::new())
//!     .with_default("factors", FieldType::array(Text::new()), json!([]));
//!
//! assert_eq!(schema.fields().len(), 3);
//! ```

use serde_json::Value;

/// An ordered, immutable set of field declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// An empty schema. Accepts any object and produces `{}`.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a required field.
    pub fn field(self, name: &'static str, ty: impl Into<FieldType>) -> Self {
        self.push(name, ty.into(), Presence::Required)
    }

    /// Declare a field that may be absent or `null`. Absent optional fields
    /// are left out of the validated output.
    pub fn optional(self, name: &'static str, ty: impl Into<FieldType>) -> Self {
        self.push(name, ty.into(), Presence::Optional)
    }

    /// Declare a field that falls back to `default` when absent or `null`.
    ///
    /// The default is checked against `ty` like any submitted value, so a
    /// nested object default of `{}` picks up the nested fields' own defaults.
    pub fn with_default(
        self,
        name: &'static str,
        ty: impl Into<FieldType>,
        default: Value,
    ) -> Self {
        self.push(name, ty.into(), Presence::Default(default))
    }

    fn push(mut self, name: &'static str, ty: FieldType, presence: Presence) -> Self {
        self.fields.push(Field { name, ty, presence });
        self
    }

    /// Fields in declaration order. Validation reports errors in this order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One named entry of a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: &'static str,
    ty: FieldType,
    presence: Presence,
}

impl Field {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }
}

/// What happens when a field is missing from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    /// Missing is an error (`Required`).
    Required,
    /// Missing is fine; the field is omitted from the output.
    Optional,
    /// Missing is replaced by this value before checking.
    Default(Value),
}

/// The declared type of a field, together with its constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A number. Numeric strings are coerced.
    Number(Number),
    /// A string with optional length and format constraints.
    Text(Text),
    /// A boolean. The strings `"true"` and `"false"` are coerced.
    Boolean,
    /// A string restricted to a fixed set of values.
    Enum(&'static [&'static str]),
    /// A homogeneous array. Every item is checked.
    Array(Box<FieldType>),
    /// A nested object.
    Object(Schema),
    /// Any JSON value, passed through unchanged.
    Any,
}

impl FieldType {
    pub fn array(item: impl Into<FieldType>) -> Self {
        FieldType::Array(Box::new(item.into()))
    }

    pub fn one_of(values: &'static [&'static str]) -> Self {
        FieldType::Enum(values)
    }

    /// Short lowercase name used in "Expected …" messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::Number(n) if n.integer => "integer",
            FieldType::Number(_) => "number",
            FieldType::Text(_) | FieldType::Enum(_) => "string",
            FieldType::Boolean => "boolean",
            FieldType::Array(_) => "array",
            FieldType::Object(_) => "object",
            FieldType::Any => "any",
        }
    }
}

impl From<Number> for FieldType {
    fn from(n: Number) -> Self {
        FieldType::Number(n)
    }
}

impl From<Text> for FieldType {
    fn from(t: Text) -> Self {
        FieldType::Text(t)
    }
}

impl From<Schema> for FieldType {
    fn from(s: Schema) -> Self {
        FieldType::Object(s)
    }
}

/// A limit plus the message to report when it is violated.
///
/// When `message` is `None` the validator generates one that names the limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T> {
    pub value: T,
    pub message: Option<&'static str>,
}

impl<T> Bound<T> {
    fn new(value: T, message: Option<&'static str>) -> Self {
        Self { value, message }
    }
}

/// Constraints for [`FieldType::Number`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Number {
    pub min: Option<Bound<f64>>,
    pub max: Option<Bound<f64>>,
    pub integer: bool,
}

impl Number {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(Bound::new(value, None));
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(Bound::new(value, None));
        self
    }

    /// Inclusive lower bound reported with `message` instead of the generated text.
    pub fn min_msg(mut self, value: f64, message: &'static str) -> Self {
        self.min = Some(Bound::new(value, Some(message)));
        self
    }

    /// Inclusive upper bound reported with `message` instead of the generated text.
    pub fn max_msg(mut self, value: f64, message: &'static str) -> Self {
        self.max = Some(Bound::new(value, Some(message)));
        self
    }

    /// Reject values with a fractional part.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

/// Constraints for [`FieldType::Text`]. Lengths count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub min_len: Option<Bound<usize>>,
    pub max_len: Option<Bound<usize>>,
    pub email: Option<&'static str>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_len(mut self, len: usize, message: &'static str) -> Self {
        self.min_len = Some(Bound::new(len, Some(message)));
        self
    }

    pub fn max_len(mut self, len: usize, message: &'static str) -> Self {
        self.max_len = Some(Bound::new(len, Some(message)));
        self
    }

    /// Require something shaped like an email address.
    pub fn email(mut self, message: &'static str) -> Self {
        self.email = Some(message);
        self
    }
}
