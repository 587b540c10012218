//! Form schemas and the validated submission pipeline for Mitra.
//!
//! Raw form input arrives as untyped JSON. This crate checks it against a
//! declared [`Schema`], reports every violated field, and on success hands
//! back a typed payload ready for the API client. Validation is a pure
//! function of `(schema, input)`; nothing here performs I/O.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`schema`] | Declarative field types and constraints: [`Schema`], [`FieldType`], [`Number`], [`Text`] |
//! | [`validation`] | [`validate`], [`validate_as`], and the [`Validation`] result |
//! | [`forms`] | The declared forms ([`MoodEntryForm`], [`StudentForm`], …) and the [`Form`] trait |
//!
//! # Quick start
//!
//! ```rust
//! use mitra::{forms::parse, MoodEntryForm, Validation};
//! use serde_json::json;
//!
//! match parse::<MoodEntryForm>(&json!({ "mood": "4", "notes": "slept well" })) {
//!     Validation::Valid(form) => assert_eq!(form.mood, 4),
//!     Validation::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
//! }
//! ```

pub mod forms;
pub mod schema;
pub mod validation;

pub use forms::{
    ChatMessageForm, CrisisAlertForm, Form, FormKind, LoginForm, MoodEntryForm, RiskAssessmentForm,
    RiskFactor, RiskLevel, Role, SettingsForm, Severity, StudentForm, Theme, UserForm,
};
pub use schema::{FieldType, Number, Presence, Schema, Text};
pub use validation::{validate, validate_as, validate_type, FieldError, Validation};
