//! Read access to parsed test-vector documents.
//!
//! A Wycheproof file is a JSON object whose shape depends on the primitive.
//! [`VectorDocument`] exposes typed accessors that fail with a
//! [`DocumentError`] naming the field, plus shortcuts for the keys every
//! file shares (`algorithm`, `generatorVersion`, `testGroups`, ...).

use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::results::ExpectedResult;

fn missing(key: &str) -> DocumentError {
    DocumentError::MissingField { field: key.to_string() }
}

fn wrong_type(key: &str, expected: &'static str) -> DocumentError {
    DocumentError::WrongType { field: key.to_string(), expected }
}

fn value_in<'m>(fields: &'m Map<String, Value>, key: &str) -> Result<&'m Value, DocumentError> {
    fields.get(key).ok_or_else(|| missing(key))
}

fn str_in<'m>(fields: &'m Map<String, Value>, key: &str) -> Result<&'m str, DocumentError> {
    value_in(fields, key)?.as_str().ok_or_else(|| wrong_type(key, "a string"))
}

fn array_in<'m>(fields: &'m Map<String, Value>, key: &str) -> Result<&'m [Value], DocumentError> {
    value_in(fields, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| wrong_type(key, "an array"))
}

fn object_in<'m>(
    fields: &'m Map<String, Value>,
    key: &str,
) -> Result<JsonView<'m>, DocumentError> {
    value_in(fields, key)?
        .as_object()
        .map(JsonView::new)
        .ok_or_else(|| wrong_type(key, "an object"))
}

/// Typed access to a JSON object.
pub trait VectorDocument {
    /// Underlying object.
    fn fields(&self) -> &Map<String, Value>;

    /// Raw value of `key`.
    ///
    /// # Errors
    /// Returns [`DocumentError::MissingField`] if `key` is absent.
    fn get_value(&self, key: &str) -> Result<&Value, DocumentError> {
        value_in(self.fields(), key)
    }

    /// String value of `key`.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not a string.
    fn get_str(&self, key: &str) -> Result<&str, DocumentError> {
        str_in(self.fields(), key)
    }

    /// Unsigned integer value of `key`.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not a non-negative integer.
    fn get_u64(&self, key: &str) -> Result<u64, DocumentError> {
        self.get_value(key)?.as_u64().ok_or_else(|| wrong_type(key, "an unsigned integer"))
    }

    /// Array value of `key`.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not an array.
    fn get_array(&self, key: &str) -> Result<&[Value], DocumentError> {
        array_in(self.fields(), key)
    }

    /// Nested object at `key`.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not an object.
    fn get_object(&self, key: &str) -> Result<JsonView<'_>, DocumentError> {
        object_in(self.fields(), key)
    }

    /// String value of `key`, or `None` if it is absent or not a string.
    fn opt_str(&self, key: &str) -> Option<&str> {
        self.fields().get(key).and_then(Value::as_str)
    }

    /// Declared algorithm, e.g. `"ECDSA"`.
    ///
    /// # Errors
    /// Returns an error if `algorithm` is absent or not a string.
    fn algorithm(&self) -> Result<&str, DocumentError> {
        self.get_str("algorithm")
    }

    /// Version of the generator that produced the file.
    ///
    /// # Errors
    /// Returns an error if `generatorVersion` is absent or not a string.
    fn generator_version(&self) -> Result<&str, DocumentError> {
        self.get_str("generatorVersion")
    }

    /// Total number of test cases declared by the file.
    ///
    /// # Errors
    /// Returns an error if `numberOfTests` is absent or not an integer.
    fn number_of_tests(&self) -> Result<u64, DocumentError> {
        self.get_u64("numberOfTests")
    }

    /// Objects of the `testGroups` array.
    ///
    /// # Errors
    /// Returns an error if `testGroups` is absent, not an array, or holds a
    /// non-object.
    fn test_groups(&self) -> Result<Vec<JsonView<'_>>, DocumentError> {
        objects(array_in(self.fields(), "testGroups")?, "testGroups")
    }

    /// Objects of a group's `tests` array.
    ///
    /// # Errors
    /// Returns an error if `tests` is absent, not an array, or holds a
    /// non-object.
    fn tests(&self) -> Result<Vec<JsonView<'_>>, DocumentError> {
        objects(array_in(self.fields(), "tests")?, "tests")
    }

    /// Test case id (`tcId`).
    ///
    /// # Errors
    /// Returns an error if `tcId` is absent or not an integer.
    fn tc_id(&self) -> Result<u64, DocumentError> {
        self.get_u64("tcId")
    }

    /// Expected outcome of a test case.
    ///
    /// # Errors
    /// Returns an error if `result` is absent, not a string, or unknown.
    fn expected_result(&self) -> Result<ExpectedResult, DocumentError> {
        ExpectedResult::parse(self.get_str("result")?)
    }

    /// Flags attached to a test case. Absent `flags` means none.
    ///
    /// # Errors
    /// Returns an error if `flags` is present but not an array of strings.
    fn flags(&self) -> Result<Vec<&str>, DocumentError> {
        let Some(value) = self.fields().get("flags") else {
            return Ok(Vec::new());
        };
        let items = value.as_array().ok_or_else(|| wrong_type("flags", "an array"))?;
        items
            .iter()
            .map(|flag| flag.as_str().ok_or_else(|| wrong_type("flags", "an array of strings")))
            .collect()
    }
}

fn objects<'a>(items: &'a [Value], key: &str) -> Result<Vec<JsonView<'a>>, DocumentError> {
    items
        .iter()
        .map(|item| {
            item.as_object().map(JsonView::new).ok_or_else(|| wrong_type(key, "an array of objects"))
        })
        .collect()
}

/// Owned top-level document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    fields: Map<String, Value>,
}

impl JsonDocument {
    /// Wraps a parsed JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wraps `value` if it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl VectorDocument for JsonDocument {
    fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Borrowed view of a nested object (a test group, a key, a test case).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonView<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> JsonView<'a> {
    /// Wraps a borrowed JSON object.
    #[must_use]
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Underlying object, borrowed for as long as the document.
    #[must_use]
    pub fn object(&self) -> &'a Map<String, Value> {
        self.fields
    }

    /// String value of `key`, borrowed from the document rather than the view.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not a string.
    pub fn get_str(&self, key: &str) -> Result<&'a str, DocumentError> {
        str_in(self.fields, key)
    }

    /// Array value of `key`, borrowed from the document.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not an array.
    pub fn get_array(&self, key: &str) -> Result<&'a [Value], DocumentError> {
        array_in(self.fields, key)
    }

    /// Nested object at `key`, borrowed from the document.
    ///
    /// # Errors
    /// Returns an error if `key` is absent or not an object.
    pub fn get_object(&self, key: &str) -> Result<JsonView<'a>, DocumentError> {
        object_in(self.fields, key)
    }

    /// Objects of a group's `tests` array, borrowed from the document.
    ///
    /// # Errors
    /// Returns an error if `tests` is absent, not an array, or holds a
    /// non-object.
    pub fn tests(&self) -> Result<Vec<JsonView<'a>>, DocumentError> {
        objects(array_in(self.fields, "tests")?, "tests")
    }
}

impl VectorDocument for JsonView<'_> {
    fn fields(&self) -> &Map<String, Value> {
        self.fields
    }
}
