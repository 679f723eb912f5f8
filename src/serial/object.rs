use std::fmt::Display;
use std::str::FromStr;

use crate::foundation::error::{FlowError, FlowResult};
use crate::serial::{OBJECT_CLOSE, OBJECT_OPEN, SEPARATOR, escape_into, parse_object_at};

/// Writes one `{field,field,...}` object.
///
/// An object whose only field is the empty string is written as `{}`, which reads back as an
/// object with zero fields. Use [`ObjectSerializer::is_lossy`] to detect that case before
/// persisting.
#[derive(Clone, Debug)]
pub struct ObjectSerializer {
    out: String,
    fields: usize,
}

impl Default for ObjectSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectSerializer {
    /// Start an empty object.
    pub fn new() -> Self {
        let mut out = String::with_capacity(32);
        out.push(OBJECT_OPEN);
        Self { out, fields: 0 }
    }

    /// Append a raw string field, escaping reserved characters.
    pub fn field(&mut self, value: &str) -> &mut Self {
        if self.fields > 0 {
            self.out.push(SEPARATOR);
        }
        escape_into(&mut self.out, value);
        self.fields += 1;
        self
    }

    /// Append any `Display` value as a field.
    pub fn value<T: Display>(&mut self, value: T) -> &mut Self {
        self.field(&value.to_string())
    }

    /// Number of fields written so far.
    pub fn len(&self) -> usize {
        self.fields
    }

    /// True when no field has been written.
    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    /// True when the written text will not read back with the same field count.
    pub fn is_lossy(&self) -> bool {
        self.fields == 1 && self.out.len() == OBJECT_OPEN.len_utf8()
    }

    /// Close the object and return its text.
    pub fn finish(mut self) -> String {
        self.out.push(OBJECT_CLOSE);
        self.out
    }
}

/// Reads the fields of one object in order.
#[derive(Clone, Debug)]
pub struct ObjectDeserializer {
    fields: std::vec::IntoIter<String>,
    index: usize,
}

impl ObjectDeserializer {
    /// Parse `input`, which must contain exactly one object.
    pub fn new(input: &str) -> FlowResult<Self> {
        let (fields, end) = parse_object_at(input, 0)?;
        if end != input.len() {
            return Err(FlowError::serial(format!(
                "trailing characters after object at offset {end}"
            )));
        }
        Ok(Self::from_fields(fields))
    }

    pub(crate) fn from_fields(fields: Vec<String>) -> Self {
        Self {
            fields: fields.into_iter(),
            index: 0,
        }
    }

    /// Fields not yet consumed.
    pub fn remaining(&self) -> usize {
        self.fields.len()
    }

    /// Next raw field.
    pub fn next_field(&mut self) -> FlowResult<String> {
        let idx = self.index;
        let field = self
            .fields
            .next()
            .ok_or_else(|| FlowError::serial(format!("missing field #{idx}")))?;
        self.index += 1;
        Ok(field)
    }

    /// Next field parsed with [`FromStr`].
    pub fn next_parsed<T>(&mut self) -> FlowResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let idx = self.index;
        let raw = self.next_field()?;
        raw.trim()
            .parse::<T>()
            .map_err(|e| FlowError::serial(format!("field #{idx} ('{raw}'): {e}")))
    }

    /// Next field as an `i32`.
    pub fn next_i32(&mut self) -> FlowResult<i32> {
        self.next_parsed()
    }

    /// Next field as a `bool` (`true`/`false`).
    pub fn next_bool(&mut self) -> FlowResult<bool> {
        self.next_parsed()
    }

    /// Fail if any field is left unread.
    pub fn finish(self) -> FlowResult<()> {
        let left = self.fields.as_slice().len();
        if left != 0 {
            return Err(FlowError::serial(format!(
                "{left} unexpected trailing field(s)"
            )));
        }
        Ok(())
    }
}

impl Iterator for ObjectDeserializer {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let f = self.fields.next()?;
        self.index += 1;
        Some(f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serial/object.rs"]
mod tests;
