use crate::foundation::error::{FlowError, FlowResult};
use crate::serial::object::{ObjectDeserializer, ObjectSerializer};
use crate::serial::{ARRAY_CLOSE, ARRAY_OPEN, SEPARATOR, parse_object_at};

/// Writes a `[{..},{..}]` array of objects.
#[derive(Clone, Debug)]
pub struct ArraySerializer {
    out: String,
    len: usize,
}

impl Default for ArraySerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArraySerializer {
    /// Start an empty array.
    pub fn new() -> Self {
        let mut out = String::with_capacity(64);
        out.push(ARRAY_OPEN);
        Self { out, len: 0 }
    }

    /// Append a finished object.
    pub fn push(&mut self, object: ObjectSerializer) -> &mut Self {
        if self.len > 0 {
            self.out.push(SEPARATOR);
        }
        self.out.push_str(&object.finish());
        self.len += 1;
        self
    }

    /// Number of objects written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no object has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Close the array and return its text.
    pub fn finish(mut self) -> String {
        self.out.push(ARRAY_CLOSE);
        self.out
    }
}

/// Reads the objects of one array in order.
#[derive(Clone, Debug)]
pub struct ArrayDeserializer {
    objects: std::vec::IntoIter<Vec<String>>,
}

impl ArrayDeserializer {
    /// Parse `input`, which must contain exactly one array.
    pub fn new(input: &str) -> FlowResult<Self> {
        if !input.starts_with(ARRAY_OPEN) {
            return Err(FlowError::serial(format!(
                "expected '{ARRAY_OPEN}' at offset 0"
            )));
        }

        let mut objects = Vec::new();
        let mut pos = ARRAY_OPEN.len_utf8();
        if input[pos..].starts_with(ARRAY_CLOSE) {
            pos += ARRAY_CLOSE.len_utf8();
        } else {
            loop {
                let (fields, next) = parse_object_at(input, pos)?;
                objects.push(fields);
                pos = next;
                match input[pos..].chars().next() {
                    Some(SEPARATOR) => pos += SEPARATOR.len_utf8(),
                    Some(ARRAY_CLOSE) => {
                        pos += ARRAY_CLOSE.len_utf8();
                        break;
                    }
                    Some(c) => {
                        return Err(FlowError::serial(format!(
                            "expected '{SEPARATOR}' or '{ARRAY_CLOSE}' at offset {pos}, found '{c}'"
                        )));
                    }
                    None => {
                        return Err(FlowError::serial("unterminated array"));
                    }
                }
            }
        }

        if pos != input.len() {
            return Err(FlowError::serial(format!(
                "trailing characters after array at offset {pos}"
            )));
        }
        Ok(Self {
            objects: objects.into_iter(),
        })
    }

    /// Objects not yet consumed.
    pub fn remaining(&self) -> usize {
        self.objects.as_slice().len()
    }
}

impl Iterator for ArrayDeserializer {
    type Item = ObjectDeserializer;

    fn next(&mut self) -> Option<Self::Item> {
        self.objects.next().map(ObjectDeserializer::from_fields)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serial/array.rs"]
mod tests;
