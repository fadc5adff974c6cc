//! Path-tracking access to an orbital-data record.
//!
//! Records arrive as already-parsed JSON. Every lookup remembers the path
//! walked so far, so a failure names the exact key, e.g.
//! `close_approach_data[1].miss_distance.kilometers`.

use serde_json::Value;

use crate::error::BodyError;

/// A position inside a JSON record.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Cursor<'a> {
    pub(crate) fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    /// Step into an object key.
    pub(crate) fn get(&self, key: &str) -> Result<Cursor<'a>, BodyError> {
        let object = self.value.as_object().ok_or_else(|| self.wrong_type("object"))?;
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        };
        match object.get(key) {
            Some(value) => Ok(Cursor { value, path }),
            None => Err(BodyError::MissingField(path)),
        }
    }

    /// Step through a chain of object keys.
    pub(crate) fn at(&self, keys: &[&str]) -> Result<Cursor<'a>, BodyError> {
        let mut cursor = self.clone();
        for key in keys {
            cursor = cursor.get(key)?;
        }
        Ok(cursor)
    }

    /// Elements of an array, each with an indexed path.
    pub(crate) fn elements(&self) -> Result<Vec<Cursor<'a>>, BodyError> {
        let items = self.value.as_array().ok_or_else(|| self.wrong_type("array"))?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(i, value)| Cursor {
                value,
                path: format!("{}[{}]", self.path, i),
            })
            .collect())
    }

    pub(crate) fn as_str(&self) -> Result<&'a str, BodyError> {
        self.value.as_str().ok_or_else(|| self.wrong_type("string"))
    }

    pub(crate) fn as_f64(&self) -> Result<f64, BodyError> {
        self.value.as_f64().ok_or_else(|| self.wrong_type("number"))
    }

    pub(crate) fn as_bool(&self) -> Result<bool, BodyError> {
        self.value.as_bool().ok_or_else(|| self.wrong_type("boolean"))
    }

    /// Parse a decimal string such as `"19.7506484939"`.
    pub(crate) fn parse_f64(&self) -> Result<f64, BodyError> {
        let text = self.as_str()?;
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(BodyError::InvalidNumber {
                field: self.path.clone(),
                value: text.to_string(),
            }),
        }
    }

    pub(crate) fn value(&self) -> &'a Value {
        self.value
    }

    fn wrong_type(&self, expected: &'static str) -> BodyError {
        BodyError::WrongType {
            field: self.path.clone(),
            expected,
        }
    }
}
