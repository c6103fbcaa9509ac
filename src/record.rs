//! Schema-on-read record model for delimited input.
//!
//! The input's column set is captured once, from the header row, as a
//! [`Schema`]; every subsequent row is parsed positionally against it into
//! tagged [`Value`]s. The source format carries no type information, so each
//! cell's type is inferred from its textual form.

/// A single cell value, inferred from its textual form.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Any field that is neither empty nor numeric.
    Str(String),
    /// A field that parses as a finite float.
    Number(f64),
    /// An empty field.
    Null,
}

impl Value {
    /// Infer a value from one raw CSV field.
    ///
    /// Empty fields become [`Value::Null`], fields that parse as a finite
    /// float become [`Value::Number`], everything else stays a string.
    /// Non-finite numerics (`inf`, `NaN`) are kept as strings since the
    /// spreadsheet format cannot represent them.
    pub fn infer(field: &str) -> Self {
        if field.is_empty() {
            return Value::Null;
        }
        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Str(field.to_string()),
        }
    }
}

/// Ordered column names of the source, fixed for the whole input.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from header field names, in source order.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the source has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One parsed row, positional against the [`Schema`].
pub type Row = Vec<Value>;
