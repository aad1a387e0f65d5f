//! The in-memory value model the generic codec operates on.

/// A dynamically-shaped value: the in-memory form of everything the
/// self-describing codec can represent.
///
/// Integer width is a property of magnitude, not of declared type: build
/// integers through [`Value::int`] and the narrowest representation is
/// chosen automatically. `Map` keeps its pairs in insertion order and
/// allows duplicate keys; the codec round-trips every pair in sequence
/// rather than collapsing to last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Builds an integer value with the narrowest width that holds `n`.
    pub fn int(n: i64) -> Self {
        if n >= i32::MIN as i64 && n <= i32::MAX as i64 {
            Value::Int32(n as i32)
        } else {
            Value::Int64(n)
        }
    }

    /// Sum of raw payload bytes held by this value, ignoring all framing.
    pub fn payload_size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int32(_) => 4,
            Value::Int64(_) => 8,
            Value::Float64(_) => 8,
            Value::Text(s) => s.len(),
            Value::List(items) => items.iter().map(Value::payload_size).sum(),
            Value::Map(pairs) => pairs
                .iter()
                .map(|(key, value)| key.len() + value.payload_size())
                .sum(),
        }
    }

    /// Nesting depth. Scalars are depth 0; a container adds one level.
    pub fn depth(&self) -> usize {
        match self {
            Value::List(items) => items.iter().map(Value::depth).max().unwrap_or(0) + 1,
            Value::Map(pairs) => {
                pairs
                    .iter()
                    .map(|(_, value)| value.depth())
                    .max()
                    .unwrap_or(0)
                    + 1
            }
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
