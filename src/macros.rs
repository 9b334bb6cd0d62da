/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Handy for writing expected records in tests and for assembling fixtures
/// by hand. Keys must be string literals; leaves go through `Value::from`.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{value, Value};
///
/// let segment = value!({
///     "type": "crypt",
///     "offset_bytes": 16777216,
///     "cipher": "aes-xts-plain64"
/// });
///
/// let record = segment.as_object().unwrap();
/// assert_eq!(record.get("offset_bytes"), Some(&Value::Integer(1 << 24)));
/// ```
#[macro_export]
macro_rules! value {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Record::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Record::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Record`](crate::Record) from a JSON-like object literal.
///
/// # Examples
///
/// ```rust
/// use hostinfo::record;
///
/// let cpu = record!({ "core_id": 3, "cpu_mhz": 400 });
/// assert_eq!(cpu.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    ({}) => {
        $crate::Record::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Record::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        object
    }};
}
