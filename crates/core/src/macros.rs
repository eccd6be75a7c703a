#[macro_export]
macro_rules! impl_from {
    ($($From:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value)
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_from_cast {
    ($($From:ty as $cast:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value as $cast)
                }
            }
        )*
    };
}

/// Builds a [`Value::Record`](crate::Value::Record) keeping the written key order.
///
/// ```
/// use pcore_core::record;
///
/// let point = record! { "x" => 1, "y" => 2 };
/// assert_eq!(point.record_keys(), Some(vec!["x", "y"]));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record($crate::IndexMap::default())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::IndexMap::default();
        $(
            fields.insert($key.to_string(), $crate::Value::from($value));
        )+
        $crate::Value::Record(fields)
    }};
}
