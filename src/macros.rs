// ABOUTME: This module provides macros to reduce boilerplate in the CDMA SMS wire types
// ABOUTME: Includes macros for enum name tables and fluent builder setters

/// Macro for generating the name table of a wire enum
///
/// Every wire enum carries a stable lowercase name that shows up in the
/// decoder's log output. The table is plain immutable data; this macro
/// generates the lookup and a `Display` implementation on top of it.
///
/// # Arguments
/// * `$enum_type` - The enum name (e.g., TeleserviceId)
/// * `$($variant => $name),*` - Variant to name pairs, which must be exhaustive
///
/// # Generated code
/// - `as_str(&self) -> &'static str`
/// - `impl Display` writing `as_str()`
macro_rules! impl_enum_names {
    ($enum_type:ident { $($variant:ident => $name:expr),* $(,)? }) => {
        impl $enum_type {
            /// Returns the name used for this value in log output
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $enum_type::$variant => $name, )*
                }
            }
        }

        impl std::fmt::Display for $enum_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Macro for generating builder setter methods for optional fields
///
/// This macro generates fluent setter methods for builder patterns,
/// where each method takes a value, stores it as `Some(value)` in the
/// corresponding field, and returns self for method chaining.
///
/// # Arguments
/// * `$($setter:ident => $field:ident: $type:ty),*` - Setter name, field name and type
///
/// # Generated code
/// For each field, generates:
/// ```ignore
/// pub fn $setter(mut self, $field: $type) -> Self {
///     self.$field = Some($field);
///     self
/// }
/// ```
macro_rules! optional_setters {
    ($($setter:ident => $field:ident: $type:ty),* $(,)?) => {
        $(
            pub fn $setter(mut self, $field: $type) -> Self {
                self.$field = Some($field);
                self
            }
        )*
    };
}

// Make macros available to the rest of the crate
pub(crate) use {impl_enum_names, optional_setters};
