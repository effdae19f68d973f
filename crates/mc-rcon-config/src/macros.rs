//! Configuration definition macros for reducing boilerplate.

/// Macro for defining configuration structs with automatic trait implementations.
///
/// This macro generates:
/// - The struct definition with Serialize, Deserialize, Debug, Clone
/// - Default implementation using provided default values
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$struct_meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field_name:ident: $field_type:ty = $default_value:expr,
            )*
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}

/// Macro for defining configuration enums with automatic trait implementations.
///
/// This macro generates:
/// - The enum definition with Debug, Clone, PartialEq, Eq, Serialize, Deserialize
/// - Default implementation using the specified default variant
/// - Display and FromStr implementations for string conversion
#[macro_export]
macro_rules! config_enum {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident,
            )*
        }
        default = $default_variant:ident
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default_variant
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        $name::$variant => write!(f, "{}", stringify!($variant).to_lowercase()),
                    )*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        _ if s.eq_ignore_ascii_case(stringify!($variant)) => Ok(Self::$variant),
                    )*
                    _ => Err(format!("Invalid {} variant: {}", stringify!($name), s)),
                }
            }
        }
    };
}
