//! DTOs exchanged with the league backend.
//!
//! Every field the backend may omit is an `Option`, and every backend enum keeps an
//! `Unknown` variant so a value added server-side never breaks deserialization.

/// Declares a backend string enum with `as_str`, `label`, and an `Unknown` fallback.
macro_rules! backend_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub fn variants() -> Vec<$name> {
                vec![$($name::$variant),+]
            }

            /// Wire value sent to and received from the backend.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Human-readable label for display.
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            pub fn from_wire(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)+
                    other => $name::Unknown(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_wire(value))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&value))
            }
        }
    };
}

pub mod auth;
pub mod competition;
pub mod match_sheet;
pub mod matches;
pub mod media;
pub mod message;
pub mod notification;
pub mod player;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
