// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core localization types with ZERO external dependencies.
//!
//! This module contains the closed, host-defined enumerations that the rest
//! of the crate is keyed on. Each type parses from and displays as its exact
//! canonical name, which is also the spelling used in content files.
//!
//! # Modules
//!
//! - [`language`]: Human languages ([`Language`](language::Language))
//! - [`subgroup`]: Partitions of localization keys ([`Subgroup`](subgroup::Subgroup))
//! - [`font_type`]: Logical font types ([`FontType`](font_type::FontType))

/// Error returned when a string is not the canonical name of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// Type that was being parsed (e.g. `"Language"`).
    pub kind: &'static str,
    /// Input that failed to parse.
    pub value: String,
}

impl std::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownName {}

/// Declares a closed enum whose variants round-trip through their exact names.
///
/// Generates `ALL`, `name()`, `Display` and a case-sensitive `FromStr`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Returns the canonical name of this variant.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($variant) => Ok($name::$variant), )+
                    _ => Err($crate::domain::UnknownName {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use named_enum;

pub mod font_type;
pub mod language;
pub mod subgroup;

pub use font_type::FontType;
pub use language::Language;
pub use subgroup::Subgroup;
