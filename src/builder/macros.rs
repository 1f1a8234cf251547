//! Macros for ergonomic state declarations.

/// Declare a state enum usable with [`TransitionTable`](crate::core::TransitionTable).
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// `serde::Serialize` and `serde::Deserialize`, gains a `name()` method and
/// a `Display` impl printing the variant name. Attributes on the enum are
/// passed through, so serde renames work as usual. The serde derives go
/// through this crate's own `serde`, so callers need no direct dependency.
///
/// # Example
///
/// ```
/// use micromachine::state_enum;
///
/// state_enum! {
///     #[serde(rename_all = "lowercase")]
///     pub enum OrderState {
///         Created,
///         Paid,
///         Shipped,
///     }
/// }
///
/// assert_eq!(OrderState::Paid.name(), "Paid");
/// assert_eq!(OrderState::Shipped.to_string(), "Shipped");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize
        )]
        #[serde(crate = "::micromachine::__serde")]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// The variant name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
