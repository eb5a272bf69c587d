//! Macros for declaring state and trigger vocabularies.

/// Declare a fieldless enum implementing [`State`](crate::core::State).
///
/// Each variant is paired with its identifier, which is also its serialized
/// form. Generates `ALL`, `from_name` and `Display`.
///
/// # Example
///
/// ```
/// use vam::state_enum;
/// use vam::core::State;
///
/// state_enum! {
///     pub enum Phase {
///         Idle => "idle",
///         Busy => "busy",
///     }
/// }
///
/// assert_eq!(Phase::Busy.name(), "busy");
/// assert_eq!(Phase::from_name("idle"), Some(Phase::Idle));
/// assert_eq!(Phase::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Look up a variant by its identifier.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad($crate::core::State::name(self))
            }
        }
    };
}

/// Declare a fieldless enum implementing [`Trigger`](crate::core::Trigger).
///
/// ```
/// use vam::trigger_enum;
/// use vam::core::Trigger;
///
/// trigger_enum! {
///     pub enum Signal {
///         Start => "start",
///         Stop => "stop",
///     }
/// }
///
/// assert_eq!(Signal::Stop.name(), "stop");
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Look up a variant by its identifier.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad($crate::core::Trigger::name(self))
            }
        }
    };
}
