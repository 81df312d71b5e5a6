//! Macros for ergonomic machine construction.

/// Generate a state enum with a `State` implementation.
///
/// Each variant may carry a label with `as "label"`, used both as its
/// display name and its serialized name; unlabeled variants use their
/// identifier for both.
///
/// # Example
///
/// ```
/// use pushdown::core::State;
/// use pushdown::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Push as "q0",
///         Pop as "q1",
///         Done,
///     }
/// }
///
/// assert_eq!(Phase::Push.name(), "q0");
/// assert_eq!(Phase::Done.name(), "Done");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Reading as "read",
            Matching as "match",
            Accept,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Reading.name(), "read");
        assert_eq!(TestState::Matching.name(), "match");
        assert_eq!(TestState::Accept.name(), "Accept");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_is_hashable_and_copy() {
        let mut set = std::collections::HashSet::new();
        let state = TestState::Accept;
        set.insert(state);
        set.insert(state);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn state_enum_serializes_by_label() {
        let json = serde_json::to_string(&TestState::Matching).unwrap();
        assert_eq!(json, "\"match\"");

        let json = serde_json::to_string(&TestState::Accept).unwrap();
        assert_eq!(json, "\"Accept\"");
    }

    #[test]
    fn state_enum_deserializes_from_label() {
        let state: TestState = serde_json::from_str("\"read\"").unwrap();
        assert_eq!(state, TestState::Reading);
        assert!(serde_json::from_str::<TestState>("\"Reading\"").is_err());
    }
}
