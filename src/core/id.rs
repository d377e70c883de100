//! Identifier newtypes for states and events.
//!
//! Both identifiers are thin wrappers around `String`. They serialize as
//! plain strings, borrow as `str` for map lookups, and dereference to `str`
//! so a `&StateId` can be passed wherever a `&str` is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a name as an identifier.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier! {
    /// Name of a configured state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::core::StateId;
    ///
    /// let idle = StateId::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert_eq!(idle.to_string(), "idle");
    /// ```
    StateId
}

identifier! {
    /// Name of an event that drives a transition.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn identifier_displays_inner_name() {
        assert_eq!(StateId::new("running").to_string(), "running");
        assert_eq!(EventId::from("start").as_str(), "start");
    }

    #[test]
    fn identifier_compares_with_str() {
        let state = StateId::from("paused");
        assert_eq!(state, "paused");
        assert_ne!(state, "running");
    }

    #[test]
    fn hash_map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(StateId::from("idle"), 1);
        assert_eq!(map.get("idle"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn btree_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(EventId::from("stop"), StateId::from("idle"));
        assert_eq!(map.get("stop"), Some(&StateId::from("idle")));
    }

    #[test]
    fn identifier_serializes_as_plain_string() {
        let json = serde_json::to_string(&StateId::from("idle")).unwrap();
        assert_eq!(json, "\"idle\"");

        let event: EventId = serde_json::from_str("\"resume\"").unwrap();
        assert_eq!(event, "resume");
    }

    #[test]
    fn empty_identifier_is_detected() {
        assert!(StateId::from("").is_empty());
        assert!(!EventId::from("go").is_empty());
    }
}
