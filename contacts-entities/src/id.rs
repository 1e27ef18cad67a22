use std::{borrow::Borrow, fmt, str::FromStr};

use uuid::Uuid;

macro_rules! public_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Uuid::new_v4().into()
            }

            pub fn is_valid(&self) -> bool {
                !self.0.trim().is_empty()
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_ref()
            }
        }

        impl From<String> for $name {
            fn from(from: String) -> Self {
                Self(from)
            }
        }

        impl From<&str> for $name {
            fn from(from: &str) -> Self {
                from.to_owned().into()
            }
        }

        impl From<Uuid> for $name {
            fn from(from: Uuid) -> Self {
                from.as_simple().to_string().into()
            }
        }

        impl From<$name> for String {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = Self::from(s.trim());
                if id.is_valid() {
                    Ok(id)
                } else {
                    Err(InvalidId)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, thiserror::Error)]
#[error("Empty identifier")]
pub struct InvalidId;

public_id!(
    /// Public identifier of an [`Account`](crate::account::Account).
    AccountId
);

public_id!(
    /// Public identifier of a [`Place`](crate::place::Place).
    PlaceId
);
