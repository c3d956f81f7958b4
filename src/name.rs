use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NameError;

/// A user's display name, capped at [`UserName::MAX_LEN`] bytes.
///
/// Construction is the only place length is checked; once a `UserName`
/// exists it always fits the record. Oversized input is rejected with
/// [`NameError::TooLong`], never truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Capacity of the name field in bytes. Length is counted in bytes,
    /// not characters, so multi-byte text is legal up to this limit.
    pub const MAX_LEN: usize = 49;

    /// Smart constructor: accepts any text up to [`Self::MAX_LEN`] bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.len() > Self::MAX_LEN {
            return Err(NameError::TooLong {
                len: name.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(UserName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for UserName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for UserName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for UserName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for UserName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serialized as a plain string; deserialization re-validates so the
// capacity invariant survives the serde boundary too.
impl Serialize for UserName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        UserName::new(raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_typical_name() {
        let name = UserName::new("Mohamed").unwrap();
        assert_eq!(name.as_str(), "Mohamed");
        assert_eq!(name.len(), 7);
        assert_eq!(name.to_string(), "Mohamed");
    }

    #[test]
    fn accepts_name_at_capacity() {
        let name = UserName::new("a".repeat(49)).unwrap();
        assert_eq!(name.len(), UserName::MAX_LEN);
    }

    #[test]
    fn rejects_name_over_capacity() {
        let err = UserName::new("a".repeat(50)).unwrap_err();
        assert_eq!(err, NameError::TooLong { len: 50, max: 49 });
    }

    #[test]
    fn counts_bytes_not_chars() {
        // 'é' is two bytes in UTF-8: 25 of them is 25 chars but 50 bytes.
        let name = "é".repeat(25);
        assert_eq!(name.chars().count(), 25);
        assert_eq!(name.len(), 50);
        assert!(UserName::new(name).is_err());
    }

    #[test]
    fn empty_name_is_the_default() {
        let name = UserName::default();
        assert!(name.is_empty());
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn converts_from_str_and_string() {
        let a = UserName::try_from("Ahmed").unwrap();
        let b = UserName::try_from(String::from("Ahmed")).unwrap();
        let c: UserName = "Ahmed".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn derefs_to_str() {
        let name = UserName::new("Omar").unwrap();
        assert!(name.starts_with('O'));
        assert_eq!(&*name, "Omar");
    }

    proptest! {
        #[test]
        fn accepted_iff_within_capacity(s in "\\PC{0,60}") {
            match UserName::new(s.clone()) {
                Ok(name) => {
                    prop_assert!(s.len() <= UserName::MAX_LEN);
                    prop_assert_eq!(name.as_str(), s.as_str());
                }
                Err(NameError::TooLong { len, max }) => {
                    prop_assert!(s.len() > UserName::MAX_LEN);
                    prop_assert_eq!(len, s.len());
                    prop_assert_eq!(max, UserName::MAX_LEN);
                }
            }
        }

        #[test]
        fn serde_rejects_exactly_what_new_rejects(s in "\\PC{0,60}") {
            let json = serde_json::to_string(&s).unwrap();
            let parsed: Result<UserName, _> = serde_json::from_str(&json);
            prop_assert_eq!(parsed.is_ok(), UserName::new(s).is_ok());
        }
    }
}
