use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;
use crate::name::UserName;

/// A person record: age, display name, grade point average.
///
/// `age` and `gpa` carry no range invariant; the only invariant is the name
/// capacity, enforced by [`UserName`] at every construction boundary
/// (including deserialization). A `User` may live on the stack as a plain
/// value or on the heap behind a `Box` — see [`crate::factory`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    age: i32,
    name: UserName,
    gpa: f64,
}

impl User {
    /// Builds a record from already-validated parts. Cannot fail.
    pub fn new(age: i32, name: UserName, gpa: f64) -> Self {
        User { age, name, gpa }
    }

    /// Builds a record from raw text, rejecting an oversized name.
    pub fn try_new(age: i32, name: &str, gpa: f64) -> Result<Self, NameError> {
        Ok(User {
            age,
            name: UserName::new(name)?,
            gpa,
        })
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Replaces the name, rejecting text that does not fit.
    pub fn set_name(&mut self, name: &str) -> Result<(), NameError> {
        self.name = UserName::new(name)?;
        Ok(())
    }

    pub fn set_gpa(&mut self, gpa: f64) {
        self.gpa = gpa;
    }
}

// One report line per record, e.g. `Age: 1, Name: Mohamed, gpa: 3.100000`.
// The gpa always renders with six fractional digits.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Age: {}, Name: {}, gpa: {:.6}",
            self.age, self.name, self.gpa
        )
    }
}
