use crate::error::NameError;
use crate::user::User;

/// Allocates one record on the heap, populated from the supplied values,
/// and returns the owning handle.
///
/// Dropping the returned box releases the record exactly once; the move
/// rules make a second release, or a use after release, impossible to
/// write. Allocation itself is not a recoverable condition: the global
/// allocator aborts on exhaustion, so no error variant models it.
pub fn create_user(age: i32, name: &str, gpa: f64) -> Result<Box<User>, NameError> {
    Ok(Box::new(User::try_new(age, name, gpa)?))
}

/// The input-ignoring form of the factory, kept for contrast.
pub mod legacy {
    use crate::name::UserName;
    use crate::user::User;

    /// Ignores all three arguments and stamps fixed values: age 15, name
    /// "Omar", gpa 2.5. The body builds the same record a caller would
    /// assemble by hand instead of reading its parameters — a defect kept
    /// visible next to [`create_user`](super::create_user), which honors
    /// its inputs. Infallible, since the stamped name always fits.
    pub fn create_user(_age: i32, _name: &str, _gpa: f64) -> Box<User> {
        let name = UserName::new("Omar").expect("\"Omar\" fits the name capacity");
        Box::new(User::new(15, name, 2.5))
    }
}
