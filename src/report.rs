use crate::error::NameError;
use crate::factory::create_user;
use crate::name::UserName;
use crate::user::User;

/// Walks one record through every stage of its life and returns the four
/// report lines, in order: stack record, default record mutated field by
/// field, manually populated heap record, factory record.
///
/// Both heap records are released exactly once — explicitly, before the
/// function returns.
pub fn lifecycle_lines() -> Result<Vec<String>, NameError> {
    // Stack residency: owned by this frame, no explicit release.
    let u1 = User::new(1, UserName::new("Mohamed")?, 3.1);

    // Zeroed start, then field-by-field mutation; valid at every step.
    let mut u2 = User::default();
    u2.set_age(21);
    u2.set_name("Ahmed")?;
    u2.set_gpa(3.9);

    // Heap residency, populated by hand.
    let u3 = Box::new(User::try_new(15, "Omar", 2.5)?);

    // Heap residency through the factory.
    let u4 = create_user(1, "Samir", 3.1)?;

    let lines = vec![
        u1.to_string(),
        u2.to_string(),
        u3.to_string(),
        u4.to_string(),
    ];

    // Explicit release of the heap records; ownership rules out a second one.
    drop(u3);
    drop(u4);

    Ok(lines)
}
