//! # User Record Lifecycle
//!
//! One small record type (`User`: age, name, gpa) carried through every
//! stage of its life: stack construction, default construction with
//! field-by-field mutation, heap construction through an owning factory,
//! and release.
//!
//! ## Patterns Covered
//!
//! 1. **Bounded text newtype** - names are capped at 49 bytes and rejected,
//!    never truncated or overflowed
//! 2. **Smart constructors** - `UserName::new` and `User::try_new` validate
//!    at the boundary; `User::new` cannot fail once the parts are valid
//! 3. **Stack vs heap residency** - plain values vs `Box<User>` owning
//!    handles
//! 4. **Release by ownership** - dropping the box frees the record exactly
//!    once; a double free or a use after free does not compile
//! 5. **Defect kept visible** - `factory::legacy::create_user` stamps fixed
//!    values instead of reading its arguments, next to the corrected
//!    `factory::create_user`
//!
//! ## Running
//!
//! ```bash
//! # The four canonical report lines
//! cargo run --bin lifecycle_demo
//!
//! # Sectioned walkthrough of every pattern
//! cargo run --bin ownership_tour
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the library error type
//! - `serde` / `serde_json` - record serialization with re-validation
//! - `colored` - section headers in the tour binary
//! - `proptest` - capacity and rendering properties
//! - `criterion` - construction-path benchmarks

pub mod error;
pub mod factory;
pub mod name;
pub mod report;
pub mod user;

pub use error::NameError;
pub use factory::create_user;
pub use name::UserName;
pub use report::lifecycle_lines;
pub use user::User;
