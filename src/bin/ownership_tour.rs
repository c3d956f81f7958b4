// Sectioned walkthrough of the User record lifecycle.
//
// Run with: cargo run --bin ownership_tour

use colored::*;

use user_records::factory::legacy;
use user_records::{create_user, NameError, User, UserName};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=== User Record Lifecycle Tour ===".bold());

    // Stack residency
    println!("\n{}", "--- Stack residency ---".cyan().bold());
    let u1 = User::new(1, UserName::new("Mohamed")?, 3.1);
    println!("{}", u1);
    println!("u1 is owned by this frame and dropped with it; no explicit release.");

    // Default construction, then field-by-field mutation
    println!("\n{}", "--- Default + mutation ---".cyan().bold());
    let mut u2 = User::default();
    println!("fresh default: {}", u2);
    u2.set_age(21);
    u2.set_name("Ahmed")?;
    u2.set_gpa(3.9);
    println!("after setters: {}", u2);

    // Heap residency and explicit release
    println!("\n{}", "--- Heap residency ---".cyan().bold());
    let u3 = Box::new(User::try_new(15, "Omar", 2.5)?);
    println!("{} (boxed: pointer on the stack, record on the heap)", u3);
    drop(u3); // single, explicit release; the handle is consumed
    // println!("{}", u3); // Error! u3 was moved into drop

    // Name capacity
    println!("\n{}", "--- Name capacity ---".cyan().bold());
    match UserName::new("x".repeat(50)) {
        Ok(_) => println!("unexpected: oversized name accepted"),
        Err(NameError::TooLong { len, max }) => {
            println!(
                "{} {} bytes exceed the {} byte cap",
                "rejected:".red().bold(),
                len,
                max
            );
        }
    }

    // Factory: corrected vs legacy
    println!("\n{}", "--- Factory: corrected vs legacy ---".cyan().bold());
    let fixed = create_user(1, "Samir", 3.1)?;
    let stamped = legacy::create_user(1, "Samir", 3.1);
    println!("{} {}", "corrected:".green().bold(), fixed);
    println!("{} {} (arguments ignored)", "legacy:".red().bold(), stamped);

    // Serde round-trip
    println!("\n{}", "--- Serde round-trip ---".cyan().bold());
    let json = serde_json::to_string(&*fixed)?;
    println!("serialized:   {}", json);
    let back: User = serde_json::from_str(&json)?;
    println!("deserialized: {}", back);

    println!("\n{}", "Tour complete".green().bold());
    Ok(())
}
