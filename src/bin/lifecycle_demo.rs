// The faithful lifecycle program: four report lines, nothing else.
//
// Expected output:
//   Age: 1, Name: Mohamed, gpa: 3.100000
//   Age: 21, Name: Ahmed, gpa: 3.900000
//   Age: 15, Name: Omar, gpa: 2.500000
//   Age: 1, Name: Samir, gpa: 3.100000

use user_records::lifecycle_lines;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for line in lifecycle_lines()? {
        println!("{}", line);
    }
    Ok(())
}
