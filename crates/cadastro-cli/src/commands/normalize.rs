//! Normalize command implementation.

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", cadastro_documents::normalize(&input));
    Ok(())
}
