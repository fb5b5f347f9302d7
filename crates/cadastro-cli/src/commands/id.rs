//! Id command implementation.

pub fn run(count: u32) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..count {
        println!("{}", cadastro_documents::generate_id());
    }
    Ok(())
}
