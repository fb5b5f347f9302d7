use cadastro_documents::{format_document, inspect};

fn main() {
    let typed = "11222333000181";

    for end in 1..=typed.len() {
        println!("{:<14} -> {}", &typed[..end], format_document(&typed[..end]));
    }

    let report = inspect(typed);
    match report.reason {
        None => println!("{} accepted as {:?}", report.formatted, report.kind),
        Some(reason) => {
            eprintln!("rejected: {}", reason);
            std::process::exit(1);
        }
    }
}
