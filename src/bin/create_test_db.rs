use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use budget_tracker::{CategoryName, NewCategory, create_app_state};

/// A utility for creating a test database for the REST API server of budget_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// The categories to add to the test database: name, allocated amount and description.
const SAMPLE_CATEGORIES: [(&str, f64, &str); 4] = [
    ("Groceries", 500.0, "Food"),
    ("Rent", 1200.0, "Monthly rent"),
    ("Travel", 1000.0, ""),
    ("Health", 300.0, "Doctor and pharmacy"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let state = create_app_state(conn)?;

    println!("Creating test categories...");

    for (name, allocated_amount, description) in SAMPLE_CATEGORIES {
        let category = state.category_service.create(NewCategory {
            category_name: CategoryName::new(name)?,
            allocated_amount,
            description: description.to_owned(),
        })?;
        println!("Created category {} '{}'", category.id, category.category_name);
    }

    println!("Success!");

    Ok(())
}
