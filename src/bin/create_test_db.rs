use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use ledger_rs::{
    initialize_db,
    stores::{TransactionStore, sqlite::SQLiteTransactionStore},
    transaction::{EXPENSE, INCOME, NewTransaction},
};

/// A utility for creating a test database for the REST API server of ledger_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    let inserted = store.create_many(&sample_transactions())?;

    println!("Inserted {inserted} transactions. Success!");

    Ok(())
}

fn sample_transactions() -> Vec<NewTransaction> {
    vec![
        NewTransaction::build(INCOME, "salary", 4200.0, "2024-01-01").description("January pay"),
        NewTransaction::build(EXPENSE, "rent", 1600.0, "2024-01-02"),
        NewTransaction::build(EXPENSE, "food", 84.35, "2024-01-05").description("groceries"),
        NewTransaction::build(EXPENSE, "transport", 40.0, "2024-01-08"),
        NewTransaction::build(EXPENSE, "food", 23.5, "2024-01-12").description("lunch"),
        NewTransaction::build(INCOME, "freelance", 650.0, "2024-01-19"),
        NewTransaction::build(EXPENSE, "utilities", 132.8, "2024-01-22"),
        NewTransaction::build(EXPENSE, "food", 97.1, "2024-01-26").description("groceries"),
    ]
}
