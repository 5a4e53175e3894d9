use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::macros::datetime;

use salesboard::{Sale, initialize_db, insert_sale};

/// A utility for creating a seeded test database for the sales dashboard
/// server.
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

    initialize_db(&conn)?;

    println!("Seeding sale records...");

    for sale in sample_sales() {
        insert_sale(&sale, &conn)?;
    }

    println!("Success!");

    Ok(())
}

fn sample_sales() -> Vec<Sale> {
    vec![
        Sale {
            id: 1,
            title: "Noise cancelling headphones".to_string(),
            description: "Over-ear, 30 hour battery life".to_string(),
            price: 329.99,
            category: "electronics".to_string(),
            image: "https://example.com/images/headphones.jpg".to_string(),
            sold: true,
            date_of_sale: datetime!(2021-11-27 20:29:54 UTC),
        },
        Sale {
            id: 2,
            title: "Mens cotton jacket".to_string(),
            description: "Great for spring and autumn".to_string(),
            price: 55.99,
            category: "men's clothing".to_string(),
            image: "https://example.com/images/jacket.jpg".to_string(),
            sold: false,
            date_of_sale: datetime!(2021-11-09 10:04:11 UTC),
        },
        Sale {
            id: 3,
            title: "Solid state drive 1TB".to_string(),
            description: "NVMe, reads up to 3500MB/s".to_string(),
            price: 109.0,
            category: "electronics".to_string(),
            image: "https://example.com/images/ssd.jpg".to_string(),
            sold: true,
            date_of_sale: datetime!(2022-03-14 08:45:00 UTC),
        },
        Sale {
            id: 4,
            title: "Womens rain coat".to_string(),
            description: "Waterproof shell with hood".to_string(),
            price: 39.99,
            category: "women's clothing".to_string(),
            image: "https://example.com/images/raincoat.jpg".to_string(),
            sold: true,
            date_of_sale: datetime!(2022-03-02 17:20:30 UTC),
        },
        Sale {
            id: 5,
            title: "Gold plated bracelet".to_string(),
            description: "Hypoallergenic, 18cm".to_string(),
            price: 695.0,
            category: "jewelery".to_string(),
            image: "https://example.com/images/bracelet.jpg".to_string(),
            sold: false,
            date_of_sale: datetime!(2022-03-21 12:00:00 UTC),
        },
        Sale {
            id: 6,
            title: "Gaming monitor 27\"".to_string(),
            description: "144Hz, 1ms response time".to_string(),
            price: 999.99,
            category: "electronics".to_string(),
            image: "https://example.com/images/monitor.jpg".to_string(),
            sold: true,
            date_of_sale: datetime!(2022-06-30 21:10:05 UTC),
        },
        Sale {
            id: 7,
            title: "Canvas backpack".to_string(),
            description: "Fits laptops up to 15 inches".to_string(),
            price: 64.5,
            category: "bags".to_string(),
            image: "https://example.com/images/backpack.jpg".to_string(),
            sold: false,
            date_of_sale: datetime!(2022-06-12 09:30:00 UTC),
        },
        Sale {
            id: 8,
            title: "Stainless steel watch".to_string(),
            description: "Sapphire glass, 10 bar water resistance".to_string(),
            price: 243.75,
            category: "jewelery".to_string(),
            image: "https://example.com/images/watch.jpg".to_string(),
            sold: true,
            date_of_sale: datetime!(2021-12-24 15:55:42 UTC),
        },
    ]
}
