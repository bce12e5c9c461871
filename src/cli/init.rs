use shelfql::config::{Config, SeedConfig, ServerConfig};
use shelfql::error::Result;
use shelfql::store::{save_seed, Author, Book, SeedData};

/// Run the init command to generate an example configuration and seed data
pub async fn run(seed_path: String, output: Option<String>) -> Result<()> {
    tracing::info!("🎨 Setting up example catalog...");

    // Step 1: Write the seed data file
    let seed = example_seed();
    save_seed(&seed, &seed_path)?;
    tracing::info!(
        "🌱 Wrote {} authors and {} books to {}",
        seed.authors.len(),
        seed.books.len(),
        seed_path
    );

    // Step 2: Generate configuration pointing at the seed file
    let config = Config {
        server: ServerConfig::default(),
        seed: Some(SeedConfig { path: seed_path }),
    };

    let wrote_to_file = if let Some(output_path) = output {
        shelfql::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated example configuration: {}", output_path);
        true
    } else {
        // Output to stdout
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        false
    };

    tracing::info!("");
    tracing::info!("💡 Next steps:");
    if wrote_to_file {
        tracing::info!("   1. Review the generated configuration file");
        tracing::info!("   2. Start server with 'cargo run -- serve --config <file>'");
    } else {
        tracing::info!(
            "   1. Save the configuration to a file: cargo run -- init --output shelfql.toml"
        );
        tracing::info!("   2. Start server with 'cargo run -- serve'");
    }

    Ok(())
}

/// The classic tutorial catalog: three authors, eight books
fn example_seed() -> SeedData {
    let authors = [
        (1, "J. K. Rowling"),
        (2, "J. R. R. Tolkien"),
        (3, "Brent Weeks"),
    ];

    let books = [
        (1, "Harry Potter and the Chamber of Secrets", 1),
        (2, "Harry Potter and the Prisoner of Azkaban", 1),
        (3, "Harry Potter and the Goblet of Fire", 1),
        (4, "The Fellowship of the Ring", 2),
        (5, "The Two Towers", 2),
        (6, "The Return of the King", 2),
        (7, "The Way of Shadows", 3),
        (8, "Beyond the Shadows", 3),
    ];

    SeedData {
        authors: authors
            .into_iter()
            .map(|(id, name)| Author {
                id,
                name: name.to_string(),
            })
            .collect(),
        books: books
            .into_iter()
            .map(|(id, name, author_id)| Book {
                id,
                name: name.to_string(),
                author_id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_seed_is_valid() {
        let seed = example_seed();

        assert_eq!(seed.authors.len(), 3);
        assert_eq!(seed.books.len(), 8);
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_example_seed_has_no_dangling_references() {
        let seed = example_seed();

        for book in &seed.books {
            assert!(
                seed.authors.iter().any(|a| a.id == book.author_id),
                "Book '{}' references missing author {}",
                book.name,
                book.author_id
            );
        }
    }
}
