use academy::{
    domain::{Announcement, GalleryEvent, Instructor},
    repository::{CollectionKey, CollectionStore, SqliteCollectionStore},
    service::{persist_collection, SeedData},
};
use clap::{Parser, Subcommand};
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed", about = "Manage the academy's persisted content collections")]
struct Cli {
    /// Database holding the collections
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://academy.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Persist the built-in sample collections
    Write,
    /// Replace one collection with a JSON array read from a file
    Import {
        /// announcements, gallery or instructors
        #[arg(long)]
        collection: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Remove persisted collections so the site serves sample data again
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let store = SqliteCollectionStore::new(db_pool);

    match cli.command {
        Command::Write => {
            let seed = SeedData::generate();
            persist_collection(&store, CollectionKey::Announcements, &seed.announcements).await?;
            println!("  ✅ {} announcements", seed.announcements.len());
            persist_collection(&store, CollectionKey::Gallery, &seed.gallery).await?;
            println!("  ✅ {} gallery events", seed.gallery.len());
            persist_collection(&store, CollectionKey::Instructors, &seed.instructors).await?;
            println!("  ✅ {} instructors", seed.instructors.len());
        }
        Command::Import { collection, file } => {
            let key = CollectionKey::parse(&collection)
                .ok_or_else(|| anyhow::anyhow!("unknown collection '{}'", collection))?;
            let raw = tokio::fs::read_to_string(&file).await?;

            // Refuse anything the site would not be able to read back
            let count = match key {
                CollectionKey::Announcements => serde_json::from_str::<Vec<Announcement>>(&raw)?.len(),
                CollectionKey::Gallery => serde_json::from_str::<Vec<GalleryEvent>>(&raw)?.len(),
                CollectionKey::Instructors => serde_json::from_str::<Vec<Instructor>>(&raw)?.len(),
            };

            store.put(key, &raw).await?;
            println!("  ✅ Imported {} {} from {}", count, key, file.display());
        }
        Command::Clear => {
            let stored = store.keys().await?;
            for key in &stored {
                store.remove(*key).await?;
            }
            println!("  🧹 Removed {} collections", stored.len());
        }
    }

    println!("\n✨ Done.");
    Ok(())
}
