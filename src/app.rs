use {
    crate::{config::Config, db::ReadingsStore, errors::AppError, models::Reading},
    mongodb::bson::{Bson, Document},
    std::io::Write,
};

/// Everything one run needs: where to connect and what to write.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub device: String,
    pub temp: i32,
    pub limit: i64,
}

/// Connects, inserts one reading, prints up to `limit` documents.
///
/// Once the store is open it is closed on every path, and the error of the
/// sequence (if any) is returned after the close.
pub async fn run(settings: &Settings, out: &mut impl Write) -> Result<(), AppError> {
    let store = ReadingsStore::connect(&settings.config).await?;

    let outcome = exercise(&store, settings, out).await;
    store.close().await;

    outcome
}

async fn exercise(
    store: &ReadingsStore,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let reading = Reading::new(settings.device.as_str(), settings.temp);
    match store.insert_reading(&reading).await? {
        Some(id) => log::info!("Inserted reading {id} from {}", reading.device),
        None => log::info!("Inserted reading from {}", reading.device),
    }

    let documents = store.find_readings(settings.limit).await?;
    log::info!("Fetched {} document(s)", documents.len());

    write_documents(&documents, out)
}

/// Writes the documents as one pretty-printed JSON array of relaxed
/// Extended JSON values.
pub fn write_documents(documents: &[Document], out: &mut impl Write) -> Result<(), AppError> {
    let values: Vec<serde_json::Value> = documents
        .iter()
        .cloned()
        .map(|document| Bson::Document(document).into_relaxed_extjson())
        .collect();

    serde_json::to_writer_pretty(&mut *out, &values).map_err(AppError::Render)?;
    writeln!(out).map_err(AppError::Output)
}
