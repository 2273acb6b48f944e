//! Card persistence: maps harvested records onto the `card_set` / `card` schema.
//!
//! Set names resolve to `card_set` rows (inserted on first sight). Cards with
//! an unknown set are stored with a NULL set reference. `card_type` and
//! `talent` are not harvested and stay NULL.

use std::collections::HashMap;

use sqlx::{Sqlite, Transaction};
use tracing::{debug, info, instrument};

use crate::catalog::CardRecord;
use crate::db::{Database, DbError};

/// Writes card records to the database.
#[derive(Debug, Clone)]
pub struct CardStore {
    db: Database,
}

impl CardStore {
    /// Creates a store over `db`.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Saves `records` in a single transaction and returns the number of
    /// cards written.
    ///
    /// Records are appended; nothing is deduplicated across runs or sets.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if any insert fails; the transaction is rolled back.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn save(&self, records: &[CardRecord]) -> Result<u64, DbError> {
        let mut tx = self.db.pool().begin().await?;
        let mut set_ids: HashMap<&str, i64> = HashMap::new();
        let mut written = 0u64;

        for record in records {
            let set_id = match record.set_name.as_deref() {
                Some(name) => {
                    if let Some(id) = set_ids.get(name) {
                        Some(*id)
                    } else {
                        let id = set_id_for(&mut tx, name).await?;
                        set_ids.insert(name, id);
                        Some(id)
                    }
                }
                None => None,
            };

            sqlx::query(
                "INSERT INTO card \
                 (collector_number, name, card_set_id, pitch_value, color, printing_technique, notes) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&record.collector_number)
            .bind(&record.display_name)
            .bind(set_id)
            .bind(record.pitch_value)
            .bind(record.color.as_str())
            .bind(&record.printing_technique)
            .bind(&record.notes)
            .execute(&mut *tx)
            .await?;
            written += 1;
        }

        tx.commit().await?;
        info!(cards = written, sets = set_ids.len(), "saved card records");
        Ok(written)
    }

    /// Returns the number of stored cards.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn count_cards(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM card")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }

    /// Returns the number of stored sets.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn count_sets(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM card_set")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }
}

/// Returns the id of the `card_set` row named `name`, inserting it if needed.
async fn set_id_for(tx: &mut Transaction<'_, Sqlite>, name: &str) -> Result<i64, DbError> {
    sqlx::query("INSERT INTO card_set (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(&mut **tx)
        .await?;

    let (id,): (i64,) = sqlx::query_as("SELECT id FROM card_set WHERE name = ?")
        .bind(name)
        .fetch_one(&mut **tx)
        .await?;
    debug!(set = name, id, "resolved card set");
    Ok(id)
}
