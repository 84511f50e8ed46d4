use crate::{
    errors::{AppError, StoreAccessError},
    logging::logger::log_warning,
    shapes::{enums::ValidationPolicyEnum, player::PlayerEntry},
    validation::InputPolicy,
};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::{fs::create_dir_all, path::Path};
use uuid::Uuid;

/// One row as found on disk. Ages and positions stay raw strings so the
/// input policy decides what to do with malformed cells. Aliases accept
/// the headers of a hand-made spreadsheet export.
#[derive(Debug, Deserialize)]
struct RawPlayerRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "Nome", alias = "Nome/Apelido", alias = "Name", default)]
    name: String,
    #[serde(alias = "Idade", alias = "Age", default)]
    age: String,
    #[serde(alias = "Posição", alias = "Posicao", alias = "Position", default)]
    position: String,
}

#[derive(Debug, Serialize)]
struct PlayerRecord<'a> {
    id: Uuid,
    name: &'a str,
    age: u8,
    position: String,
}

/// Rows written without an id get one derived from their row and name, so
/// repeated reads of an untouched file agree on identities.
fn derived_id(row: usize, name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{}:{}", row, name).as_bytes())
}

fn map_record(
    row: usize,
    record: RawPlayerRecord,
    policy: &InputPolicy,
) -> Result<Option<PlayerEntry>, AppError> {
    let name = match policy.name(&record.name) {
        Ok(name) => name,
        Err(e) => {
            if policy.policy == ValidationPolicyEnum::Reject {
                return Err(AppError::Validation(e));
            }
            log_warning(&format!("roster row {} skipped: {}", row + 1, e));
            return Ok(None);
        }
    };
    let age = policy.age(&record.age)?;
    let position = policy.position(&record.position)?;
    for warning in [&age.warning, &position.warning].into_iter().flatten() {
        log_warning(&format!("roster row {} ({}): {}", row + 1, name, warning));
    }
    let id = record
        .id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
        .unwrap_or_else(|| derived_id(row, &name));
    Ok(Some(PlayerEntry {
        id,
        name,
        age: age.value,
        position: position.value,
    }))
}

/// A missing file is an empty roster.
pub(crate) fn read_roster(path: &Path, policy: &InputPolicy) -> Result<Vec<PlayerEntry>, AppError> {
    if !path.exists() {
        return Ok(vec![]);
    }
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Store(StoreAccessError::from(e)))?;
    let mut players = Vec::new();
    for (row, record) in reader.deserialize::<RawPlayerRecord>().enumerate() {
        let record = record.map_err(|e| AppError::Store(StoreAccessError::from(e)))?;
        if let Some(player) = map_record(row, record, policy)? {
            players.push(player);
        }
    }
    Ok(players)
}

pub(crate) fn write_roster(path: &Path, players: &[PlayerEntry]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).map_err(|e| AppError::Store(StoreAccessError::from(e)))?;
    }
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| AppError::Store(StoreAccessError::from(e)))?;
    for p in players {
        writer
            .serialize(PlayerRecord {
                id: p.id,
                name: &p.name,
                age: p.age,
                position: p.position.to_string(),
            })
            .map_err(|e| AppError::Store(StoreAccessError::from(e)))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::Store(StoreAccessError::from(e)))
}
