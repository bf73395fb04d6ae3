use crate::error::{DatabaseError, DatabaseResult};
use crate::repository::RosterRepository;
use log::{debug, info};
use pelada_core::{Pelada, Player};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const PELADAS_FILE: &str = "peladas.json";

/// Keeps `peladas.json` plus one `players_<pelada id>.json` per roster under a base directory
pub struct JsonFileRepository {
    base_dir: PathBuf,
}

impl JsonFileRepository {
    pub fn open(base_dir: impl Into<PathBuf>) -> DatabaseResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;

        info!("json repository at {}", base_dir.display());

        Ok(JsonFileRepository { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn players_path(&self, pelada_id: &str) -> DatabaseResult<PathBuf> {
        let is_safe = !pelada_id.is_empty()
            && pelada_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !is_safe {
            return Err(DatabaseError::InvalidPayload(format!("pelada id {:?}", pelada_id)));
        }

        Ok(self.base_dir.join(format!("players_{}.json", pelada_id)))
    }

    fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> DatabaseResult<T> {
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write to a sibling temp file first so a crash never leaves half a file behind
    fn write<T: Serialize + ?Sized>(path: &Path, value: &T) -> DatabaseResult<()> {
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp, path)?;

        debug!("wrote {}", path.display());

        Ok(())
    }
}

impl RosterRepository for JsonFileRepository {
    fn list_peladas(&self) -> DatabaseResult<Vec<Pelada>> {
        Self::read_or_default(&self.base_dir.join(PELADAS_FILE))
    }

    fn save_pelada(&mut self, pelada: &Pelada) -> DatabaseResult<()> {
        let mut peladas = self.list_peladas()?;

        match peladas.iter_mut().find(|p| p.id == pelada.id) {
            Some(existing) => *existing = pelada.clone(),
            None => peladas.push(pelada.clone()),
        }

        Self::write(&self.base_dir.join(PELADAS_FILE), &peladas)
    }

    fn delete_pelada(&mut self, pelada_id: &str) -> DatabaseResult<()> {
        let mut peladas = self.list_peladas()?;
        peladas.retain(|p| p.id != pelada_id);
        Self::write(&self.base_dir.join(PELADAS_FILE), &peladas)?;

        let players_path = self.players_path(pelada_id)?;
        if players_path.exists() {
            fs::remove_file(players_path)?;
        }

        Ok(())
    }

    fn load_players(&self, pelada_id: &str) -> DatabaseResult<Vec<Player>> {
        Self::read_or_default(&self.players_path(pelada_id)?)
    }

    fn save_players(&mut self, pelada_id: &str, players: &[Player]) -> DatabaseResult<()> {
        Self::write(&self.players_path(pelada_id)?, players)
    }
}
