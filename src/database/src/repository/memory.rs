use crate::error::DatabaseResult;
use crate::repository::RosterRepository;
use pelada_core::{Pelada, Player};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    peladas: Vec<Pelada>,
    players: HashMap<String, Vec<Player>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterRepository for InMemoryRepository {
    fn list_peladas(&self) -> DatabaseResult<Vec<Pelada>> {
        Ok(self.peladas.clone())
    }

    fn save_pelada(&mut self, pelada: &Pelada) -> DatabaseResult<()> {
        match self.peladas.iter_mut().find(|p| p.id == pelada.id) {
            Some(existing) => *existing = pelada.clone(),
            None => self.peladas.push(pelada.clone()),
        }

        Ok(())
    }

    fn delete_pelada(&mut self, pelada_id: &str) -> DatabaseResult<()> {
        self.peladas.retain(|p| p.id != pelada_id);
        self.players.remove(pelada_id);

        Ok(())
    }

    fn load_players(&self, pelada_id: &str) -> DatabaseResult<Vec<Player>> {
        Ok(self.players.get(pelada_id).cloned().unwrap_or_default())
    }

    fn save_players(&mut self, pelada_id: &str, players: &[Player]) -> DatabaseResult<()> {
        self.players.insert(pelada_id.to_string(), players.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut repository = InMemoryRepository::new();
        let pelada = Pelada::new("Quinta Fut".to_string(), "owner".to_string());
        let players = vec![Player::new("1".to_string(), "A".to_string(), "A".to_string())];

        repository.save_pelada(&pelada).unwrap();
        repository.save_players(&pelada.id, &players).unwrap();

        assert_eq!(repository.list_peladas().unwrap(), vec![pelada.clone()]);
        assert_eq!(repository.load_players(&pelada.id).unwrap(), players);
        assert!(repository.load_players("other").unwrap().is_empty());
    }

    #[test]
    fn test_save_pelada_replaces_by_id() {
        let mut repository = InMemoryRepository::new();
        let mut pelada = Pelada::new("Quinta Fut".to_string(), "owner".to_string());
        repository.save_pelada(&pelada).unwrap();

        pelada.name = "Sexta Fut".to_string();
        repository.save_pelada(&pelada).unwrap();

        let peladas = repository.list_peladas().unwrap();
        assert_eq!(peladas.len(), 1);
        assert_eq!(peladas[0].name, "Sexta Fut");
    }

    #[test]
    fn test_delete_removes_roster() {
        let mut repository = InMemoryRepository::new();
        let pelada = Pelada::new("Quinta Fut".to_string(), "owner".to_string());
        repository.save_pelada(&pelada).unwrap();
        repository
            .save_players(&pelada.id, &[Player::new("1".to_string(), "A".to_string(), "A".to_string())])
            .unwrap();

        repository.delete_pelada(&pelada.id).unwrap();

        assert!(repository.list_peladas().unwrap().is_empty());
        assert!(repository.load_players(&pelada.id).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_slug() {
        let mut repository = InMemoryRepository::new();
        let pelada = Pelada::new("Racha do Zé".to_string(), "owner".to_string());
        repository.save_pelada(&pelada).unwrap();

        assert_eq!(repository.find_pelada_by_slug("racha-do-ze").unwrap(), Some(pelada));
        assert_eq!(repository.find_pelada_by_slug("nope").unwrap(), None);
    }
}
