mod file;
mod memory;

pub use file::*;
pub use memory::*;

use crate::error::DatabaseResult;
use pelada_core::{Pelada, Player};

/// Storage for peladas and their rosters. Passed explicitly to whoever needs it.
pub trait RosterRepository {
    fn list_peladas(&self) -> DatabaseResult<Vec<Pelada>>;

    /// Inserts or replaces by id
    fn save_pelada(&mut self, pelada: &Pelada) -> DatabaseResult<()>;

    /// Removes the pelada together with its roster
    fn delete_pelada(&mut self, pelada_id: &str) -> DatabaseResult<()>;

    /// Empty roster when nothing was saved yet
    fn load_players(&self, pelada_id: &str) -> DatabaseResult<Vec<Player>>;

    fn save_players(&mut self, pelada_id: &str, players: &[Player]) -> DatabaseResult<()>;

    fn find_pelada_by_slug(&self, slug: &str) -> DatabaseResult<Option<Pelada>> {
        Ok(self.list_peladas()?.into_iter().find(|p| p.slug() == slug))
    }
}
