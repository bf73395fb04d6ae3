use crate::utils::IdUtils;
use crate::{Player, Team, TeamColors, TeamDraw, TeamNames};
use chrono::Utc;
use itertools::{Itertools, MinMaxResult};
use log::{debug, error};
use std::cmp::Reverse;
use std::num::NonZeroUsize;

pub struct DrawEngine;

/// Per-draw size limits derived from roster size and team count
#[derive(Debug, Clone, Copy)]
struct TeamCapacity {
    max_per_team: usize,
    /// how many teams may end up holding `max_per_team`; 0 means all of them
    oversized_slots: usize,
}

impl TeamCapacity {
    fn new(players_count: usize, team_count: usize) -> Self {
        TeamCapacity {
            max_per_team: players_count.div_ceil(team_count),
            oversized_slots: players_count % team_count,
        }
    }

    fn accepts(&self, team: &Team, full_teams: usize) -> bool {
        if team.len() >= self.max_per_team {
            return false;
        }

        self.oversized_slots == 0 || team.len() + 1 < self.max_per_team || full_teams < self.oversized_slots
    }
}

impl DrawEngine {
    /// Split `players` into `team_count` teams.
    ///
    /// Goalkeepers are spread first, strongest first, one per team in index order.
    /// Field players are then handed out strongest first, each to the lightest team
    /// that still has room. Ties on overall keep roster order.
    pub fn draw(players: &[Player], team_count: NonZeroUsize, event_id: &str) -> TeamDraw {
        let team_count = team_count.get();

        let mut teams: Vec<Team> = (0..team_count)
            .map(|idx| {
                Team::new(
                    IdUtils::generate(),
                    TeamNames::for_index(idx),
                    TeamColors::for_index(idx).to_string(),
                )
            })
            .collect();

        let (goalkeepers, field_players): (Vec<_>, Vec<_>) = players
            .iter()
            .enumerate()
            .partition(|(_, p)| p.is_goalkeeper());

        let goalkeepers = Self::strongest_first(goalkeepers);
        let field_players = Self::strongest_first(field_players);

        debug!(
            "drawing {} players ({} goalkeepers) into {} teams",
            players.len(),
            goalkeepers.len(),
            team_count
        );

        for (idx, goalkeeper) in goalkeepers.iter().enumerate() {
            teams[idx % team_count].add_player((*goalkeeper).clone());
        }

        let capacity = TeamCapacity::new(players.len(), team_count);

        for player in field_players {
            let team_idx = match Self::lightest_open_team(&teams, capacity) {
                Some(idx) => idx,
                None => {
                    error!(
                        "no team has room for {} (max {} per team), placing on lightest team",
                        player.id, capacity.max_per_team
                    );
                    Self::lightest_team(&teams)
                }
            };

            teams[team_idx].add_player(player.clone());
        }

        for team in teams.iter_mut() {
            team.refresh_average();
        }

        let diff = match teams.iter().map(|t| t.total_overall).minmax() {
            MinMaxResult::MinMax(min, max) => max - min,
            MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0,
        };

        let draw = TeamDraw {
            id: IdUtils::generate(),
            event_id: event_id.to_string(),
            diff,
            balance_score: TeamDraw::balance_score_for(diff),
            gk_coverage: goalkeepers.len() >= team_count,
            teams,
            created_at: Utc::now(),
        };

        debug!("draw {} done: diff {}, balance {}", draw.id, draw.diff, draw.balance_score);

        draw
    }

    /// Overall descending, roster index ascending on ties
    fn strongest_first(mut players: Vec<(usize, &Player)>) -> Vec<&Player> {
        players.sort_by_key(|(idx, p)| (Reverse(p.overall()), *idx));
        players.into_iter().map(|(_, p)| p).collect()
    }

    /// Lowest total, then fewest players, then lowest index
    fn lightest_open_team(teams: &[Team], capacity: TeamCapacity) -> Option<usize> {
        let full_teams = teams
            .iter()
            .filter(|t| t.len() >= capacity.max_per_team)
            .count();

        teams
            .iter()
            .enumerate()
            .filter(|(_, t)| capacity.accepts(t, full_teams))
            .min_by_key(|(idx, t)| (t.total_overall, t.len(), *idx))
            .map(|(idx, _)| idx)
    }

    fn lightest_team(teams: &[Team]) -> usize {
        teams
            .iter()
            .enumerate()
            .min_by_key(|(idx, t)| (t.total_overall, t.len(), *idx))
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }
}
