use database::{
    DemoRosterLoader, JsonFileRepository, RosterLoader, RosterRepository, ShareCodec, SharePayload,
};
use chrono::Utc;
use env_logger::Env;
use log::{info, warn};
use pelada_core::utils::{StringUtils, TimeEstimation};
use pelada_core::{Event, Pelada, Roster};
use std::env;
use std::path::Path;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_TEAMS_COUNT: usize = 2;
const DEFAULT_PELADA_NAME: &str = "Pelada Demo";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let data_dir = env::var("PELADA_DATA_DIR").unwrap_or_else(|_| String::from(DEFAULT_DATA_DIR));
    let pelada_name = env::var("PELADA_NAME").unwrap_or_else(|_| String::from(DEFAULT_PELADA_NAME));
    let teams_count = match env::var("PELADA_TEAMS") {
        Ok(value) => value.parse::<usize>()?,
        Err(_) => DEFAULT_TEAMS_COUNT,
    };

    let (players, estimated) = TimeEstimation::estimate(|| match env::args().nth(1) {
        Some(path) => RosterLoader::from_file(Path::new(&path)),
        None => DemoRosterLoader::load(),
    });
    let players = players?;

    info!("roster loaded: {} players, {} ms", players.len(), estimated);

    let mut repository = JsonFileRepository::open(data_dir)?;

    let pelada = match repository.find_pelada_by_slug(&StringUtils::slug(&pelada_name))? {
        Some(existing) => existing,
        None => Pelada::new(pelada_name, String::from("local")),
    };

    repository.save_pelada(&pelada)?;
    repository.save_players(&pelada.id, &players)?;

    let mut roster = Roster::from_players(pelada.id.clone(), players);

    let mut event = Event::new(
        pelada.name.clone(),
        Utc::now(),
        String::new(),
        format!("{} times", teams_count),
        teams_count,
    );

    for player in roster.players() {
        event.confirm(&player.id)?;
    }

    let (draw, estimated) = TimeEstimation::estimate(|| event.draw(&roster));
    let draw = roster.set_current_draw(draw?);

    info!(
        "{}: {} teams drawn in {} ms, diff {}, balance {}%",
        pelada,
        draw.teams.len(),
        estimated,
        draw.diff,
        draw.balance_score
    );

    for team in &draw.teams {
        info!("{}", team);
    }

    if draw.is_perfectly_balanced() {
        info!("perfect balance, every team has the same total");
    }

    if !draw.gk_coverage {
        warn!("not every team got a goalkeeper");
    }

    let payload = SharePayload::new(
        pelada.name.clone(),
        roster.players().to_vec(),
        roster.current_draw().cloned(),
    );

    println!("#{}", ShareCodec::encode(&payload)?);

    Ok(())
}
