//! Pokémon dataset loading: a JSON file or the builtin Kanto starter set.

use super::Result;
use crate::core::models::{PokemonSummary, PokemonType};
use crate::error::StorageError;
use std::fs;
use std::path::Path;

const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

const BUILTIN: &[(u32, &str, &[&str])] = &[
    (1, "bulbasaur", &["grass", "poison"]),
    (2, "ivysaur", &["grass", "poison"]),
    (3, "venusaur", &["grass", "poison"]),
    (4, "charmander", &["fire"]),
    (5, "charmeleon", &["fire"]),
    (6, "charizard", &["fire", "flying"]),
    (7, "squirtle", &["water"]),
    (8, "wartortle", &["water"]),
    (9, "blastoise", &["water"]),
    (10, "caterpie", &["bug"]),
    (11, "metapod", &["bug"]),
    (12, "butterfree", &["bug", "flying"]),
    (13, "weedle", &["bug", "poison"]),
    (14, "kakuna", &["bug", "poison"]),
    (15, "beedrill", &["bug", "poison"]),
    (16, "pidgey", &["normal", "flying"]),
    (17, "pidgeotto", &["normal", "flying"]),
    (18, "pidgeot", &["normal", "flying"]),
    (19, "rattata", &["normal"]),
    (20, "raticate", &["normal"]),
    (21, "spearow", &["normal", "flying"]),
    (22, "fearow", &["normal", "flying"]),
    (23, "ekans", &["poison"]),
    (24, "arbok", &["poison"]),
    (25, "pikachu", &["electric"]),
    (26, "raichu", &["electric"]),
    (27, "sandshrew", &["ground"]),
    (28, "sandslash", &["ground"]),
    (29, "nidoran-f", &["poison"]),
    (30, "nidorina", &["poison"]),
    (31, "nidoqueen", &["poison", "ground"]),
    (32, "nidoran-m", &["poison"]),
    (33, "nidorino", &["poison"]),
    (34, "nidoking", &["poison", "ground"]),
    (35, "clefairy", &["fairy"]),
    (36, "clefable", &["fairy"]),
    (37, "vulpix", &["fire"]),
    (38, "ninetales", &["fire"]),
    (39, "jigglypuff", &["normal", "fairy"]),
    (40, "wigglytuff", &["normal", "fairy"]),
    (41, "zubat", &["poison", "flying"]),
    (42, "golbat", &["poison", "flying"]),
    (43, "oddish", &["grass", "poison"]),
    (44, "gloom", &["grass", "poison"]),
    (45, "vileplume", &["grass", "poison"]),
    (46, "paras", &["bug", "grass"]),
    (47, "parasect", &["bug", "grass"]),
    (48, "venonat", &["bug", "poison"]),
    (49, "venomoth", &["bug", "poison"]),
    (50, "diglett", &["ground"]),
    (51, "dugtrio", &["ground"]),
];

pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_BASE_URL, id)
}

/// The dataset shipped with the binary.
pub fn builtin_pokemon() -> Vec<PokemonSummary> {
    BUILTIN
        .iter()
        .map(|(id, name, types)| PokemonSummary {
            id: *id,
            name: name.to_string(),
            sprite_url: sprite_url(*id),
            types: types
                .iter()
                .zip(1u8..)
                .map(|(t, slot)| PokemonType {
                    name: t.to_string(),
                    slot,
                })
                .collect(),
        })
        .collect()
}

/// Read a JSON array of Pokémon summaries.
pub fn load_dataset(path: &Path) -> Result<Vec<PokemonSummary>> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let pokemon: Vec<PokemonSummary> =
        serde_json::from_str(&content).map_err(|e| StorageError::DatasetParseError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

    log::debug!("loaded {} pokemon from {}", pokemon.len(), path.display());
    Ok(pokemon)
}

/// `path` when given, the builtin set otherwise.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Vec<PokemonSummary>> {
    match path {
        Some(path) => load_dataset(path),
        None => Ok(builtin_pokemon()),
    }
}
