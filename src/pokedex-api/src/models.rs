//! Model types for the Pokémon API
//!
//! Only the fields this workspace reads are declared; serde ignores the rest
//! of each (large) upstream document.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` pair, used everywhere upstream links another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An unnamed `{ url }` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Species record (`/pokemon-species/{id}/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Absent or null for species without an evolution family record
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

/// Evolution chain record (`/evolution-chain/{id}/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Number of direct successors of this node.
    pub fn branch_count(&self) -> usize {
        self.evolves_to.len()
    }
}

/// Sprite URLs of a Pokémon record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Pick the sprite for the given display flags.
    pub fn select(&self, shiny: bool, back: bool) -> Option<&str> {
        let sprite = match (shiny, back) {
            (true, true) => &self.back_shiny,
            (true, false) => &self.front_shiny,
            (false, true) => &self.back_default,
            (false, false) => &self.front_default,
        };
        sprite.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// Pokémon record (`/pokemon/{name-or-id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
}

impl Pokemon {
    /// Sprite for the given display flags; `None` when upstream has none.
    pub fn sprite(&self, shiny: bool, back: bool) -> Option<&str> {
        self.sprites.select(shiny, back)
    }

    /// Official artwork, falling back to the default front sprite.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    /// National dex number padded to three digits, e.g. `#004`.
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Ability labels with the first hyphen shown as a space.
    pub fn ability_names(&self) -> Vec<String> {
        self.abilities
            .iter()
            .map(|a| a.ability.name.replacen('-', " ", 1))
            .collect()
    }

    /// `(label, base value)` pairs in upstream order.
    pub fn stat_lines(&self) -> Vec<(String, u32)> {
        self.stats
            .iter()
            .map(|s| (format_stat_name(&s.stat.name), s.base_stat))
            .collect()
    }

    /// The first `limit` move labels.
    pub fn move_names(&self, limit: usize) -> Vec<String> {
        self.moves
            .iter()
            .take(limit)
            .map(|m| m.move_.name.replacen('-', " ", 1))
            .collect()
    }
}

/// Human-readable label for an upstream stat name.
pub fn format_stat_name(stat: &str) -> String {
    match stat {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Attack",
        "special-defense" => "Sp. Defense",
        "speed" => "Speed",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites() -> Sprites {
        Sprites {
            front_default: Some("front".into()),
            front_shiny: Some("front-shiny".into()),
            back_default: Some("back".into()),
            back_shiny: None,
            other: None,
        }
    }

    #[test]
    fn test_sprite_selection() {
        let s = sprites();
        assert_eq!(s.select(false, false), Some("front"));
        assert_eq!(s.select(true, false), Some("front-shiny"));
        assert_eq!(s.select(false, true), Some("back"));
        assert_eq!(s.select(true, true), None);
    }

    #[test]
    fn test_format_stat_name() {
        assert_eq!(format_stat_name("hp"), "HP");
        assert_eq!(format_stat_name("special-defense"), "Sp. Defense");
        assert_eq!(format_stat_name("accuracy"), "accuracy");
    }

    #[test]
    fn test_pokemon_parsing_and_helpers() {
        let pokemon: Pokemon = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "charmander",
            "base_experience": 62,
            "sprites": {
                "front_default": "https://img/4.png",
                "other": { "official-artwork": { "front_default": "https://art/4.png" } }
            },
            "types": [{ "slot": 1, "type": { "name": "fire", "url": "u" } }],
            "abilities": [
                { "ability": { "name": "solar-power", "url": "u" }, "is_hidden": true }
            ],
            "stats": [{ "base_stat": 39, "effort": 0, "stat": { "name": "hp", "url": "u" } }],
            "moves": [
                { "move": { "name": "mega-punch", "url": "u" } },
                { "move": { "name": "fire-punch", "url": "u" } }
            ]
        }))
        .unwrap();

        assert_eq!(pokemon.display_number(), "#004");
        assert_eq!(pokemon.artwork(), Some("https://art/4.png"));
        assert_eq!(pokemon.type_names(), vec!["fire"]);
        assert_eq!(pokemon.ability_names(), vec!["solar power"]);
        assert_eq!(pokemon.stat_lines(), vec![("HP".to_string(), 39)]);
        assert_eq!(pokemon.move_names(1), vec!["mega punch"]);
    }

    #[test]
    fn test_species_without_chain() {
        let species: Species =
            serde_json::from_str(r#"{"id": 1, "name": "x", "evolution_chain": null}"#).unwrap();
        assert!(species.evolution_chain.is_none());
    }
}
