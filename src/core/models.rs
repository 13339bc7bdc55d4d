use serde::{Deserialize, Serialize};

// Catalog models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprite_url: String,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl PokemonSummary {
    /// Type names ordered by slot.
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.name.as_str()).collect()
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(type_name))
    }
}

/// One page of catalog results as returned by a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPage {
    pub items: Vec<PokemonSummary>,
    pub total_count: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

// Query models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFilter {
    pub search: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl PokemonFilter {
    /// Search term with surrounding whitespace removed; blank terms count as none.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn matches(&self, pokemon: &PokemonSummary) -> bool {
        let search_ok = match self.search_term() {
            Some(term) => pokemon
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        let types_ok = self.types.is_empty() || self.types.iter().any(|t| pokemon.has_type(t));
        search_ok && types_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: i64,
    pub page_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(id: u32, name: &str, types: &[&str]) -> PokemonSummary {
        PokemonSummary {
            id,
            name: name.to_string(),
            sprite_url: String::new(),
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| PokemonType {
                    name: t.to_string(),
                    slot: (i + 1) as u8,
                })
                .collect(),
        }
    }

    #[test]
    fn test_deserialize_summary() {
        let json = r#"{"id":25,"name":"pikachu","spriteUrl":"https://example.com/25.png","types":[{"name":"electric","slot":1}]}"#;
        let summary: PokemonSummary = serde_json::from_str(json).expect("parse summary");
        assert_eq!(summary.id, 25);
        assert_eq!(summary.sprite_url, "https://example.com/25.png");
        assert_eq!(summary.type_names(), vec!["electric"]);
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let mut bulbasaur = pokemon(1, "bulbasaur", &["grass", "poison"]);
        bulbasaur.types.reverse();
        assert_eq!(bulbasaur.type_names(), vec!["grass", "poison"]);
    }

    #[test]
    fn test_filter_matches_search_case_insensitively() {
        let filter = PokemonFilter {
            search: Some("  PIKA ".to_string()),
            types: Vec::new(),
        };
        assert!(filter.matches(&pokemon(25, "pikachu", &["electric"])));
        assert!(!filter.matches(&pokemon(26, "raichu", &["electric"])));
    }

    #[test]
    fn test_filter_matches_any_listed_type() {
        let filter = PokemonFilter {
            search: None,
            types: vec!["fire".to_string(), "water".to_string()],
        };
        assert!(filter.matches(&pokemon(4, "charmander", &["fire"])));
        assert!(filter.matches(&pokemon(7, "squirtle", &["water"])));
        assert!(!filter.matches(&pokemon(1, "bulbasaur", &["grass", "poison"])));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let filter = PokemonFilter {
            search: Some("   ".to_string()),
            types: Vec::new(),
        };
        assert_eq!(filter.search_term(), None);
        assert!(filter.matches(&pokemon(1, "bulbasaur", &["grass"])));
    }
}
