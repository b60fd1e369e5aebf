use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Follower,
    Amulet,
    Spell,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Follower => "Follower",
            CardType::Amulet => "Amulet",
            CardType::Spell => "Spell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Bronze => "Bronze",
            Rarity::Silver => "Silver",
            Rarity::Gold => "Gold",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Craft {
    Bloodcraft,
    Dragoncraft,
    Forestcraft,
    Havencraft,
    Neutral,
    Portalcraft,
    Runecraft,
    Shadowcraft,
    Swordcraft,
}

impl Craft {
    pub fn as_str(&self) -> &'static str {
        match self {
            Craft::Bloodcraft => "Bloodcraft",
            Craft::Dragoncraft => "Dragoncraft",
            Craft::Forestcraft => "Forestcraft",
            Craft::Havencraft => "Havencraft",
            Craft::Neutral => "Neutral",
            Craft::Portalcraft => "Portalcraft",
            Craft::Runecraft => "Runecraft",
            Craft::Shadowcraft => "Shadowcraft",
            Craft::Swordcraft => "Swordcraft",
        }
    }
}

/// One entry of the remote catalog. Field renames mirror the svgdb wire names;
/// unknown fields are rejected so schema drift surfaces as a fetch failure
/// instead of silently dropped data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalCard {
    #[serde(rename = "id_")]
    pub id: u32,
    #[serde(rename = "name_")]
    pub name: String,
    #[serde(rename = "pp_")]
    pub cost: i32,
    #[serde(rename = "craft_")]
    pub craft: Craft,
    #[serde(rename = "rarity_")]
    pub rarity: Rarity,
    #[serde(rename = "type_")]
    pub card_type: CardType,
    #[serde(rename = "trait_")]
    pub card_trait: String,
    #[serde(rename = "expansion_")]
    pub expansion: String,
    #[serde(rename = "baseEffect_")]
    pub base_effect: String,
    #[serde(rename = "baseFlair_")]
    pub base_flavor: String,
    #[serde(rename = "rotation_")]
    pub rotation: bool,
    #[serde(rename = "baseAtk_")]
    pub base_attack: i32,
    #[serde(rename = "baseDef_")]
    pub base_defense: i32,
    #[serde(rename = "evoAtk_")]
    pub evo_attack: i32,
    #[serde(rename = "evoDef_")]
    pub evo_defense: i32,
    #[serde(rename = "evoEffect_")]
    pub evo_effect: String,
    #[serde(rename = "evoFlair_")]
    pub evo_flavor: String,
    #[serde(rename = "tokens_")]
    pub tokens: Vec<u32>,
    #[serde(rename = "alts_")]
    pub alts: Vec<u32>,
    pub restricted_count: i32,
    pub restricted_count_main: i32,
    pub restricted_count_sub: i32,
    #[serde(default)]
    pub resurgent_card: Option<bool>,
    #[serde(default)]
    pub original_card: Option<u32>,
    #[serde(default = "default_artist")]
    pub artist: String,
}

fn default_artist() -> String {
    "Shadowverse".to_string()
}

impl CanonicalCard {
    /// Only Followers have an evolved rendering.
    pub fn can_evolve(&self) -> bool {
        self.card_type == CardType::Follower
    }
}
