// Card fixtures shared by the unit test modules.

use crate::catalog::{CanonicalCard, CardType, Craft, Rarity};

pub fn card(id: u32) -> CanonicalCard {
    card_of_type(id, CardType::Follower)
}

pub fn card_of_type(id: u32, card_type: CardType) -> CanonicalCard {
    CanonicalCard {
        id,
        name: format!("Test Card {id}"),
        cost: 3,
        craft: Craft::Runecraft,
        rarity: Rarity::Gold,
        card_type,
        card_trait: "Mage".to_string(),
        expansion: "Classic".to_string(),
        base_effect: "Fanfare: Draw a card.".to_string(),
        base_flavor: "A card for testing.".to_string(),
        rotation: true,
        base_attack: 3,
        base_defense: 2,
        evo_attack: 5,
        evo_defense: 4,
        evo_effect: "Evolve: Draw a card.".to_string(),
        evo_flavor: "An evolved card for testing.".to_string(),
        tokens: vec![],
        alts: vec![],
        restricted_count: 3,
        restricted_count_main: 3,
        restricted_count_sub: 3,
        resurgent_card: None,
        original_card: None,
        artist: "Test Artist".to_string(),
    }
}
