// Variant expansion — one catalog entry becomes 1 to 4 downloadable renderings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::CanonicalCard;

/// One downloadable rendering of a card. Identity is `(id, evolved, censored)`;
/// staleness detection compares every field, so an upstream edit to any card
/// attribute makes the stored variant unequal to the freshly expanded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardVariant {
    pub card: CanonicalCard,
    #[serde(default)]
    pub evolved: bool,
    #[serde(default)]
    pub censored: bool,
}

impl CardVariant {
    pub fn key(&self) -> (u32, bool, bool) {
        (self.card.id, self.evolved, self.censored)
    }
}

/// Expand one card into the variants that should exist locally.
///
/// Emission order is fixed: base, evolved, censored, evolved+censored, skipping
/// any that do not apply. Pure; the card is cloned into each variant.
pub fn expand(card: &CanonicalCard, censored_ids: &HashSet<u32>) -> Vec<CardVariant> {
    let can_evolve = card.can_evolve();

    let mut variants = vec![CardVariant {
        card: card.clone(),
        evolved: false,
        censored: false,
    }];
    if can_evolve {
        variants.push(CardVariant {
            card: card.clone(),
            evolved: true,
            censored: false,
        });
    }
    if censored_ids.contains(&card.id) {
        variants.push(CardVariant {
            card: card.clone(),
            evolved: false,
            censored: true,
        });
        if can_evolve {
            variants.push(CardVariant {
                card: card.clone(),
                evolved: true,
                censored: true,
            });
        }
    }
    variants
}
