// Remote catalog — typed card model and the two-call fetcher.

pub mod fetch;
pub mod model;

pub use fetch::CatalogClient;
pub use model::{CanonicalCard, CardType, Craft, Rarity};
