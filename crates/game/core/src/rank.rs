//! Card ranks.

use serde::{Deserialize, Serialize};

/// Rank printed on a card.
///
/// The server speaks Dutch on the wire (`Koning`, `Koningin`, `Boer`, `Joker`);
/// English names are accepted on input and used for display.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Rank {
    #[serde(rename = "Koning", alias = "King")]
    King,
    #[serde(rename = "Koningin", alias = "Queen")]
    Queen,
    #[serde(rename = "Boer", alias = "Jack")]
    Jack,
    /// Wildcard: matches any claimed rank when a claim is checked.
    #[serde(rename = "Joker")]
    Joker,
}

impl Rank {
    /// Name the server uses for this rank.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Rank::King => "Koning",
            Rank::Queen => "Koningin",
            Rank::Jack => "Boer",
            Rank::Joker => "Joker",
        }
    }
}
