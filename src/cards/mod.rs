//! Card model: suits, ids, classification and the dungeon deck.
//!
//! - `card`: `Suit`, `Card`, `CardId`
//! - `kind`: `CardKind` and `classify`
//! - `deck`: deck construction, shuffle, room dealing

pub mod card;
pub mod kind;
pub mod deck;

pub use card::{Card, CardId, Suit, MAX_RANK, MAX_RED_RANK, MIN_RANK};
pub use kind::{classify, CardKind};
pub use deck::{create_deck, deal_room, shuffle, Room, DECK_SIZE, ROOM_SIZE};
