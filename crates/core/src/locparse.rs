//! Location string decomposition.
//!
//! Warehouse location strings arrive as underscore- or space-delimited codes
//! ("A_12_3 B"). The sticker layout shows them in a fixed row of
//! [`SLOT_COUNT`] boxes, so parsing always yields exactly that many slots.

/// Number of positional slots a location string is decomposed into.
pub const SLOT_COUNT: usize = 7;

/// A location string decomposed into exactly [`SLOT_COUNT`] ordered slots.
/// Unfilled slots are empty strings.
pub type LocationSlots = [String; SLOT_COUNT];

/// Split a raw location string into [`SLOT_COUNT`] slots.
///
/// Tokens are maximal runs of characters that are neither whitespace nor
/// underscores, assigned to slots in order. Tokens beyond the last slot are
/// dropped; `None` or an empty string yields all-empty slots.
pub fn parse_location(raw: Option<&str>) -> LocationSlots {
    let mut slots = LocationSlots::default();
    let Some(raw) = raw else {
        return slots;
    };
    let tokens = raw
        .trim()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    for (slot, token) in slots.iter_mut().zip(tokens) {
        *slot = token.to_string();
    }
    slots
}
