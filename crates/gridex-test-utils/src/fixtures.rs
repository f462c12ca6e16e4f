//! Fixture item types.

use gridex_core::{HasId, IdGenerator, ItemId};

/// A small item with both value identity and an ID.
///
/// Usable in value-compared and ID-compared maps alike.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub id: ItemId,
    pub label: String,
}

impl Token {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            label: label.into(),
        }
    }

    /// Same ID, different label: a distinct value but the same ID.
    pub fn relabelled(&self, label: impl Into<String>) -> Self {
        Self {
            id: self.id,
            label: label.into(),
        }
    }
}

impl HasId for Token {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// `n` tokens with sequential IDs starting at 0, labelled `t0`, `t1`, ...
pub fn tokens(n: usize) -> Vec<Token> {
    let mut ids = IdGenerator::new();
    (0..n)
        .map(|i| Token {
            id: ids.next_id(),
            label: format!("t{i}"),
        })
        .collect()
}
