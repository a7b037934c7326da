use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// The tradeable items of the sample graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Book,
    RareLp,
    Poster,
    BassGuitar,
    DrumSet,
    Piano,
}

impl Item {
    /// Every item, in declaration order
    pub const ALL: [Item; 6] = [
        Item::Book,
        Item::RareLp,
        Item::Poster,
        Item::BassGuitar,
        Item::DrumSet,
        Item::Piano,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Item::Book => "book",
            Item::RareLp => "rare_lp",
            Item::Poster => "poster",
            Item::BassGuitar => "bass_guitar",
            Item::DrumSet => "drum_set",
            Item::Piano => "piano",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Item::ALL
            .iter()
            .copied()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| Error::UnknownNode(s.to_string()))
    }
}

/// Edges of the trading graph: what has to be paid on top to swap the
/// first item for the second.
pub const SAMPLE_EDGES: [(Item, Item, u32); 8] = [
    (Item::Book, Item::RareLp, 5),
    (Item::Book, Item::Poster, 0),
    (Item::RareLp, Item::BassGuitar, 15),
    (Item::RareLp, Item::DrumSet, 20),
    (Item::Poster, Item::BassGuitar, 30),
    (Item::Poster, Item::DrumSet, 35),
    (Item::BassGuitar, Item::Piano, 20),
    (Item::DrumSet, Item::Piano, 10),
];

/// Builds the six-item trading graph. The piano is a terminal node.
pub fn sample_graph() -> Result<DirectedGraph<Item, u32>> {
    DirectedGraph::from_edges(SAMPLE_EDGES)
}
