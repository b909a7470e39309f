// crates/thorview-core/src/opening/catalog.rs
//
// Named opening lines. The index of an entry is its opening code.
//
// ORDER MATTERS: classification tables are filled in list order and later
// entries overwrite earlier ones on shared positions. Longer lines are
// listed before the line they extend, so every line's own final position
// ends up carrying that line's name. Never reorder existing entries; that
// would silently reclassify stored games.

pub struct Opening {
    pub name: &'static str,
    pub moves: &'static str,
}

pub const CATALOG: &[Opening] = &[
    // 0 is reserved: no named line reached.
    Opening { name: "Unclassified", moves: "" },
    // Perpendicular family
    Opening { name: "Aubrey", moves: "f5d6c3d3c4f4c5b3c2e6c6b4b5d2e3a6c1b1" },
    Opening { name: "Buffalo", moves: "f5d6c3d3c4f4c5b3c2e3" },
    Opening { name: "Stephenson", moves: "f5d6c3d3c4f4c5b3c2" },
    Opening { name: "Rose-v-Toth", moves: "f5d6c3d3c4f4f6f3e6e7d7g6f8" },
    Opening { name: "No-Kung", moves: "f5d6c3d3c4f4f6f3e6e7" },
    Opening { name: "Cat", moves: "f5d6c3d3c4f4f6" },
    Opening { name: "Snake", moves: "f5d6c3d3c4b3" },
    Opening { name: "Tiger", moves: "f5d6c3d3c4" },
    Opening { name: "Greenberg", moves: "f5d6c5f4e3c6d3f6e6d7g3c4" },
    Opening { name: "Flat", moves: "f5d6c5f4e3c6d3f6e6d7e7" },
    Opening { name: "Rose", moves: "f5d6c5f4e3c6d3f6e6d7" },
    Opening { name: "Bat", moves: "f5d6c5f4e3c6d3" },
    Opening { name: "Chimney", moves: "f5d6c5f4e3f6" },
    Opening { name: "Cow", moves: "f5d6c5" },
    Opening { name: "Perpendicular", moves: "f5d6" },
    // Diagonal family
    Opening { name: "Shaman", moves: "f5f6e6f4e3c5c4" },
    Opening { name: "Rabbit", moves: "f5f6e6f4e3" },
    Opening { name: "Swallow", moves: "f5f6e6f4g6" },
    Opening { name: "Heath", moves: "f5f6e6f4g5" },
    Opening { name: "Ganglion", moves: "f5f6e6d6" },
    Opening { name: "Diagonal", moves: "f5f6" },
    // Parallel family
    Opening { name: "Mouse", moves: "f5f4e3f6d3" },
    Opening { name: "Parallel", moves: "f5f4" },
];
