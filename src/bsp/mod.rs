//! Binary space partition dungeons.
//!
//! The region is split breadth-first into a [`SpaceTree`], then a bottom-up
//! pass places one room per leaf and joins sibling subtrees with L-shaped
//! corridors as the recursion unwinds. A final chain over all rooms makes the
//! floor a single connected region before everything is carved into a
//! [`Grid`].

pub mod corridors;
pub mod raster;
pub mod rooms;
pub mod tree;

use log::{debug, log_enabled, Level};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DUNGEON_DEFAULT_DEPTH, MAX_TREE_DEPTH};
use crate::error::{check_dimensions, DungeonError};
use crate::flood::floor_components;
use crate::geometry::{Corridor, Rect};
use crate::grid::Grid;
use crate::strategies::DungeonGenerator;

pub use corridors::{chain_rooms, connect_children, l_corridor, Elbow};
pub use raster::{carve_corridor, rasterize};
pub use rooms::place_room;
pub use tree::{Node, NodeId, SpaceTree, SplitAxis};

/// Everything the BSP pass produced, before rasterization.
#[derive(Clone, Debug)]
pub struct BspLayout {
    pub width: usize,
    pub height: usize,
    pub tree: SpaceTree,
    /// Leaf rooms, left to right
    pub rooms: Vec<Rect>,
    /// Sibling corridors from the tree followed by the room chain
    pub corridors: Vec<Corridor>,
}

impl BspLayout {
    pub fn rasterize(&self) -> Grid {
        rasterize(self.width, self.height, &self.rooms, &self.corridors)
    }
}

/// Generate a BSP dungeon grid. Same arguments, same grid.
pub fn generate(width: usize, height: usize, max_depth: u32, seed: u64) -> Result<Grid, DungeonError> {
    puffin::profile_function!();
    let layout = generate_layout(width, height, max_depth, seed)?;
    let grid = {
        puffin::profile_scope!("bsp_rasterize");
        layout.rasterize()
    };
    if log_enabled!(Level::Debug) {
        debug!(
            "bsp {}x{} depth {} seed {}: {} floor tiles in {} region(s)",
            width,
            height,
            max_depth,
            seed,
            grid.floor_count(),
            floor_components(&grid)
        );
    }
    Ok(grid)
}

/// Run the partition, room and corridor phases without carving.
pub fn generate_layout(
    width: usize,
    height: usize,
    max_depth: u32,
    seed: u64,
) -> Result<BspLayout, DungeonError> {
    validate(width, height, max_depth)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(build_layout(width, height, max_depth, &mut rng))
}

fn validate(width: usize, height: usize, max_depth: u32) -> Result<(), DungeonError> {
    check_dimensions(width, height)?;
    if max_depth > MAX_TREE_DEPTH {
        return Err(DungeonError::invalid(
            "max_depth",
            format!("{max_depth} exceeds the limit of {MAX_TREE_DEPTH}"),
        ));
    }
    Ok(())
}

/// Build a layout from an already seeded generator. Dimensions must have
/// passed validation.
pub fn build_layout(width: usize, height: usize, max_depth: u32, rng: &mut impl Rng) -> BspLayout {
    let mut tree = {
        puffin::profile_scope!("bsp_split");
        SpaceTree::build(width as i32, height as i32, max_depth, rng)
    };

    {
        puffin::profile_scope!("bsp_rooms_and_corridors");
        furnish(&mut tree, SpaceTree::ROOT, rng);
    }

    let rooms = tree.rooms();
    let mut corridors = tree.corridors();
    let sibling_segments = corridors.len();
    corridors.extend(chain_rooms(&rooms));

    debug_assert!(!tree.is_empty());
    let leaves = tree.leaves();
    debug!(
        "bsp tree: {} nodes, {} leaves (deepest at {}), {} rooms, {} sibling + {} chain corridor segments",
        tree.len(),
        leaves.len(),
        leaves.iter().map(|leaf| tree.depth(*leaf)).max().unwrap_or(0),
        rooms.len(),
        sibling_segments,
        corridors.len() - sibling_segments
    );

    BspLayout {
        width,
        height,
        tree,
        rooms,
        corridors,
    }
}

/// Post-order pass: rooms in leaves, then a corridor between the two
/// subtrees of each internal node. Depth is bounded by the tree depth.
fn furnish(tree: &mut SpaceTree, id: NodeId, rng: &mut impl Rng) {
    match tree.children(id) {
        None => {
            let rect = tree.node(id).rect;
            tree.node_mut(id).room = place_room(&rect, rng);
        }
        Some((left, right)) => {
            furnish(tree, left, rng);
            furnish(tree, right, rng);
            connect_children(tree, id, rng);
        }
    }
}

/// Parameters for the BSP strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BspParams {
    pub max_depth: u32,
}

impl Default for BspParams {
    fn default() -> Self {
        Self {
            max_depth: DUNGEON_DEFAULT_DEPTH,
        }
    }
}

impl DungeonGenerator for BspParams {
    fn generate(&self, width: usize, height: usize, seed: u64) -> Result<Grid, DungeonError> {
        generate(width, height, self.max_depth, seed)
    }
}
