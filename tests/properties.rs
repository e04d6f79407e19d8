use grid_dungeon::bsp::NodeId;
use grid_dungeon::constants::ROOM_MARGIN;
use grid_dungeon::flood::{is_connected, rooms_connected};
use grid_dungeon::{generate, generate_layout};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(
        width in 1usize..120,
        height in 1usize..120,
        depth in 0u32..7,
        seed in any::<u64>(),
    ) {
        prop_assert_eq!(
            generate(width, height, depth, seed).unwrap(),
            generate(width, height, depth, seed).unwrap()
        );
    }

    #[test]
    fn grid_has_requested_size(
        width in 1usize..120,
        height in 1usize..120,
        depth in 0u32..7,
        seed in any::<u64>(),
    ) {
        let grid = generate(width, height, depth, seed).unwrap();
        prop_assert_eq!(grid.width(), width);
        prop_assert_eq!(grid.height(), height);
        prop_assert_eq!(grid.tiles().len(), width * height);
    }

    #[test]
    fn rooms_keep_margin_inside_their_leaf(
        width in 1usize..120,
        height in 1usize..120,
        depth in 0u32..7,
        seed in any::<u64>(),
    ) {
        let layout = generate_layout(width, height, depth, seed).unwrap();
        for leaf in layout.tree.leaves() {
            let node = layout.tree.node(leaf);
            if let Some(room) = node.room {
                prop_assert!(node.rect.contains_with_margin(&room, ROOM_MARGIN));
            }
        }
    }

    #[test]
    fn children_partition_their_parent(
        width in 1usize..160,
        height in 1usize..160,
        depth in 0u32..7,
        seed in any::<u64>(),
    ) {
        let layout = generate_layout(width, height, depth, seed).unwrap();
        let tree = &layout.tree;
        for index in 0..tree.len() {
            let id = NodeId(index);
            let Some((left, right)) = tree.children(id) else { continue };
            let (parent, a, b) = (tree.node(id).rect, tree.node(left).rect, tree.node(right).rect);
            prop_assert!(!a.intersects(&b));
            prop_assert_eq!(a.area() + b.area(), parent.area());
            prop_assert!(parent.contains_with_margin(&a, 0));
            prop_assert!(parent.contains_with_margin(&b, 0));
        }

        let leaf_area: i64 = tree.leaves().iter().map(|l| tree.node(*l).rect.area()).sum();
        prop_assert_eq!(leaf_area, (width * height) as i64);
    }

    #[test]
    fn floor_is_one_region_covering_all_rooms(
        width in 1usize..120,
        height in 1usize..120,
        depth in 0u32..7,
        seed in any::<u64>(),
    ) {
        let layout = generate_layout(width, height, depth, seed).unwrap();
        let grid = layout.rasterize();
        prop_assert!(is_connected(&grid));
        prop_assert!(rooms_connected(&grid, &layout.rooms));
    }
}
