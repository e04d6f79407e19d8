use rand::Rng;

use crate::bsp::tree::{NodeId, SpaceTree};
use crate::geometry::{Corridor, Point, Rect};

/// Which leg of an L-shaped corridor comes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elbow {
    HorizontalFirst,
    VerticalFirst,
}

impl Elbow {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Elbow::HorizontalFirst
        } else {
            Elbow::VerticalFirst
        }
    }
}

/// Two segments joining `a` and `b`, meeting at a single elbow.
pub fn l_corridor(a: Point, b: Point, elbow: Elbow) -> [Corridor; 2] {
    let corner = match elbow {
        Elbow::HorizontalFirst => Point::new(b.x, a.y),
        Elbow::VerticalFirst => Point::new(a.x, b.y),
    };
    [Corridor::new(a, corner), Corridor::new(corner, b)]
}

/// Connect a room from the left subtree of `id` to a room from the right
/// subtree. Nothing is added if either side has no room.
pub fn connect_children(tree: &mut SpaceTree, id: NodeId, rng: &mut impl Rng) {
    let Some((left, right)) = tree.children(id) else {
        return;
    };
    let (Some(left_room), Some(right_room)) = (tree.first_room(left), tree.first_room(right))
    else {
        return;
    };

    let segments = l_corridor(left_room.center(), right_room.center(), Elbow::random(rng));
    tree.node_mut(id).corridors.extend(segments);
}

/// Chain every consecutive pair of rooms. Sibling corridors alone can leave
/// rooms stranded when a subtree produced no room, the chain cannot.
pub fn chain_rooms(rooms: &[Rect]) -> Vec<Corridor> {
    rooms
        .windows(2)
        .flat_map(|pair| l_corridor(pair[0].center(), pair[1].center(), Elbow::VerticalFirst))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_l_corridor_horizontal_first() {
        let [first, second] =
            l_corridor(Point::new(2, 3), Point::new(10, 8), Elbow::HorizontalFirst);
        assert!(first.is_horizontal());
        assert!(second.is_vertical());
        assert_eq!(first.to, Point::new(10, 3));
        assert_eq!(first.to, second.from);
        assert_eq!(second.to, Point::new(10, 8));
    }

    #[test]
    fn test_l_corridor_vertical_first() {
        let [first, second] =
            l_corridor(Point::new(2, 3), Point::new(10, 8), Elbow::VerticalFirst);
        assert!(first.is_vertical());
        assert!(second.is_horizontal());
        assert_eq!(first.to, Point::new(2, 8));
    }

    #[test]
    fn test_chain_links_consecutive_rooms() {
        let rooms = [
            Rect::new(0, 0, 4, 4),
            Rect::new(10, 0, 4, 4),
            Rect::new(10, 10, 4, 4),
        ];
        let corridors = chain_rooms(&rooms);
        assert_eq!(corridors.len(), 4);
        assert_eq!(corridors[0].from, rooms[0].center());
        assert_eq!(corridors[1].to, rooms[1].center());
        assert_eq!(corridors[2].from, rooms[1].center());
        assert_eq!(corridors[3].to, rooms[2].center());
    }

    #[test]
    fn test_chain_of_one_room_is_empty() {
        assert!(chain_rooms(&[Rect::new(1, 1, 3, 3)]).is_empty());
        assert!(chain_rooms(&[]).is_empty());
    }

    #[test]
    fn test_no_corridor_when_a_side_lacks_rooms() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut tree = SpaceTree::build(40, 20, 1, &mut rng);
        let (left, right) = tree.children(SpaceTree::ROOT).unwrap();
        tree.node_mut(left).room = Some(Rect::new(2, 2, 3, 3));
        connect_children(&mut tree, SpaceTree::ROOT, &mut rng);
        assert!(tree.node(SpaceTree::ROOT).corridors.is_empty());

        tree.node_mut(right).room = Some(Rect::new(30, 5, 3, 3));
        connect_children(&mut tree, SpaceTree::ROOT, &mut rng);
        let corridors = &tree.node(SpaceTree::ROOT).corridors;
        assert_eq!(corridors.len(), 2);
        assert_eq!(corridors[0].from, Point::new(3, 3));
        assert_eq!(corridors[1].to, Point::new(31, 6));
    }
}
