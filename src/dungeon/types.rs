//! Tile grid and room data structures.

use serde::{Deserialize, Serialize};

/// A tile coordinate. Signed so that neighbour arithmetic can step off the
/// map and be rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared Euclidean distance.
    pub fn distance_squared(self, other: Position) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// The four cardinal steps: up, down, left, right.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Exit,
}

impl Tile {
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Fixed-size tile map, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid filled with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Sets a tile; out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(i) = self.index(pos) {
            self.tiles[i] = tile;
        }
    }

    /// Out-of-bounds counts as wall.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|t| t.is_walkable())
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        !self.is_walkable(pos)
    }

    /// Iterates every tile with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Position::new(i as i32 % width, i as i32 / width), t))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

/// Axis-aligned rectangular room. Covers `x..x + width` by `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Overlap test where rooms that touch edge-to-edge also count as
    /// intersecting, so accepted rooms always keep at least one wall
    /// column or row between them.
    pub fn intersects(&self, other: &Room) -> bool {
        !(self.x + self.width < other.x
            || other.x + other.width < self.x
            || self.y + self.height < other.y
            || other.y + other.height < self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.count(Tile::Wall), 20);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_grid_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert!(!grid.is_walkable(Position::new(0, 3)));

        // Ignored, not a panic
        grid.set(Position::new(10, 10), Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(4, 4);
        grid.set(Position::new(2, 1), Tile::Floor);
        grid.set(Position::new(3, 3), Tile::Exit);
        assert_eq!(grid.get(Position::new(2, 1)), Some(Tile::Floor));
        assert!(grid.is_walkable(Position::new(3, 3)));
        assert!(grid.is_wall(Position::new(0, 0)));
    }

    #[test]
    fn test_grid_iter_positions() {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(1, 1), Tile::Floor);
        let floors: Vec<Position> = grid
            .iter()
            .filter(|(_, t)| *t == Tile::Floor)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(floors, vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_room_center_floors() {
        assert_eq!(Room::new(2, 3, 5, 4).center(), Position::new(4, 5));
        assert_eq!(Room::new(0, 0, 4, 4).center(), Position::new(2, 2));
    }

    #[test]
    fn test_overlapping_rooms_intersect() {
        let a = Room::new(5, 5, 4, 4);
        let b = Room::new(7, 7, 4, 4);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_rooms_intersect() {
        // a covers x 5..=8, b starts right after at x 9
        let a = Room::new(5, 5, 4, 4);
        let b = Room::new(9, 5, 4, 4);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_rooms_with_one_tile_gap_do_not_intersect() {
        // a covers x 5..=8, column 9 stays wall, b starts at 10
        let a = Room::new(5, 5, 4, 4);
        let b = Room::new(10, 5, 4, 4);
        assert!(!a.intersects(&b));
        let c = Room::new(9, 20, 4, 4);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_room_contains() {
        let room = Room::new(1, 1, 3, 2);
        assert!(room.contains(Position::new(1, 1)));
        assert!(room.contains(Position::new(3, 2)));
        assert!(!room.contains(Position::new(4, 2)));
        assert!(!room.contains(Position::new(3, 3)));
    }

    #[test]
    fn test_manhattan_and_distance() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.distance_squared(b), 25);
    }
}
