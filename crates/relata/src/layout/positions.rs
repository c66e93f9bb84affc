//! Entity boxes and the position map.
//!
//! A [`PositionMap`] is created once per diagram by the grid layout and is
//! afterwards changed one entity at a time through [`PositionMap::relocate`].
//! Relocation never touches any other entry, so user-arranged geometry
//! survives unrelated moves.

use indexmap::IndexMap;
use log::trace;
use serde::Serialize;

use relata_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    semantic::Entity,
};

use crate::layout::grid::GridLayout;

/// The box occupied by one entity.
///
/// `x` and `y` locate the top-left corner and are never negative once the
/// box has been placed by the grid or moved by relocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Position {
    /// Creates a box with the given top-left corner and size.
    pub fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x(),
            y: top_left.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The area covered by this box.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.top_left(), self.size())
    }

    /// Midpoint of the top edge, where incoming connectors end.
    pub fn top_center(&self) -> Point {
        self.bounds().top_center()
    }

    /// Midpoint of the bottom edge, where outgoing connectors start.
    pub fn bottom_center(&self) -> Point {
        self.bounds().bottom_center()
    }

    /// The same box moved to `(x, y)`, clamped to non-negative space.
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        let top_left = Point::new(x, y).clamp_non_negative();
        Self::new(top_left, self.size())
    }
}

/// Entity boxes keyed by entity id, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PositionMap(IndexMap<Id, Position>);

impl PositionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The box of `id`, if it has one.
    pub fn get(&self, id: Id) -> Option<Position> {
        self.0.get(&id).copied()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.0.contains_key(&id)
    }

    /// Stores `position` for `id`, replacing any previous box.
    pub fn insert(&mut self, id: Id, position: Position) {
        self.0.insert(id, position);
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, Position)> + '_ {
        self.0.iter().map(|(id, position)| (*id, *position))
    }

    /// Runs the initial grid layout if the map is still empty.
    ///
    /// Nothing happens when the map already holds positions or when there are
    /// no entities; a changed entity set needs an explicit [`Self::clear`]
    /// first. Returns `true` if the layout ran.
    pub fn ensure_initialized(&mut self, entities: &[Entity], grid: &GridLayout) -> bool {
        if !self.is_empty() || entities.is_empty() {
            return false;
        }

        *self = grid.layout(entities);
        true
    }

    /// Discards every position.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The smallest bounds containing every box, or `None` for an empty map.
    pub fn bounds(&self) -> Option<Bounds> {
        self.0
            .values()
            .map(Position::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Returns a copy of the map with `id` moved to `(x, y)`.
    ///
    /// Coordinates are clamped to zero; the size is kept. An unknown `id`
    /// yields an unchanged copy.
    pub fn relocated(&self, id: Id, x: f32, y: f32) -> Self {
        let mut next = self.clone();
        next.relocate(id, x, y);
        next
    }

    /// Moves `id` to `(x, y)` in place.
    ///
    /// Only the entry for `id` is replaced. Returns `false`, leaving the map
    /// untouched, if `id` has no position.
    pub fn relocate(&mut self, id: Id, x: f32, y: f32) -> bool {
        let Some(slot) = self.0.get_mut(&id) else {
            trace!(id:% = id; "Relocation of unknown entity ignored");
            return false;
        };

        *slot = slot.moved_to(x, y);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x: f32, y: f32) -> Position {
        Position::new(Point::new(x, y), Size::new(250.0, 150.0))
    }

    fn sample() -> PositionMap {
        let mut map = PositionMap::new();
        map.insert(Id::new("A"), tile(50.0, 50.0));
        map.insert(Id::new("B"), tile(350.0, 50.0));
        map
    }

    #[test]
    fn test_position_anchors() {
        let position = tile(50.0, 50.0);

        assert_eq!(position.bottom_center(), Point::new(175.0, 200.0));
        assert_eq!(position.top_center(), Point::new(175.0, 50.0));
        assert_eq!(position.bounds(), Bounds::new(50.0, 50.0, 300.0, 200.0));
    }

    #[test]
    fn test_moved_to_clamps() {
        let moved = tile(50.0, 50.0).moved_to(-20.0, 30.0);

        assert_eq!(moved.x(), 0.0);
        assert_eq!(moved.y(), 30.0);
        assert_eq!(moved.width(), 250.0);
        assert_eq!(moved.height(), 150.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(PositionMap::new().bounds(), None);
        assert_eq!(
            sample().bounds(),
            Some(Bounds::new(50.0, 50.0, 600.0, 200.0))
        );
    }

    #[test]
    fn test_relocated_is_pure() {
        let original = sample();
        let moved = original.relocated(Id::new("A"), 500.0, 400.0);

        assert_eq!(original.get(Id::new("A")), Some(tile(50.0, 50.0)));
        assert_eq!(moved.get(Id::new("A")), Some(tile(500.0, 400.0)));
        assert_eq!(moved.get(Id::new("B")), original.get(Id::new("B")));
    }

    #[test]
    fn test_relocate_unknown_is_noop() {
        let mut map = sample();

        assert!(!map.relocate(Id::new("missing"), 10.0, 10.0));
        assert_eq!(map, sample());
        assert_eq!(map.relocated(Id::new("missing"), 1.0, 1.0), sample());
    }

    #[test]
    fn test_relocate_keeps_order() {
        let mut map = sample();
        map.relocate(Id::new("A"), 900.0, 0.0);

        let ids: Vec<_> = map.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn test_ensure_initialized_runs_once() {
        let grid = GridLayout::default();
        let entities = vec![
            Entity::new(Id::new("A"), "a", "", ""),
            Entity::new(Id::new("B"), "b", "", ""),
        ];
        let mut map = PositionMap::new();

        assert!(map.ensure_initialized(&entities, &grid));
        map.relocate(Id::new("A"), 700.0, 700.0);

        assert!(!map.ensure_initialized(&entities, &grid));
        assert_eq!(map.get(Id::new("A")), Some(tile(700.0, 700.0)));

        map.clear();
        assert!(map.ensure_initialized(&entities, &grid));
        assert_eq!(map.get(Id::new("A")), Some(tile(50.0, 50.0)));
    }

    #[test]
    fn test_ensure_initialized_skips_empty_entities() {
        let mut map = PositionMap::new();
        assert!(!map.ensure_initialized(&[], &GridLayout::default()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["A"]["x"], 50.0);
        assert_eq!(json["B"]["width"], 250.0);
    }
}
