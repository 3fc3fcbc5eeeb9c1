use anyhow::Result;

use crate::game::object::{Entity, ObjectType, Position};
use crate::game::snapshot::Snapshot;

use super::action::{Action, ActionKind};

/// Pluggable decision policy, invoked synchronously once per active tick.
pub trait Strategy: Send {
    fn name(&self) -> &'static str;

    /// `snapshot` is `None` until the first state push lands. `Ok(None)`
    /// means "nothing to send this tick". An `Err` skips the tick; the loop
    /// survives it.
    fn decide(&mut self, bot: &Entity, snapshot: Option<&Snapshot>) -> Result<Option<Action>>;
}

const SEARCH_RADIUS_MODIFIER: i32 = 200;
const DEFAULT_HEADING: i32 = 90;

/// Starter policy: head for the nearest food in range, run from any larger
/// player that gets inside the same radius.
#[derive(Debug, Default)]
pub struct NearestFoodStrategy;

impl Strategy for NearestFoodStrategy {
    fn name(&self) -> &'static str {
        "nearest_food"
    }

    fn decide(&mut self, bot: &Entity, snapshot: Option<&Snapshot>) -> Result<Option<Action>> {
        let Some(snapshot) = snapshot else {
            return Ok(None);
        };
        let search_radius = f64::from(bot.size + SEARCH_RADIUS_MODIFIER);

        let threat = snapshot
            .player_entities
            .iter()
            .filter(|p| p.id != bot.id && p.size >= bot.size)
            .filter(|p| distance(bot.position, p.position) < search_radius)
            .min_by(|a, b| {
                distance(bot.position, a.position).total_cmp(&distance(bot.position, b.position))
            });
        if let Some(threat) = threat {
            // Directly away from the closest larger player.
            let heading = heading_between(threat.position, bot.position);
            return Ok(Some(Action::new(ActionKind::Forward, heading)));
        }

        let food = snapshot
            .entities
            .iter()
            .filter(|e| e.object_type == ObjectType::Food)
            .filter(|e| distance(bot.position, e.position) < search_radius)
            .min_by(|a, b| {
                distance(bot.position, a.position).total_cmp(&distance(bot.position, b.position))
            });
        let heading = match food {
            Some(food) => heading_between(bot.position, food.position),
            None => DEFAULT_HEADING,
        };
        Ok(Some(Action::new(ActionKind::Forward, heading)))
    }
}

fn distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Integer heading in degrees from `from` toward `to`, normalized to 0..360.
fn heading_between(from: Position, to: Position) -> i32 {
    let degrees = f64::from(to.y - from.y)
        .atan2(f64::from(to.x - from.x))
        .to_degrees()
        .round() as i32;
    degrees.rem_euclid(360)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::game::snapshot::assemble;
    use crate::game::world::World;

    fn snapshot(objects: &[(&str, Vec<i32>)], players: &[(&str, Vec<i32>)]) -> Snapshot {
        let objects: HashMap<String, Vec<i32>> = objects
            .iter()
            .map(|(id, state)| (id.to_string(), state.clone()))
            .collect();
        let players: HashMap<String, Vec<i32>> = players
            .iter()
            .map(|(id, state)| (id.to_string(), state.clone()))
            .collect();
        assemble(
            World {
                center_point: Position { x: 0, y: 0 },
                radius: 1000,
                current_tick: 1,
            },
            &objects,
            &players,
        )
        .expect("valid state")
    }

    #[test]
    fn no_snapshot_means_no_action() {
        let mut strategy = NearestFoodStrategy;
        let bot = Entity::registered("b1");
        let decided = strategy.decide(&bot, None).expect("decide");
        assert!(decided.is_none());
    }

    #[test]
    fn heads_toward_nearest_food() {
        let mut strategy = NearestFoodStrategy;
        let bot = Entity::registered("b1");
        // Nearest food due east, a farther one due north.
        let snapshot = snapshot(
            &[("near", vec![3, 0, 0, 50, 0, 2]), ("far", vec![3, 0, 0, 0, 150, 2])],
            &[],
        );
        let action = strategy
            .decide(&bot, Some(&snapshot))
            .expect("decide")
            .expect("action");
        assert_eq!(action.kind, ActionKind::Forward);
        assert_eq!(action.heading, 0);
    }

    #[test]
    fn flees_larger_player_over_chasing_food() {
        let mut strategy = NearestFoodStrategy;
        let bot = Entity::registered("b1");
        // Larger player due east, food due north. Expect a due-west escape.
        let snapshot = snapshot(
            &[("food", vec![3, 0, 0, 0, 60, 2])],
            &[("giant", vec![50, 20, 0, 80, 0, 1])],
        );
        let action = strategy
            .decide(&bot, Some(&snapshot))
            .expect("decide")
            .expect("action");
        assert_eq!(action.heading, 180);
    }

    #[test]
    fn ignores_own_entity_in_the_player_map() {
        let mut strategy = NearestFoodStrategy;
        let bot = Entity::registered("b1");
        // Own entry is bigger than the registered default; it is not a threat.
        let snapshot = snapshot(&[], &[("b1", vec![50, 20, 0, 0, 0, 1])]);
        let action = strategy
            .decide(&bot, Some(&snapshot))
            .expect("decide")
            .expect("action");
        assert_eq!(action.heading, DEFAULT_HEADING);
    }

    #[test]
    fn defaults_heading_when_nothing_in_range() {
        let mut strategy = NearestFoodStrategy;
        let bot = Entity::registered("b1");
        let snapshot = snapshot(&[("far", vec![3, 0, 0, 900, 900, 2])], &[]);
        let action = strategy
            .decide(&bot, Some(&snapshot))
            .expect("decide")
            .expect("action");
        assert_eq!(action.heading, DEFAULT_HEADING);
    }

    #[test]
    fn heading_normalizes_into_degree_range() {
        assert_eq!(heading_between(Position { x: 0, y: 0 }, Position { x: 10, y: 0 }), 0);
        assert_eq!(heading_between(Position { x: 0, y: 0 }, Position { x: 0, y: 10 }), 90);
        assert_eq!(heading_between(Position { x: 0, y: 0 }, Position { x: -10, y: 0 }), 180);
        assert_eq!(heading_between(Position { x: 0, y: 0 }, Position { x: 0, y: -10 }), 270);
    }
}
