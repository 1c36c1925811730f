//! One-turn hazard advancement: fire countdown and spread, then blue-fire
//! pursuit. Runs after every completed player action.

use super::*;
use crate::mapgen::progression::random_countdown;
use crate::random::shuffle;
use crate::state::Fire;

impl Game {
    /// Advance the hazard simulation by exactly one completed player action
    /// and resolve anything the player is now standing on. Both hazard
    /// families are frozen while the player occupies the stairway, so a
    /// floor-transition turn never costs health.
    pub fn end_player_turn(&mut self) -> TurnReport {
        self.moves += 1;
        let mut report = TurnReport::default();
        if !self.state.player_on_stairway() {
            self.advance_fires(&mut report);
            self.advance_blue_fires(&mut report);
        }
        self.collect_pickups();
        report
    }

    fn advance_fires(&mut self, report: &mut TurnReport) {
        for fire in &mut self.state.fires {
            fire.countdown -= 1;
        }

        let expired: Vec<usize> = self
            .state
            .fires
            .iter()
            .enumerate()
            .filter(|(_, fire)| fire.countdown < 0)
            .map(|(index, _)| index)
            .collect();
        let sources: Vec<Pos> =
            expired.iter().map(|&index| self.state.fires[index].pos).collect();
        // Highest index first so the earlier removals don't shift the rest.
        for &index in expired.iter().rev() {
            self.state.fires.remove(index);
        }

        let mut ignited: Vec<Fire> = Vec::new();
        for source in sources {
            for (dx, dy) in MOORE_STEPS {
                let pos = source.offset(dx, dy);
                if pos == self.state.player_pos {
                    report.player_damage += 2;
                    self.player_flash.raise(self.moves);
                    self.log.push(LogEvent::FireBurstHitPlayer { from: source });
                    continue;
                }
                if !self.state.grid.in_bounds(pos)
                    || self.state.grid.tile_at(pos) == TileKind::OuterWall
                {
                    continue;
                }
                if self.state.has_fire(pos)
                    || ignited.iter().any(|fire| fire.pos == pos)
                    || self.state.has_water(pos)
                {
                    continue;
                }
                if self.state.grid.tile_at(pos) == TileKind::InnerWall {
                    self.state.grid.set_tile(pos, TileKind::Empty);
                }
                if self.state.grid.tile_at(pos) == TileKind::Empty {
                    ignited.push(Fire { pos, countdown: random_countdown(&mut self.rng) });
                }
            }
        }
        self.state.fires.extend(ignited);
    }

    fn advance_blue_fires(&mut self, report: &mut TurnReport) {
        let ids: Vec<BlueFireId> = self.state.blue_fires.keys().collect();
        for id in ids {
            let blue_fire = self.state.blue_fires[id];
            if !blue_fire.has_been_seen {
                continue;
            }
            if (self.moves as i64) - blue_fire.last_moved_turn < 2 {
                continue;
            }

            let player = self.state.player_pos;
            let dx = player.x - blue_fire.pos.x;
            let dy = player.y - blue_fire.pos.y;

            if dx.abs() <= 1 && dy.abs() <= 1 {
                report.player_damage += 1;
                self.player_flash.raise(self.moves);
                self.log.push(LogEvent::BlueFireStruckPlayer { from: blue_fire.pos });
            }

            let mut candidates: Vec<(i32, i32)> = Vec::new();
            if dx != 0 {
                candidates.push((dx.signum(), 0));
            }
            if dy != 0 {
                candidates.push((0, dy.signum()));
            }
            if dx != 0 && dy != 0 {
                candidates.push((dx.signum(), dy.signum()));
            }
            shuffle(&mut self.rng, &mut candidates);

            for (step_x, step_y) in candidates {
                let dest = blue_fire.pos.offset(step_x, step_y);
                if !self.state.grid.in_bounds(dest)
                    || self.state.grid.tile_at(dest) == TileKind::OuterWall
                {
                    continue;
                }
                if self.state.has_fire(dest)
                    || self.state.blue_fire_at(dest).is_some()
                    || dest == player
                {
                    continue;
                }
                // Blue fires burn straight through inner walls.
                if self.state.grid.tile_at(dest) == TileKind::InnerWall {
                    self.state.grid.set_tile(dest, TileKind::Empty);
                }
                let moved = &mut self.state.blue_fires[id];
                moved.pos = dest;
                moved.last_moved_turn = self.moves as i64;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{add_blue_fire, add_fire, open_floor_game};
    use super::*;

    #[test]
    fn hazards_freeze_while_the_player_is_on_the_stairway() {
        let mut game = open_floor_game(12, 12);
        add_fire(&mut game, Pos { y: 5, x: 5 }, 0);
        let id = add_blue_fire(&mut game, Pos { y: 8, x: 8 }, true);
        game.set_player_position(game.state.stairway_tile);

        let report = game.end_player_turn();

        assert_eq!(report.player_damage, 0);
        assert_eq!(game.state().fires.len(), 1);
        assert_eq!(game.state().fires[0].countdown, 0);
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 8, x: 8 });
        assert_eq!(game.move_counter(), 1);
    }

    #[test]
    fn an_expired_fire_bursts_into_its_moore_neighbourhood() {
        let mut game = open_floor_game(12, 12);
        add_fire(&mut game, Pos { y: 5, x: 5 }, 0);

        let report = game.end_player_turn();

        assert_eq!(report.player_damage, 0);
        assert!(!game.state().has_fire(Pos { y: 5, x: 5 }));
        assert_eq!(game.state().fires.len(), 8);
        for (dx, dy) in MOORE_STEPS {
            let pos = Pos { y: 5 + dy, x: 5 + dx };
            assert!(game.state().has_fire(pos));
        }
        for fire in &game.state().fires {
            assert!((4..=8).contains(&fire.countdown));
        }
    }

    #[test]
    fn a_ticking_fire_only_counts_down() {
        let mut game = open_floor_game(12, 12);
        add_fire(&mut game, Pos { y: 5, x: 5 }, 4);
        game.end_player_turn();
        assert_eq!(game.state().fires.len(), 1);
        assert_eq!(game.state().fires[0].countdown, 3);
    }

    #[test]
    fn water_blocks_ignition_of_a_neighbour() {
        let mut game = open_floor_game(12, 12);
        add_fire(&mut game, Pos { y: 5, x: 5 }, 0);
        game.state.water.insert(Pos { y: 5, x: 6 });

        game.end_player_turn();

        assert!(!game.state().has_fire(Pos { y: 5, x: 6 }));
        assert_eq!(game.state().fires.len(), 7);
    }

    #[test]
    fn a_burst_consumes_inner_walls_and_ignites_the_opened_cell() {
        let mut game = open_floor_game(12, 12);
        game.state.grid.set_tile(Pos { y: 5, x: 6 }, TileKind::InnerWall);
        add_fire(&mut game, Pos { y: 5, x: 5 }, 0);

        game.end_player_turn();

        assert_eq!(game.state().grid.tile_at(Pos { y: 5, x: 6 }), TileKind::Empty);
        assert!(game.state().has_fire(Pos { y: 5, x: 6 }));
    }

    #[test]
    fn a_burst_never_ignites_walls_or_the_stairway() {
        let mut game = open_floor_game(12, 12);
        // Stairway sits at (10, 10); burst right next to it and the border.
        add_fire(&mut game, Pos { y: 10, x: 9 }, 0);

        game.end_player_turn();

        assert!(!game.state().has_fire(game.state().stairway_tile));
        for fire in &game.state().fires {
            assert_eq!(game.state().grid.tile_at(fire.pos), TileKind::Empty);
        }
    }

    #[test]
    fn an_adjacent_burst_scorches_the_player_instead_of_the_cell() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 6 });
        add_fire(&mut game, Pos { y: 5, x: 5 }, 0);

        let report = game.end_player_turn();

        assert_eq!(report.player_damage, 2);
        assert!(game.player_flash().is_raised());
        assert!(!game.state().has_fire(Pos { y: 5, x: 6 }));
        assert!(
            game.log()
                .iter()
                .any(|event| matches!(event, LogEvent::FireBurstHitPlayer { .. }))
        );
    }

    #[test]
    fn a_seen_blue_fire_closes_in_on_the_player() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 8 });
        let id = add_blue_fire(&mut game, Pos { y: 5, x: 5 }, true);

        let report = game.end_player_turn();

        assert_eq!(report.player_damage, 0);
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 6 });
        assert_eq!(game.state().blue_fires[id].last_moved_turn, 1);
    }

    #[test]
    fn a_blue_fire_rests_every_other_turn() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 9 });
        let id = add_blue_fire(&mut game, Pos { y: 5, x: 5 }, true);

        game.end_player_turn();
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 6 });
        game.end_player_turn();
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 6 });
        game.end_player_turn();
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 7 });
    }

    #[test]
    fn an_unseen_blue_fire_stays_put() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 8 });
        let id = add_blue_fire(&mut game, Pos { y: 5, x: 5 }, false);

        game.end_player_turn();

        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 5 });
    }

    #[test]
    fn an_adjacent_blue_fire_strikes_for_one_and_holds_its_ground() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 6 });
        let id = add_blue_fire(&mut game, Pos { y: 5, x: 5 }, true);

        let report = game.end_player_turn();

        assert_eq!(report.player_damage, 1);
        assert!(game.player_flash().is_raised());
        // The only candidate step is the player's own cell, so it stays and
        // keeps retrying every turn.
        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 5 });
        assert_eq!(game.state().blue_fires[id].last_moved_turn, -2);

        let second = game.end_player_turn();
        assert_eq!(second.player_damage, 1);
    }

    #[test]
    fn a_blue_fire_burns_through_inner_walls() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 8 });
        game.state.grid.set_tile(Pos { y: 5, x: 6 }, TileKind::InnerWall);
        let id = add_blue_fire(&mut game, Pos { y: 5, x: 5 }, true);

        game.end_player_turn();

        assert_eq!(game.state().blue_fires[id].pos, Pos { y: 5, x: 6 });
        assert_eq!(game.state().grid.tile_at(Pos { y: 5, x: 6 }), TileKind::Empty);
    }

    #[test]
    fn blue_fires_do_not_stack_on_one_cell() {
        let mut game = open_floor_game(12, 12);
        game.set_player_position(Pos { y: 5, x: 8 });
        let front = add_blue_fire(&mut game, Pos { y: 5, x: 7 }, true);
        let back = add_blue_fire(&mut game, Pos { y: 5, x: 6 }, true);

        game.end_player_turn();

        let front_pos = game.state().blue_fires[front].pos;
        let back_pos = game.state().blue_fires[back].pos;
        assert_ne!(front_pos, back_pos);
        assert_ne!(back_pos, game.state().player_pos);
    }
}
