//! The quarter-turn transforms: own-grid rotation plus the border-strip
//! cyclic shift driven by the topology table.

use crate::state::{CubeState, Direction, FaceGrid, Target};
use crate::topology::neighbor_cycle;

impl CubeState {
    /// One 90-degree clockwise turn of `target`, as viewed from outside the
    /// puzzle looking at it. Face targets rotate their own grid and shift
    /// the four bordering strips; slice targets only shift strips.
    ///
    /// This is a bijection on the 54 positions: four applications restore
    /// the state exactly.
    pub fn turn_clockwise(&mut self, target: Target) {
        if let Target::Face(face) = target {
            rotate_grid_clockwise(self.face_mut(face));
        }
        self.shift_border_strips(target);
    }

    /// Applies a quarter turn in the requested direction. A counter-clockwise
    /// turn is three clockwise turns, the inverse under the order-4 identity.
    pub fn rotate(&mut self, target: Target, direction: Direction) {
        let turns = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        };
        for _ in 0..turns {
            self.turn_clockwise(target);
        }
    }

    fn shift_border_strips(&mut self, target: Target) {
        let cycle = neighbor_cycle(target);
        let strips = cycle.map(|(face, selector)| selector.read(self.face(face)));
        for (i, strip) in strips.into_iter().enumerate() {
            let (face, selector) = cycle[(i + 1) % 4];
            selector.write(self.face_mut(face), strip);
        }
    }
}

/// `new[row][col] = old[2 - col][row]`: the unique 90-degree clockwise
/// rotation of a row-major grid read looking straight at the face.
fn rotate_grid_clockwise(grid: &mut FaceGrid) {
    let old = grid.clone();
    for row in 0..3 {
        for col in 0..3 {
            grid[row][col] = old[2 - col][row].clone();
        }
    }
}

#[cfg(test)]
#[path = "tests/rotate_tests.rs"]
mod tests;
