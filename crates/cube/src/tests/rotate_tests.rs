use crate::state::{CubeState, Direction, Face, FaceGrid, Slice, Target};

fn grid(rows: [[&str; 3]; 3]) -> FaceGrid {
    rows.map(|row| row.map(str::to_string))
}

fn strip(labels: [&str; 3]) -> [String; 3] {
    labels.map(str::to_string)
}

fn sorted_labels(state: &CubeState) -> Vec<&str> {
    let mut labels: Vec<&str> = state.facelets().collect();
    labels.sort_unstable();
    labels
}

fn column(grid: &FaceGrid, col: usize) -> [String; 3] {
    [grid[0][col].clone(), grid[1][col].clone(), grid[2][col].clone()]
}

/// A fixed non-trivial state for properties that must hold beyond the
/// solved configuration.
fn scrambled() -> CubeState {
    let mut state = CubeState::solved();
    state.turn_clockwise(Target::Face(Face::Front));
    state.turn_clockwise(Target::Face(Face::Top));
    state.turn_clockwise(Target::Slice(Slice::Horizontal));
    state.turn_clockwise(Target::Face(Face::Right));
    state
}

#[test]
fn front_clockwise_matches_the_worked_example() {
    let solved = CubeState::solved();
    let mut state = solved.clone();
    state.turn_clockwise(Target::Face(Face::Front));

    assert_eq!(
        state.front,
        grid([["r7", "r4", "r1"], ["r8", "r5", "r2"], ["r9", "r6", "r3"]])
    );

    assert_eq!(state.top[0], solved.top[0]);
    assert_eq!(state.top[1], solved.top[1]);
    assert_eq!(state.top[2], strip(["g9", "g6", "g3"]));

    assert_eq!(column(&state.right, 0), strip(["w7", "w8", "w9"]));
    assert_eq!(column(&state.right, 1), column(&solved.right, 1));
    assert_eq!(column(&state.right, 2), column(&solved.right, 2));

    assert_eq!(state.bottom[0], strip(["b7", "b4", "b1"]));
    assert_eq!(state.bottom[1], solved.bottom[1]);
    assert_eq!(state.bottom[2], solved.bottom[2]);

    assert_eq!(column(&state.left, 0), column(&solved.left, 0));
    assert_eq!(column(&state.left, 1), column(&solved.left, 1));
    assert_eq!(column(&state.left, 2), strip(["y1", "y2", "y3"]));

    assert_eq!(state.back, solved.back);
}

#[test]
fn horizontal_slice_shifts_middle_rows_only() {
    let solved = CubeState::solved();
    let mut state = solved.clone();
    state.turn_clockwise(Target::Slice(Slice::Horizontal));

    assert_eq!(state.right[1], strip(["o4", "o5", "o6"]));
    assert_eq!(state.front[1], strip(["b4", "b5", "b6"]));
    assert_eq!(state.left[1], strip(["r4", "r5", "r6"]));
    assert_eq!(state.back[1], strip(["g4", "g5", "g6"]));

    // No slice owns facelets: top and bottom are untouched, and the outer
    // rows of the four side faces stay where they were.
    assert_eq!(state.top, solved.top);
    assert_eq!(state.bottom, solved.bottom);
    for face in [Face::Front, Face::Back, Face::Left, Face::Right] {
        assert_eq!(state.face(face)[0], solved.face(face)[0], "{face}");
        assert_eq!(state.face(face)[2], solved.face(face)[2], "{face}");
    }
}

#[test]
fn verticalside_slice_reverses_through_back_and_top() {
    let solved = CubeState::solved();
    let mut state = solved.clone();
    state.turn_clockwise(Target::Slice(Slice::VerticalSide));

    assert_eq!(column(&state.front, 1), strip(["w2", "w5", "w8"]));
    assert_eq!(column(&state.bottom, 1), strip(["r2", "r5", "r8"]));
    assert_eq!(column(&state.back, 1), strip(["y8", "y5", "y2"]));
    assert_eq!(column(&state.top, 1), strip(["o8", "o5", "o2"]));

    assert_eq!(state.left, solved.left);
    assert_eq!(state.right, solved.right);
}

#[test]
fn four_clockwise_turns_are_the_identity_for_every_target() {
    for start in [CubeState::solved(), scrambled()] {
        for target in Target::ALL {
            let mut state = start.clone();
            for _ in 0..4 {
                state.turn_clockwise(target);
            }
            assert_eq!(state, start, "{target}");
        }
    }
}

#[test]
fn counter_clockwise_is_the_inverse_of_clockwise() {
    for target in Target::ALL {
        let start = scrambled();
        let mut state = start.clone();
        state.rotate(target, Direction::Clockwise);
        state.rotate(target, Direction::CounterClockwise);
        assert_eq!(state, start, "{target}");
    }
}

#[test]
fn counter_clockwise_equals_three_clockwise_turns() {
    for target in Target::ALL {
        let mut by_direction = scrambled();
        by_direction.rotate(target, Direction::CounterClockwise);

        let mut by_repetition = scrambled();
        for _ in 0..3 {
            by_repetition.turn_clockwise(target);
        }
        assert_eq!(by_direction, by_repetition, "{target}");
    }
}

#[test]
fn one_clockwise_turn_always_changes_the_state() {
    for target in Target::ALL {
        let mut state = CubeState::solved();
        state.turn_clockwise(target);
        assert_ne!(state, CubeState::solved(), "{target}");

        state.turn_clockwise(target);
        assert_ne!(state, CubeState::solved(), "two turns of {target}");
    }
}

#[test]
fn rotations_preserve_the_facelet_multiset() {
    let solved = CubeState::solved();
    let expected = sorted_labels(&solved);

    let mut state = solved.clone();
    for target in Target::ALL {
        state.turn_clockwise(target);
        assert_eq!(sorted_labels(&state), expected, "{target}");
    }
    for target in Target::ALL {
        state.rotate(target, Direction::CounterClockwise);
        assert_eq!(sorted_labels(&state), expected, "{target} ccw");
    }
}

#[test]
fn opposite_face_is_never_touched_by_a_face_turn() {
    let solved = CubeState::solved();
    let pairs = [
        (Face::Front, Face::Back),
        (Face::Back, Face::Front),
        (Face::Left, Face::Right),
        (Face::Right, Face::Left),
        (Face::Top, Face::Bottom),
        (Face::Bottom, Face::Top),
    ];
    for (turned, opposite) in pairs {
        let mut state = solved.clone();
        state.turn_clockwise(Target::Face(turned));
        assert_eq!(state.face(opposite), solved.face(opposite), "{turned}");
    }
}
