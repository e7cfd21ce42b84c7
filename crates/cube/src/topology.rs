//! Static adjacency geometry: which strips of which neighbors border each
//! rotation target, and in what order they travel during a clockwise turn.

use crate::state::{Face, FaceGrid, Slice, Target};

/// Addresses the three border facelets on one neighboring face.
///
/// The read direction encodes the strip's handedness relative to the turn:
/// `read` followed by `write` of the *next* cycle entry carries the strip to
/// its new home with the correct physical edge alignment, so the generic
/// shift never needs a separate reversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripSelector {
    /// Row `i`, left to right.
    Row(usize),
    /// Row `i`, right to left.
    RowRev(usize),
    /// Column `i`, top to bottom.
    Col(usize),
    /// Column `i`, bottom to top.
    ColRev(usize),
}

impl StripSelector {
    pub fn read(self, grid: &FaceGrid) -> [String; 3] {
        match self {
            StripSelector::Row(r) => [grid[r][0].clone(), grid[r][1].clone(), grid[r][2].clone()],
            StripSelector::RowRev(r) => {
                [grid[r][2].clone(), grid[r][1].clone(), grid[r][0].clone()]
            }
            StripSelector::Col(c) => [grid[0][c].clone(), grid[1][c].clone(), grid[2][c].clone()],
            StripSelector::ColRev(c) => {
                [grid[2][c].clone(), grid[1][c].clone(), grid[0][c].clone()]
            }
        }
    }

    pub fn write(self, grid: &mut FaceGrid, strip: [String; 3]) {
        let [first, second, third] = strip;
        match self {
            StripSelector::Row(r) => {
                grid[r][0] = first;
                grid[r][1] = second;
                grid[r][2] = third;
            }
            StripSelector::RowRev(r) => {
                grid[r][2] = first;
                grid[r][1] = second;
                grid[r][0] = third;
            }
            StripSelector::Col(c) => {
                grid[0][c] = first;
                grid[1][c] = second;
                grid[2][c] = third;
            }
            StripSelector::ColRev(c) => {
                grid[2][c] = first;
                grid[1][c] = second;
                grid[0][c] = third;
            }
        }
    }
}

/// The fixed four-neighbor cycle for a clockwise turn of `target`, in travel
/// order: the strip read from entry `i` lands on entry `(i + 1) % 4`.
///
/// Faces use the edge row/column bordering the target, slices the middle
/// one. The values are puzzle geometry and never change.
pub fn neighbor_cycle(target: Target) -> [(Face, StripSelector); 4] {
    use Face::{Back, Bottom, Front, Left, Right, Top};
    use StripSelector::{Col, ColRev, Row, RowRev};

    match target {
        Target::Face(Front) => [
            (Top, Row(2)),
            (Right, Col(0)),
            (Bottom, RowRev(0)),
            (Left, ColRev(2)),
        ],
        Target::Face(Back) => [
            (Top, RowRev(0)),
            (Left, Col(0)),
            (Bottom, Row(2)),
            (Right, ColRev(2)),
        ],
        Target::Face(Left) => [
            (Top, Col(0)),
            (Front, Col(0)),
            (Bottom, Col(0)),
            (Back, ColRev(2)),
        ],
        Target::Face(Right) => [
            (Top, ColRev(2)),
            (Back, Col(0)),
            (Bottom, ColRev(2)),
            (Front, ColRev(2)),
        ],
        Target::Face(Top) => [
            (Back, Row(0)),
            (Right, Row(0)),
            (Front, Row(0)),
            (Left, Row(0)),
        ],
        Target::Face(Bottom) => [
            (Front, Row(2)),
            (Right, Row(2)),
            (Back, Row(2)),
            (Left, Row(2)),
        ],
        Target::Slice(Slice::Horizontal) => [
            (Back, Row(1)),
            (Right, Row(1)),
            (Front, Row(1)),
            (Left, Row(1)),
        ],
        Target::Slice(Slice::VerticalFront) => [
            (Top, Row(1)),
            (Right, Col(1)),
            (Bottom, RowRev(1)),
            (Left, ColRev(1)),
        ],
        Target::Slice(Slice::VerticalSide) => [
            (Top, Col(1)),
            (Front, Col(1)),
            (Bottom, Col(1)),
            (Back, ColRev(1)),
        ],
    }
}
