use std::{array, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RotationError;

/// One 3x3 face worth of facelet labels, row-major as seen looking straight
/// at the face. Labels are opaque; the engine only moves them around.
pub type FaceGrid = [[String; 3]; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Middle layer of the puzzle. A slice has no facelets of its own; turning
/// one only permutes the middle row/column of four neighboring faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Parallel to top/bottom.
    Horizontal,
    /// Parallel to front/back.
    VerticalFront,
    /// Parallel to left/right.
    VerticalSide,
}

impl Slice {
    pub fn name(self) -> &'static str {
        match self {
            Slice::Horizontal => "horizontal",
            Slice::VerticalFront => "verticalfront",
            Slice::VerticalSide => "verticalside",
        }
    }
}

/// What a rotation request addresses: one of the six faces or one of the
/// three middle slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Face(Face),
    Slice(Slice),
}

impl Target {
    pub const ALL: [Target; 9] = [
        Target::Face(Face::Front),
        Target::Face(Face::Back),
        Target::Face(Face::Left),
        Target::Face(Face::Right),
        Target::Face(Face::Top),
        Target::Face(Face::Bottom),
        Target::Slice(Slice::Horizontal),
        Target::Slice(Slice::VerticalFront),
        Target::Slice(Slice::VerticalSide),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Target::Face(face) => face.name(),
            Target::Slice(slice) => slice.name(),
        }
    }
}

impl FromStr for Target {
    type Err = RotationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let target = match raw {
            "front" => Target::Face(Face::Front),
            "back" => Target::Face(Face::Back),
            "left" => Target::Face(Face::Left),
            "right" => Target::Face(Face::Right),
            "top" => Target::Face(Face::Top),
            "bottom" => Target::Face(Face::Bottom),
            "horizontal" => Target::Slice(Slice::Horizontal),
            "verticalfront" => Target::Slice(Slice::VerticalFront),
            "verticalside" => Target::Slice(Slice::VerticalSide),
            other => return Err(RotationError::InvalidTarget(other.to_string())),
        };
        Ok(target)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counterClockwise",
        }
    }
}

impl FromStr for Direction {
    type Err = RotationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "clockwise" => Ok(Direction::Clockwise),
            "counterClockwise" => Ok(Direction::CounterClockwise),
            other => Err(RotationError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full puzzle surface: six 3x3 grids, 54 facelets. Rotations permute
/// facelets between positions and never create, drop, or relabel one.
///
/// Serializes to an object keyed by face name, each value a 3x3 array of
/// labels. This is both the wire format and the persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeState {
    pub front: FaceGrid,
    pub back: FaceGrid,
    pub left: FaceGrid,
    pub right: FaceGrid,
    pub top: FaceGrid,
    pub bottom: FaceGrid,
}

impl CubeState {
    /// The hard-coded solved configuration: each face filled with one label
    /// family, numbered 1..9 row-major.
    pub fn solved() -> Self {
        Self {
            front: label_family('r'),
            back: label_family('o'),
            left: label_family('g'),
            right: label_family('b'),
            top: label_family('w'),
            bottom: label_family('y'),
        }
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
        }
    }

    pub fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        }
    }

    /// All 54 facelet labels, face by face, row-major.
    pub fn facelets(&self) -> impl Iterator<Item = &str> + '_ {
        Face::ALL
            .into_iter()
            .flat_map(|face| self.face(face).iter().flatten().map(String::as_str))
    }
}

fn label_family(prefix: char) -> FaceGrid {
    array::from_fn(|row| array::from_fn(|col| format!("{prefix}{}", row * 3 + col + 1)))
}
