use crate::config::navigation::HOME_INDEX;
use crate::face::{Direction, FaceTable};
use crate::input::Intent;

/// Menu graph: home connects to every section, every section only back to home.
///
/// ## Transition Rules
///
/// - home --d--> section on edge `d`
/// - section on edge `d` --reverse(d)--> home
/// - section --Back--> home
///
/// Anything else is an absent edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    spokes: [Option<usize>; 4],
    /// Edge each face hangs off, indexed by face; `None` for home.
    edges: Vec<Option<Direction>>,
}

impl Adjacency {
    pub fn from_faces(faces: &FaceTable) -> Self {
        let mut spokes = [None; 4];
        let edges = faces.iter().map(|f| f.edge).collect();
        for face in faces.iter() {
            if let Some(edge) = face.edge {
                spokes[edge.slot()] = Some(face.index);
            }
        }
        Self { spokes, edges }
    }

    /// Face reached from `from` by `intent`, or `None` for an absent edge.
    pub fn next(&self, from: usize, intent: Intent) -> Option<usize> {
        if from == HOME_INDEX {
            return intent.direction().and_then(|d| self.spokes[d.slot()]);
        }

        let edge = self.edges.get(from).copied().flatten()?;
        let returns_home = match intent {
            Intent::Back => true,
            other => other.direction() == Some(edge.reverse()),
        };
        returns_home.then_some(HOME_INDEX)
    }

    /// Intent that leads from home to `face`, if it is a section.
    pub fn intent_to(&self, face: usize) -> Option<Intent> {
        self.edges.get(face).copied().flatten().map(Intent::from)
    }
}
