//! Menu faces of the cube.
//!
//! A face table always has the home face at index 0 and one to four section
//! faces, one per edge of home.

mod direction;

pub use direction::*;

use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::config::navigation::HOME_INDEX;
use crate::error::{Error, Result};

/// Maximum number of faces carrying menu semantics.
pub const MAX_FACES: usize = 5;

/// One entry on the home face's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub direction: Direction,
    pub label: String,
}

/// What an external drawing routine should paint on a face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FaceContent {
    MainMenu { entries: Vec<MenuEntry> },
    Section { title: String, body: String },
}

/// Configurable description of a face, before orientation is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSpec {
    pub label: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub edge: Option<Direction>,
}

impl FaceSpec {
    pub fn new(label: impl Into<String>, text: impl Into<String>, edge: Option<Direction>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            edge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Face {
    pub index: usize,
    pub label: String,
    pub text: String,
    /// Edge of home this face hangs off; `None` for home itself.
    pub edge: Option<Direction>,
    pub orientation: Quat,
    pub material_slot: usize,
    pub content: FaceContent,
}

impl Face {
    pub fn is_home(&self) -> bool {
        self.index == HOME_INDEX
    }
}

/// Immutable, validated set of faces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceTable {
    faces: Vec<Face>,
}

impl FaceTable {
    /// Build a table from a home face and its sections.
    ///
    /// Section order is preserved: section `i` gets index `i + 1`.
    pub fn from_specs(home: FaceSpec, sections: Vec<FaceSpec>) -> Result<Self> {
        if home.edge.is_some() {
            return Err(Error::InvalidMenu("home face cannot sit on an edge".into()));
        }
        if sections.len() > MAX_FACES - 1 {
            return Err(Error::InvalidMenu(format!(
                "at most {} sections, got {}",
                MAX_FACES - 1,
                sections.len()
            )));
        }
        if sections.is_empty() {
            return Err(Error::InvalidMenu("menu needs at least one section".into()));
        }

        let mut seen = [false; 4];
        let mut entries = Vec::with_capacity(sections.len());
        for section in &sections {
            let Some(edge) = section.edge else {
                return Err(Error::InvalidMenu(format!(
                    "section {:?} has no edge",
                    section.label
                )));
            };
            if std::mem::replace(&mut seen[edge.slot()], true) {
                return Err(Error::DuplicateEdge(edge));
            }
            entries.push(MenuEntry {
                direction: edge,
                label: section.label.clone(),
            });
        }

        if std::iter::once(&home)
            .chain(&sections)
            .any(|spec| spec.label.trim().is_empty())
        {
            return Err(Error::InvalidMenu("face labels must not be empty".into()));
        }

        let mut faces = Vec::with_capacity(sections.len() + 1);
        faces.push(Face {
            index: HOME_INDEX,
            orientation: orientation_for_edge(None),
            material_slot: material_slot_for_edge(None),
            content: FaceContent::MainMenu { entries },
            label: home.label,
            text: home.text,
            edge: None,
        });
        for (i, spec) in sections.into_iter().enumerate() {
            faces.push(Face {
                index: i + 1,
                orientation: orientation_for_edge(spec.edge),
                material_slot: material_slot_for_edge(spec.edge),
                content: FaceContent::Section {
                    title: spec.label.clone(),
                    body: spec.text.clone(),
                },
                label: spec.label,
                text: spec.text,
                edge: spec.edge,
            });
        }

        Ok(Self { faces })
    }

    /// The canonical five-face menu.
    pub fn default_menu() -> Self {
        let (home, sections) = default_specs();
        Self::from_specs(home, sections).expect("default menu is valid")
    }

    pub fn get(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn home(&self) -> &Face {
        &self.faces[HOME_INDEX]
    }

    pub fn by_edge(&self, direction: Direction) -> Option<&Face> {
        self.faces.iter().find(|f| f.edge == Some(direction))
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false: a table holds at least the home face.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }
}

impl Default for FaceTable {
    fn default() -> Self {
        Self::default_menu()
    }
}

/// Home and section specs of the default menu.
pub fn default_specs() -> (FaceSpec, Vec<FaceSpec>) {
    let home = FaceSpec::new(
        "Menu",
        "Use the arrow keys or click an edge of the cube.",
        None,
    );
    let sections = vec![
        FaceSpec::new(
            "About Me",
            "My story, skills, and interests.",
            Some(Direction::Up),
        ),
        FaceSpec::new(
            "Projects",
            "Cool things I've built or am working on.",
            Some(Direction::Right),
        ),
        FaceSpec::new(
            "Academics",
            "Education, degrees, coursework, and more.",
            Some(Direction::Down),
        ),
        FaceSpec::new(
            "Contact",
            "Resume, socials, and how to reach me.",
            Some(Direction::Left),
        ),
    ];
    (home, sections)
}
