use serde::Serialize;

use crate::face::Face;

/// What the info panel should show after a face change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelUpdate {
    pub visible: bool,
    pub label: String,
    pub text: String,
}

impl PanelUpdate {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            label: String::new(),
            text: String::new(),
        }
    }

    /// Panel state for `face`: hidden at home, otherwise its label and text.
    pub fn for_face(face: &Face) -> Self {
        if face.is_home() {
            Self::hidden()
        } else {
            Self {
                visible: true,
                label: face.label.clone(),
                text: face.text.clone(),
            }
        }
    }
}

/// Receiver of panel updates, called on every face change.
pub trait InfoPanel {
    fn update(&mut self, update: &PanelUpdate);
}

/// Records every update; handy for tests and headless runs.
impl InfoPanel for Vec<PanelUpdate> {
    fn update(&mut self, update: &PanelUpdate) {
        self.push(update.clone());
    }
}

/// Discards updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPanel;

impl InfoPanel for NullPanel {
    fn update(&mut self, _update: &PanelUpdate) {}
}

impl<P: InfoPanel + ?Sized> InfoPanel for &mut P {
    fn update(&mut self, update: &PanelUpdate) {
        (**self).update(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FaceTable;

    #[test]
    fn test_for_face() {
        let faces = FaceTable::default_menu();
        assert_eq!(PanelUpdate::for_face(faces.home()), PanelUpdate::hidden());

        let about = faces.get(1).unwrap();
        let update = PanelUpdate::for_face(about);
        assert!(update.visible);
        assert_eq!(update.label, about.label);
        assert_eq!(update.text, about.text);
    }

    #[test]
    fn test_vec_records_through_borrow() {
        fn notify<P: InfoPanel>(mut panel: P) {
            panel.update(&PanelUpdate::hidden());
        }

        let mut log: Vec<PanelUpdate> = Vec::new();
        notify(&mut log);
        notify(&mut log);
        assert_eq!(log, vec![PanelUpdate::hidden(), PanelUpdate::hidden()]);
    }
}
