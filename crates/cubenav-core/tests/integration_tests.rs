//! Integration tests for cubenav-core
//!
//! These tests drive the public API the way a page would: build a widget from
//! config, feed it input between frames and watch the panel and orientation.

use std::time::Duration;

use cubenav_core::config::click::FRONT_MATERIAL_SLOT;
use cubenav_core::orientation::angular_distance;
use cubenav_core::{
    ClickRegions, CubeWidget, Direction, FaceNavigator, FaceTable, HitTest, Intent, NavKey,
    PanelUpdate, Transition, WidgetConfig,
};

fn navigator() -> FaceNavigator<Vec<PanelUpdate>> {
    FaceNavigator::new(
        FaceTable::default_menu(),
        ClickRegions::default(),
        Vec::new(),
        0.12,
    )
    .unwrap()
}

/// Menu graph properties
mod adjacency_tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_section_one_step_from_home() {
        let mut nav = navigator();
        for d in Direction::iter() {
            let t = nav.on_navigation_intent(d.into());
            let face = nav.faces().by_edge(d).unwrap().index;
            assert_eq!(t, Transition::Moved { from: 0, to: face });
            assert_eq!(
                nav.on_navigation_intent(d.reverse().into()),
                Transition::Moved { from: face, to: 0 }
            );
        }
    }

    #[test]
    fn test_only_reverse_or_back_leave_a_section() {
        for d in Direction::iter() {
            for intent in Intent::iter() {
                let mut nav = navigator();
                nav.on_navigation_intent(d.into());
                let section = nav.current_face();

                let t = nav.on_navigation_intent(intent);
                if intent == Intent::Back || intent == Intent::from(d.reverse()) {
                    assert_eq!(t, Transition::Moved { from: section, to: 0 });
                } else {
                    assert_eq!(t, Transition::Ignored, "{} at {}", intent, d);
                    assert_eq!(nav.current_face(), section);
                }
            }
        }
    }
}

/// Orientation controller properties
mod orientation_tests {
    use super::*;

    #[test]
    fn test_full_step_lands_on_face() {
        let mut nav = navigator();
        for face in 0..nav.faces().len() {
            nav.go_to_face(face);
            nav.advance(1.0);
            let expected = nav.faces().get(face).unwrap().orientation;
            assert!(angular_distance(nav.current_orientation(), expected) < 1e-5);
        }
    }

    #[test]
    fn test_convergence_is_monotone_and_bounded() {
        for factor in [0.10, 0.12, 0.14] {
            let mut nav = navigator();
            nav.on_navigation_intent(Intent::Left);

            let mut last = nav.angular_distance();
            let mut steps = 0;
            while !nav.is_settled() {
                nav.advance(factor);
                let d = nav.angular_distance();
                assert!(d < last);
                last = d;
                steps += 1;
                assert!(steps <= 150, "factor {} took too long", factor);
            }
        }
    }

    #[test]
    fn test_redirect_mid_flight_is_continuous() {
        let mut nav = navigator();
        nav.on_navigation_intent(Intent::Up);
        for _ in 0..5 {
            nav.step();
        }
        let before = nav.current_orientation();
        nav.on_navigation_intent(Intent::Back);
        assert_eq!(nav.current_orientation(), before);
        nav.step();
        assert!(angular_distance(before, nav.current_orientation()) < 0.2);
    }
}

/// Click classification examples
mod click_tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        let r = ClickRegions::new(0.25, 0.35, 0.65).unwrap();
        assert_eq!(r.classify_click(0.5, 0.95), Some(Intent::Up));
        assert_eq!(r.classify_click(0.5, 0.5), None);
        assert_eq!(r.classify_click(0.95, 0.5), Some(Intent::Right));
        assert_eq!(r.classify_click(0.02, 0.02), None);
    }

    #[test]
    fn test_click_opens_section_panel() {
        let mut nav = navigator();
        nav.on_click(&HitTest::new(FRONT_MATERIAL_SLOT, 0.5, 0.05));
        let last = nav.panel().last().unwrap();
        assert!(last.visible);
        assert_eq!(last.label, "Academics");
    }
}

/// Whole widget driven frame by frame
mod widget_tests {
    use super::*;

    #[test]
    fn test_session_from_config() {
        let config = WidgetConfig::parse(
            r#"
[intro]
duration_secs = 0.5
"#,
        )
        .unwrap();
        let mut widget = CubeWidget::new(&config, Vec::new()).unwrap();

        let mut t = Duration::ZERO;
        let frame_time = Duration::from_millis(16);
        while widget.frame(t).intro_phase.is_some() {
            t += frame_time;
        }

        widget.key_down(NavKey::ArrowRight);
        widget.key_up(NavKey::ArrowRight);
        for _ in 0..120 {
            t += frame_time;
            widget.frame(t);
        }
        assert!(widget.navigator().is_settled());

        widget.key_down(NavKey::Escape);
        let panel = widget.teardown();
        let visible: Vec<bool> = panel.iter().map(|u| u.visible).collect();
        assert_eq!(visible, vec![false, true, false]);
        assert_eq!(panel[1].label, "Projects");
    }
}
