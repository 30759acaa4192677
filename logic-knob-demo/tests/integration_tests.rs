//! Integration tests for logic-knob-demo
//!
//! Drives the core library the way the demo screen does: four knobs bound
//! to host slots, drag messages, interaction toggling and bulk reset.

use logic_knob::config::Config;
use logic_knob::geometry::{angular_position, ArcTrim, ARC_EPSILON, MIN_ANGLE_DEGREES};
use logic_knob::{
    DragMapper, Extent, KnobBank, KnobGeometry, KnobRange, KnobSpec, PointerDelta,
    TwoDimensionalDrag, ValueBinding, ValueTransition,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// ============================================================================
// Helpers
// ============================================================================

/// Minimal stand-in for the demo app state
struct TestHost {
    bank: KnobBank,
    mapper: TwoDimensionalDrag,
    transitions: Vec<ValueTransition>,
    extent: Extent,
}

impl TestHost {
    fn from_config(config: &Config) -> Self {
        let bank = KnobBank::with_initial_values(config.knob_entries().unwrap());
        let transitions = bank
            .knobs()
            .map(|k| ValueTransition::new(k.value()))
            .collect();
        Self {
            bank,
            mapper: config.drag_mapper().unwrap(),
            transitions,
            extent: Extent::new(200.0, 240.0),
        }
    }

    fn press(&mut self, index: usize) {
        self.bank.knob_mut(index).unwrap().begin_interaction();
    }

    fn drag(&mut self, index: usize, dx: f32, dy: f32, now: Instant) -> f32 {
        let value = self
            .bank
            .knob(index)
            .unwrap()
            .drag(&self.mapper, PointerDelta::new(dx, dy), self.extent);
        self.transitions[index].retarget(value, now, Duration::from_millis(150));
        value
    }

    fn release(&mut self, index: usize) {
        self.bank.knob_mut(index).unwrap().end_interaction();
    }

    fn reset(&mut self, now: Instant) {
        self.bank.reset_all(0.0);
        for (index, transition) in self.transitions.iter_mut().enumerate() {
            transition.retarget(self.bank.value(index).unwrap(), now, Duration::from_millis(150));
        }
    }
}

// ============================================================================
// Demo screen flow
// ============================================================================

#[test]
fn test_default_demo_layout() {
    let host = TestHost::from_config(&Config::default());
    let labels: Vec<_> = host
        .bank
        .knobs()
        .map(|k| k.display_text())
        .collect();
    assert_eq!(labels, ["Knob 1", "Knob 2", "Knob 3", "Knob 4"]);
}

#[test]
fn test_drag_session_shows_value_then_label() {
    let mut host = TestHost::from_config(&Config::default());
    let now = Instant::now();

    host.press(1);
    let value = host.drag(1, 0.0, -60.0, now);
    assert!(value > 0.0);

    let knob = host.bank.knob(1).unwrap();
    assert_eq!(knob.display_text(), (value as i64).to_string());

    host.release(1);
    assert_eq!(host.bank.knob(1).unwrap().display_text(), "Knob 2");

    // Other knobs untouched
    assert_eq!(host.bank.value(0).unwrap(), 0.0);
    assert_eq!(host.bank.value(2).unwrap(), 0.0);
}

#[test]
fn test_drag_sequence_clamps_at_top() {
    let mut host = TestHost::from_config(&Config::default());
    let now = Instant::now();

    host.press(0);
    for _ in 0..20 {
        host.drag(0, 15.0, -15.0, now);
    }
    host.release(0);

    assert_eq!(host.bank.value(0).unwrap(), 127.0);
    let geometry = host.bank.knob(0).unwrap().geometry();
    assert!((geometry.normalized_value - 1.0).abs() < 1e-6);
}

#[test]
fn test_reset_scenario() {
    let mut host = TestHost::from_config(&Config::default());
    let start = Instant::now();

    for index in 0..4 {
        host.press(index);
        host.drag(index, 10.0 * (index + 1) as f32, -25.0, start);
        host.release(index);
    }
    assert!(host.bank.values().iter().all(|v| *v > 0.0));

    let reset_at = start + Duration::from_secs(1);
    host.reset(reset_at);
    assert_eq!(host.bank.values(), vec![0.0; 4]);

    // Geometry follows the bound values immediately
    for knob in host.bank.knobs() {
        let geometry = knob.geometry();
        assert_eq!(geometry.normalized_value, 0.0);
        assert!((geometry.progress.from() - MIN_ANGLE_DEGREES / 360.0).abs() < 1e-6);
        assert!((geometry.progress.length() - ARC_EPSILON).abs() < 1e-5);
    }

    // The displayed dial settles after the animation
    let settled = reset_at + Duration::from_millis(150);
    assert!(host.transitions.iter().all(|t| t.value_at(settled) == 0.0));
    assert!(host.transitions.iter().all(|t| !t.is_animating(settled)));
}

#[test]
fn test_bipolar_knob_from_config() {
    let config: Config = toml::from_str(
        r#"
        [[knobs]]
        label = "Pan"
        range = [-64.0, 63.0]
        origin = 0.0
        initial = -32.0
        "#,
    )
    .unwrap();
    let host = TestHost::from_config(&config);

    let geometry = host.bank.knob(0).unwrap().geometry();
    let normalized_origin = 64.0 / 127.0;
    match geometry.progress {
        ArcTrim::BelowOrigin { from, to } => {
            assert!((from - angular_position(32.0 / 127.0)).abs() < 1e-5);
            assert!((to - angular_position(normalized_origin)).abs() < 1e-5);
        }
        other => panic!("Expected BelowOrigin, got {:?}", other),
    }
}

// ============================================================================
// Injected collaborators
// ============================================================================

/// Drag mapper that only listens to vertical motion, one unit per pixel
struct VerticalOnly;

impl DragMapper for VerticalOnly {
    fn value_delta(&self, delta: PointerDelta, _extent: Extent, _range: &KnobRange) -> f32 {
        -delta.dy
    }
}

#[test]
fn test_custom_drag_mapper() {
    let slot: Rc<Cell<f32>> = Rc::new(Cell::new(10.0));
    let knob = logic_knob::Knob::new(KnobSpec::new("Gain"), Rc::clone(&slot));

    knob.drag(&VerticalOnly, PointerDelta::new(100.0, -5.0), Extent::new(50.0, 50.0));
    assert_eq!(slot.get(), 15.0);
}

#[test]
fn test_closure_binding_host() {
    let storage = Cell::new(0.0_f32);
    let writes = Cell::new(0_u32);
    let binding = logic_knob::Binding::new(
        || storage.get(),
        |v| {
            writes.set(writes.get() + 1);
            storage.set(v);
        },
    );

    let knob = logic_knob::Knob::new(KnobSpec::new("Knob"), binding);
    knob.drag(
        &TwoDimensionalDrag::default(),
        PointerDelta::new(0.0, -10.0),
        Extent::new(100.0, 100.0),
    );
    assert_eq!(writes.get(), 1);
    assert!(storage.get() > 0.0);
}

#[test]
fn test_geometry_identical_across_hosts() {
    let spec = KnobSpec::new("Knob");
    let a = Cell::new(42.0_f32);
    let b: Rc<Cell<f32>> = Rc::new(Cell::new(42.0));

    let from_cell = logic_knob::Knob::new(spec.clone(), &a).geometry();
    let from_rc = logic_knob::Knob::new(spec.clone(), b).geometry();
    assert_eq!(from_cell, from_rc);
    assert_eq!(from_cell, KnobGeometry::compute(&spec, 42.0));
    assert_eq!(ValueBinding::get(&a), 42.0);
}
