//! End-to-end cascade for a 12 000 threat with seed 7.

use threatfield_sim::core::enums::{CascadePhase, HitResult};
use threatfield_sim::core::events::FieldEvent;
use threatfield_sim::Field;

const AMOUNT: f64 = 12_000.0;
const SEED: i64 = 7;
const FPS: f64 = 60.0;

#[test]
fn test_large_threat_cascade() {
    let mut field = Field::spawn(AMOUNT, SEED, 0.0).expect("valid amount");
    assert_eq!(field.spec().rock_count(), 10);
    assert_eq!(field.spec().cascade_threshold, 5);

    // Destroy rocks 0..5 one at a time; the fifth destruction triggers.
    let mut trigger = None;
    for index in 0..5 {
        loop {
            match field.hit(index) {
                HitResult::Damaged { .. } => continue,
                HitResult::Destroyed => break,
                other => panic!("unexpected hit result on rock {index}: {other:?}"),
            }
        }
        if field.cascade_phase() != CascadePhase::Idle {
            trigger = Some(index);
            break;
        }
    }
    assert_eq!(trigger, Some(4), "fifth destroyed rock should trigger");

    let schedule = field.cascade_schedule().expect("schedule").clone();
    assert_eq!(schedule.entries.len(), 5);
    let last_delay = schedule.entries.last().unwrap().delay;
    assert!((schedule.total_duration - (last_delay + 0.5)).abs() < 1e-12);

    let start = 2.0;
    let dt = 1.0 / FPS;
    let mut detonated = Vec::new();
    let mut cleared_at = Vec::new();
    let mut triggered = 0;
    for step in 0..=(4.0 * FPS) as usize {
        let now = start + step as f64 * dt;
        let frame = field.update(now, if step == 0 { 0.0 } else { dt });
        for event in frame.events {
            match event {
                FieldEvent::CascadeTriggered { trigger_index, scheduled } => {
                    assert_eq!(trigger_index, 4);
                    assert_eq!(scheduled, 5);
                    triggered += 1;
                }
                FieldEvent::Detonate { rock_index } => detonated.push(rock_index),
                FieldEvent::FieldCleared => cleared_at.push(now),
                FieldEvent::Flash { .. } => {}
                FieldEvent::DebrisShed { .. } => panic!("no shedding during a cascade"),
            }
        }
    }

    assert_eq!(triggered, 1);
    assert_eq!(detonated.len(), 5);

    let trigger_point = field.spec().rocks[4].position;
    let distances: Vec<f64> = detonated
        .iter()
        .map(|&i| field.spec().rocks[i].position.distance(trigger_point))
        .collect();
    for pair in distances.windows(2) {
        assert!(pair[0] <= pair[1], "detonation order not by distance: {distances:?}");
    }

    assert_eq!(cleared_at.len(), 1, "FieldCleared must fire exactly once");
    let due = start + last_delay + 0.5;
    assert!(cleared_at[0] >= due - 1e-9);
    assert!(cleared_at[0] <= due + dt + 1e-9);

    assert!(field.is_cleared());
    assert!(field.rocks().iter().all(|r| r.destroyed));
}
