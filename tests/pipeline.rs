//! End-to-end: detector JSON in, smoothed display and overlay out

use finger_count_web::classifier::{classify, Finger};
use finger_count_web::frame::MarkerKind;
use finger_count_web::hand::{HandPose, Handedness, Landmark, LANDMARK_COUNT, WRIST};
use finger_count_web::renderer::{build_overlay_vertices, flatten, VERTEX_FLOATS};
use finger_count_web::smoothing::SmoothingPolicy;
use finger_count_web::{DetectionResult, FrameProcessor, OverlayConfig};

/// Synthetic hand with the first `extended` fingers straight, the rest curled
fn hand_points(extended: usize) -> Vec<Landmark> {
    let mut points = vec![Landmark::default(); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(0.5, 0.9, 0.0);
    for finger in 0..5 {
        let x = 0.3 + 0.1 * finger as f32;
        let first = 1 + finger * 4;
        for joint in 0..4 {
            points[first + joint] = Landmark::new(x, 0.8 - 0.1 * joint as f32, 0.0);
        }
        if finger >= extended {
            // Thumb bends at its IP (first + 2), long fingers at the PIP (first + 1)
            let joint = if finger == 0 { points[first + 2] } else { points[first + 1] };
            // Tip folded back toward the base of that joint
            points[first + 3] = Landmark::new(joint.x + 0.02, joint.y + 0.09, 0.0);
        }
    }
    points
}

fn detection_json(hands: &[(Vec<Landmark>, &str)]) -> String {
    let landmarks: Vec<&Vec<Landmark>> = hands.iter().map(|(p, _)| p).collect();
    let handedness: Vec<serde_json::Value> = hands
        .iter()
        .map(|(_, label)| serde_json::json!([{ "categoryName": label, "score": 0.9 }]))
        .collect();
    serde_json::json!({ "landmarks": landmarks, "handedness": handedness }).to_string()
}

#[test]
fn synthetic_hands_classify_as_expected() {
    for extended in 0..=5 {
        let result = classify(&HandPose::from_points(hand_points(extended)));
        assert_eq!(result.count() as usize, extended, "{} fingers", extended);
    }
    let two = classify(&HandPose::from_points(hand_points(2)));
    assert!(two.is_extended(Finger::Thumb));
    assert!(two.is_extended(Finger::Index));
    assert!(!two.is_extended(Finger::Middle));
}

#[test]
fn steady_hand_settles_and_gap_resets() {
    let config = OverlayConfig { mirror: false, ..OverlayConfig::default() };
    let mut processor = FrameProcessor::new(config);
    let json = detection_json(&[(hand_points(3), "Left")]);

    let mut last = None;
    for _ in 0..12 {
        let frame = DetectionResult::from_json(&json, 640.0, 480.0).unwrap();
        last = Some(processor.process_frame(&frame));
    }
    let output = last.unwrap();
    // round(0.6 × previous + 0.4 × 3) settles at 2: 1, 2, 2, ...
    assert_eq!(output.display.finger_count, 2);
    assert_eq!(output.display.hand_label, Handedness::Left);
    assert_eq!(output.display.status_message, "Detected 1 hand(s)");
    assert_eq!(processor.smoother().count_history().len(), 8);

    let empty = DetectionResult::from_json(r#"{"landmarks": []}"#, 640.0, 480.0).unwrap();
    let output = processor.process_frame(&empty);
    assert_eq!(output.display.finger_count, 0);
    assert_eq!(output.display.hand_label, Handedness::Unknown);
    assert_eq!(output.display.status_message, "No hands detected");
    assert!(processor.smoother().count_history().is_empty());
}

#[test]
fn mode_policy_rejects_flicker() {
    let config = OverlayConfig {
        mirror: false,
        smoothing: SmoothingPolicy::Mode,
        history_capacity: 6,
        ..OverlayConfig::default()
    };
    let mut processor = FrameProcessor::new(config);

    let steady = detection_json(&[(hand_points(4), "Right")]);
    let glitch = detection_json(&[(hand_points(1), "Left")]);

    for json in [&steady, &steady, &steady, &glitch, &steady, &glitch] {
        let frame = DetectionResult::from_json(json, 640.0, 480.0).unwrap();
        processor.process_frame(&frame);
    }
    assert_eq!(processor.display().finger_count, 4);
    assert_eq!(processor.display().hand_label, Handedness::Right);
}

#[test]
fn mirror_toggle_round_trips_label() {
    let json = detection_json(&[(hand_points(5), "Right")]);
    let frame = DetectionResult::from_json(&json, 640.0, 480.0).unwrap();
    let mut processor = FrameProcessor::default();

    let mirrored = processor.process_frame(&frame);
    assert_eq!(mirrored.render.hands[0].label, Handedness::Left);

    processor.update_config(|c| c.mirror = false);
    let plain = processor.process_frame(&frame);
    assert_eq!(plain.render.hands[0].label, Handedness::Right);

    processor.update_config(|c| c.mirror = true);
    let again = processor.process_frame(&frame);
    assert_eq!(again.render.hands[0].label, Handedness::Left);
}

#[test]
fn fingertip_mode_overlay_to_vertices() {
    let config = OverlayConfig { show_skeleton: false, multi_hand: true, ..OverlayConfig::default() };
    let mut processor = FrameProcessor::new(config);
    let json = detection_json(&[(hand_points(2), "Left"), (hand_points(5), "Right")]);
    let frame = DetectionResult::from_json(&json, 640.0, 480.0).unwrap();
    let output = processor.process_frame(&frame);

    assert_eq!(output.render.hands.len(), 2);
    for hand in &output.render.hands {
        assert!(hand.segments.is_empty());
        assert_eq!(hand.markers.len(), 5);
    }
    let extended: Vec<bool> = output.render.hands[0]
        .markers
        .iter()
        .map(|m| m.kind == MarkerKind::TipExtended)
        .collect();
    assert_eq!(extended, vec![true, true, false, false, false]);

    // Only hand #0 drives the display
    assert_eq!(processor.smoother().count_history(), vec![2]);

    let vertices = build_overlay_vertices(&output.render);
    assert_eq!(flatten(&vertices).len(), vertices.len() * VERTEX_FLOATS);
    assert!(!vertices.is_empty());
}
