use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resistor_bands::{dedup, iou, suppress, BBox, Detection};

fn random_detections(rng: &mut StdRng, count: usize, classes: usize) -> Vec<Detection> {
    (0..count)
        .map(|row| {
            let x1 = rng.random_range(0.0f32..400.0);
            let y1 = rng.random_range(100.0f32..140.0);
            let w = rng.random_range(10.0f32..60.0);
            let h = rng.random_range(150.0f32..250.0);
            Detection {
                bbox: BBox::new(x1, y1, x1 + w, y1 + h),
                // Coarse steps force confidence ties.
                confidence: 0.25 + (rng.random_range(0u32..16) as f32) * 0.05,
                class_id: rng.random_range(0..classes),
                row,
            }
        })
        .collect()
}

#[test]
fn near_duplicates_keep_only_most_confident() {
    let make = |x1: f32, confidence: f32, row: usize| Detection {
        bbox: BBox::new(x1, 100.0, x1 + 100.0, 200.0),
        confidence,
        class_id: 4,
        row,
    };
    let dets = vec![make(100.0, 0.9, 0), make(105.0, 0.6, 1), make(102.0, 0.3, 2)];
    for a in &dets {
        for b in &dets {
            assert!(iou(&a.bbox, &b.bbox) > 0.85);
        }
    }

    let kept = suppress(dets, 0.45);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].confidence, 0.9);
    assert_eq!(kept[0].row, 0);
}

#[test]
fn kept_boxes_within_a_class_do_not_overlap_past_threshold() {
    let mut rng = StdRng::seed_from_u64(21);
    let kept = suppress(random_detections(&mut rng, 300, 3), 0.45);
    for (i, a) in kept.iter().enumerate() {
        for b in kept.iter().skip(i + 1) {
            if a.class_id == b.class_id {
                assert!(iou(&a.bbox, &b.bbox) < 0.45);
            }
        }
    }
}

#[test]
fn suppression_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(22);
    for threshold in [0.1f32, 0.45, 0.7, 1.0] {
        for _ in 0..20 {
            let dets = random_detections(&mut rng, 120, 4);
            let once = suppress(dets, threshold);
            let twice = suppress(once.clone(), threshold);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn suppression_is_deterministic_under_input_permutation() {
    let mut rng = StdRng::seed_from_u64(23);
    let dets = random_detections(&mut rng, 150, 3);
    let mut reversed = dets.clone();
    reversed.reverse();
    assert_eq!(suppress(dets, 0.45), suppress(reversed, 0.45));
}

#[test]
fn zero_threshold_keeps_only_the_most_confident_box() {
    let make = |x1: f32, row: usize| Detection {
        bbox: BBox::new(x1, 0.0, x1 + 10.0, 10.0),
        confidence: 0.5,
        class_id: 0,
        row,
    };
    // Disjoint boxes have IoU 0, which already meets a zero threshold.
    let kept = suppress(vec![make(0.0, 0), make(100.0, 1), make(200.0, 2)], 0.0);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].row, 0);
}

#[test]
fn dedup_collapses_adjacent_repeats() {
    let out = dedup(vec!["brown", "brown", "black"]);
    assert_eq!(out, vec!["brown", "black"]);
}

#[test]
fn dedup_is_idempotent() {
    let alphabet = ["black", "brown", "red", "gold"];
    let mut rng = StdRng::seed_from_u64(24);
    for _ in 0..500 {
        let len = rng.random_range(0..12);
        let seq: Vec<String> = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())].to_string())
            .collect();
        let once = dedup(seq);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
        for pair in once.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
