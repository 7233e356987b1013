#![cfg(feature = "rayon")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resistor_bands::{suppress, suppress_par, BandConfig, BandReader, BBox, Detection};

fn make_rows(rng: &mut StdRng, count: usize) -> Vec<[f32; 6]> {
    (0..count)
        .map(|_| {
            let x1 = rng.random_range(0.0f32..600.0);
            let y1 = rng.random_range(150.0f32..200.0);
            [
                x1,
                y1,
                x1 + rng.random_range(8.0f32..40.0),
                y1 + rng.random_range(200.0f32..260.0),
                rng.random::<f32>(),
                rng.random_range(0u32..12) as f32,
            ]
        })
        .collect()
}

#[test]
fn parallel_suppression_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(31);
    let dets: Vec<Detection> = (0..500)
        .map(|row| {
            let x1 = rng.random_range(0.0f32..600.0);
            Detection {
                bbox: BBox::new(x1, 0.0, x1 + 30.0, 240.0),
                confidence: rng.random::<f32>(),
                class_id: rng.random_range(0..12),
                row,
            }
        })
        .collect();

    assert_eq!(suppress(dets.clone(), 0.45), suppress_par(dets, 0.45));
}

#[test]
fn parallel_reader_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(32);
    let rows = make_rows(&mut rng, 2000);

    let seq = BandReader::default().with_config(BandConfig {
        parallel: false,
        ..BandConfig::default()
    });
    let par = BandReader::default().with_config(BandConfig {
        parallel: true,
        ..BandConfig::default()
    });

    assert_eq!(
        seq.read_detailed(&rows).unwrap(),
        par.read_detailed(&rows).unwrap()
    );
}
