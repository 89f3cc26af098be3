use crate::signal::{Sample, SignPoint};
/// Interpolated time at which the line through two opposite-sign samples
/// crosses zero: `(t0*x1 - t1*x0) / (x1 - x0)`.
fn crossing_time(a: Sample, b: Sample) -> f64 {
    let (t0, x0) = (a.time as f64, a.value as f64);
    let (t1, x1) = (b.time as f64, b.value as f64);
    (t0 * x1 - t1 * x0) / (x1 - x0)
}
/// Sign-quantizes a sampled signal and inserts one zero point between every
/// adjacent pair of samples with strictly opposite signs.
///
/// A sample whose value is exactly zero never triggers synthesis (the
/// opposite-sign test is strict) but still appears in the output with sign 0.
/// Fewer than two samples means no crossing is possible and the quantized
/// input comes back unchanged.
pub fn transform(samples: &[Sample]) -> Vec<SignPoint> {
    let mut points: Vec<SignPoint> = samples
        .iter()
        .map(|s| SignPoint {
            time: s.time as f64,
            sign: s.value.signum() as i8,
        })
        .collect();
    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        // signum product instead of a raw value product; large i64 values
        // would overflow the latter
        if a.value.signum() * b.value.signum() < 0 {
            points.push(SignPoint {
                time: crossing_time(a, b),
                sign: 0,
            });
        }
    }
    // Stable sort: crossings were appended after the originals, so a
    // crossing that lands exactly on a sample time sorts after it.
    points.sort_by(|a, b| a.time.total_cmp(&b.time));
    points
}
