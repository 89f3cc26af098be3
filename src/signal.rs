/// One (time, value) observation read from a signal file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub time: i64,
    pub value: i64,
}
impl Sample {
    pub fn new(time: i64, value: i64) -> Self {
        Self { time, value }
    }
}
/// Ordered samples from a single input file. Times are assumed strictly
/// increasing; the reader does not validate this.
#[derive(Clone, Debug)]
pub struct Signal {
    pub name: String,
    pub samples: Vec<Sample>,
}
/// One point of the sign-quantized waveform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignPoint {
    pub time: f64,
    pub sign: i8, // -1, 0, or 1
}
/// Sign-quantized waveform with interpolated zero crossings inserted,
/// time-ordered. One per input file, ready for the renderer.
#[derive(Clone, Debug)]
pub struct AugmentedSignal {
    pub name: String,
    pub points: Vec<SignPoint>,
}
impl AugmentedSignal {
    /// Points lying on the zero line: synthesized crossings plus any
    /// original sample whose value was exactly zero. These get annotated.
    pub fn zero_points(&self) -> impl Iterator<Item = &SignPoint> {
        self.points.iter().filter(|p| p.sign == 0)
    }
}
