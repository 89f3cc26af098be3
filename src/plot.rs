use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::coord::Shift;
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use crate::error::SignalError;
use crate::signal::AugmentedSignal;
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub waveform: [u8; 3],
    pub zero_line: [u8; 3],
    pub label: [u8; 3],
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 300,
            background: [255, 255, 255],
            waveform: [0, 0, 255],
            zero_line: [0, 0, 0],
            label: [0, 0, 0],
        }
    }
}
fn rgb(channels: [u8; 3]) -> RGBColor {
    RGBColor(channels[0], channels[1], channels[2])
}
/// Renders one subplot per signal, stacked vertically, into a PNG.
///
/// Each subplot shows the sign-quantized waveform over a horizontal zero
/// reference line, captioned with the source filename. Axes are suppressed;
/// every zero-valued point is annotated with its time.
pub fn render_signals_png(
    signals: &[AugmentedSignal],
    style: &PlotStyle,
) -> Result<Vec<u8>, SignalError> {
    if signals.is_empty() {
        return Err(SignalError::Plot("no signals to draw".into()));
    }
    let height = style.height * signals.len() as u32;
    let mut buffer = vec![0u8; (style.width * height * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (style.width, height)).into_drawing_area();
        root.fill(&rgb(style.background))?;
        let rows = root.split_evenly((signals.len(), 1));
        for (area, signal) in rows.iter().zip(signals) {
            draw_subplot(area, signal, style)?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, height)
}
fn draw_subplot(
    area: &DrawingArea<BitMapBackend, Shift>,
    signal: &AugmentedSignal,
    style: &PlotStyle,
) -> Result<(), SignalError> {
    let (t_min, t_max) = time_bounds(signal);
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(
            &signal.name,
            ("sans-serif", 16).into_font().color(&rgb(style.label)),
        )
        .build_cartesian_2d(t_min..t_max, -1.5f64..1.5f64)?;
    // No mesh: the source plots hide both axes.
    chart.draw_series(LineSeries::new(
        [(t_min, 0.0), (t_max, 0.0)],
        &rgb(style.zero_line),
    ))?;
    chart.draw_series(LineSeries::new(
        signal.points.iter().map(|p| (p.time, p.sign as f64)),
        &rgb(style.waveform),
    ))?;
    for point in signal.zero_points() {
        chart.draw_series(std::iter::once(Text::new(
            format_time(point.time),
            (point.time, 0.0),
            ("sans-serif", 12).into_font().color(&rgb(style.label)),
        )))?;
    }
    Ok(())
}
/// Time range of a subplot, widened when degenerate so plotters always gets
/// a non-empty span.
fn time_bounds(signal: &AugmentedSignal) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in &signal.points {
        min = min.min(point.time);
        max = max.max(point.time);
    }
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if min == max {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}
/// Integer-valued times print without a fractional part, like the untouched
/// integer samples in the source data.
fn format_time(time: f64) -> String {
    if time.fract() == 0.0 {
        format!("{}", time as i64)
    } else {
        format!("{time}")
    }
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, SignalError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| SignalError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignPoint;
    fn waveform(name: &str, points: &[(f64, i8)]) -> AugmentedSignal {
        AugmentedSignal {
            name: name.into(),
            points: points
                .iter()
                .map(|&(time, sign)| SignPoint { time, sign })
                .collect(),
        }
    }
    #[test]
    fn renders_png_for_each_signal() {
        let signals = vec![
            waveform("a.txt", &[(0.0, 1), (0.625, 0), (1.0, -1)]),
            waveform("b.txt", &[(0.0, -1), (1.0, -1)]),
        ];
        let png = render_signals_png(&signals, &PlotStyle::default()).unwrap();
        assert!(!png.is_empty());
        // PNG magic bytes
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
    #[test]
    fn empty_signal_still_gets_a_subplot() {
        let signals = vec![waveform("empty.txt", &[])];
        let png = render_signals_png(&signals, &PlotStyle::default()).unwrap();
        assert!(!png.is_empty());
    }
    #[test]
    fn no_signals_is_an_error() {
        let err = render_signals_png(&[], &PlotStyle::default()).unwrap_err();
        assert!(matches!(err, SignalError::Plot(_)));
    }
    #[test]
    fn style_round_trips_through_json() {
        let json = r#"{"width": 640, "background": [10, 10, 10]}"#;
        let style: PlotStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.width, 640);
        assert_eq!(style.background, [10, 10, 10]);
        // unspecified fields keep their defaults
        assert_eq!(style.height, PlotStyle::default().height);
    }
    #[test]
    fn integer_times_print_without_fraction() {
        assert_eq!(format_time(5.0), "5");
        assert_eq!(format_time(0.625), "0.625");
    }
}
