//! PEQ magnitude-response curve computation.
//!
//! Coefficients come from the `biquad` crate's RBJ peaking-EQ formulas; the
//! magnitude at each plot frequency is evaluated from the normalized
//! transfer function in its sin²-rational form. Each band contributes its
//! response in dB and the per-band dB values are summed pointwise — the
//! curve the console has always charted, not a linear-magnitude cascade.

use std::f64::consts::PI;

use avproc_types::IndexedFilter;
use biquad::{Coefficients, Hertz, ToHertz, Type};
use thiserror::Error;

/// Evaluation sample rate for the response preview.
pub const SAMPLE_RATE: f64 = 48_000.0;

/// Number of points on the log-spaced plot grid.
pub const PLOT_POINTS: usize = 100;

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("invalid peaking parameters for band {index} of {speaker}: {reason}")]
    BadBand {
        speaker: String,
        index: u32,
        reason: String,
    },
}

/// Magnitude-vs-frequency curve ready for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    /// Plot frequencies in Hz, strictly increasing.
    pub frequencies: Vec<f64>,
    /// Aggregate response in dB at each plot frequency.
    pub response_db: Vec<f64>,
}

/// The fixed plot grid: log-spaced from 10 Hz towards Nyquist at 48 kHz.
pub fn plot_frequencies() -> Vec<f64> {
    let nyquist = SAMPLE_RATE / 2.0;
    let min_log = 1.0;
    let max_log = nyquist.log10();
    (0..PLOT_POINTS)
        .map(|i| {
            let log = min_log + (i as f64 / PLOT_POINTS as f64) * (max_log - min_log);
            10f64.powf(log)
        })
        .collect()
}

/// Aggregate response of a set of peaking bands.
///
/// With no bands the curve is flat zero. A zero-Q band is degenerate: its
/// coefficients go non-finite and the non-finite dB values flow through
/// unmodified. Genuinely malformed parameters (negative Q, negative center
/// frequency, center beyond Nyquist) surface as [`ResponseError`].
pub fn response_curve(filters: &[IndexedFilter]) -> Result<ResponseCurve, ResponseError> {
    let frequencies = plot_frequencies();
    let mut response_db = vec![0.0_f64; PLOT_POINTS];

    for filter in filters {
        let coeffs = peaking_coefficients(filter)?;
        for (db, freq) in response_db.iter_mut().zip(&frequencies) {
            *db += 20.0 * magnitude(&coeffs, *freq).log10();
        }
    }

    Ok(ResponseCurve {
        frequencies,
        response_db,
    })
}

fn peaking_coefficients(filter: &IndexedFilter) -> Result<Coefficients<f64>, ResponseError> {
    let bad_band = |reason: String| ResponseError::BadBand {
        speaker: filter.speaker.clone(),
        index: filter.index,
        reason,
    };
    let center = Hertz::<f64>::from_hz(f64::from(filter.freq))
        .map_err(|e| bad_band(format!("{:?}", e)))?;
    Coefficients::<f64>::from_params(
        Type::PeakingEQ(f64::from(filter.gain)),
        SAMPLE_RATE.hz(),
        center,
        f64::from(filter.q),
    )
    .map_err(|e| bad_band(format!("{:?}", e)))
}

/// |H(e^jω)| of a normalized biquad at frequency `f`, via the sin² form of
/// the transfer function.
fn magnitude(c: &Coefficients<f64>, f: f64) -> f64 {
    let phi = (PI * f / SAMPLE_RATE).sin().powi(2);
    let up = (c.b0 + c.b1 + c.b2).powi(2)
        - 4.0 * (c.b0 * c.b1 + 4.0 * c.b0 * c.b2 + c.b1 * c.b2) * phi
        + 16.0 * c.b0 * c.b2 * phi * phi;
    let down = (1.0 + c.a1 + c.a2).powi(2)
        - 4.0 * (c.a1 + 4.0 * c.a2 + c.a1 * c.a2) * phi
        + 16.0 * c.a2 * phi * phi;
    (up / down).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(freq: i32, gain: f32, q: f32) -> IndexedFilter {
        IndexedFilter {
            speaker: "Left".to_string(),
            freq,
            gain,
            q,
            index: 1,
        }
    }

    #[test]
    fn grid_is_log_spaced_from_ten_hz_towards_nyquist() {
        let freqs = plot_frequencies();
        assert_eq!(freqs.len(), PLOT_POINTS);
        assert!((freqs[0] - 10.0).abs() < 1e-9);
        assert!(freqs.windows(2).all(|w| w[1] > w[0]));
        let last = *freqs.last().unwrap();
        assert!(last > 20_000.0 && last < 24_000.0);
    }

    #[test]
    fn no_bands_give_a_flat_zero_curve() {
        let curve = response_curve(&[]).unwrap();
        assert_eq!(curve.response_db.len(), PLOT_POINTS);
        assert!(curve.response_db.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn single_band_peaks_near_its_gain_at_its_center() {
        let curve = response_curve(&[band(1000, 6.0, 1.0)]).unwrap();
        let peak = curve
            .response_db
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - 6.0).abs() < 0.5, "peak {} not near 6 dB", peak);

        // Far away from the band the response is back near flat.
        assert!(curve.response_db[0].abs() < 0.5);
    }

    #[test]
    fn cut_band_dips_to_its_negative_gain() {
        let curve = response_curve(&[band(1000, -6.0, 1.0)]).unwrap();
        let dip = curve
            .response_db
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        assert!((dip + 6.0).abs() < 0.5, "dip {} not near -6 dB", dip);
    }

    #[test]
    fn coincident_bands_sum_in_db() {
        let one = response_curve(&[band(1000, 3.0, 1.0)]).unwrap();
        let two = response_curve(&[band(1000, 3.0, 1.0), band(1000, 3.0, 1.0)]).unwrap();
        for (a, b) in one.response_db.iter().zip(&two.response_db) {
            assert!((b - 2.0 * a).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_q_band_propagates_non_finite_values() {
        let curve = response_curve(&[band(1000, 6.0, 0.0)]).unwrap();
        assert!(curve.response_db.iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn negative_q_is_rejected() {
        assert!(response_curve(&[band(1000, 6.0, -1.0)]).is_err());
    }

    #[test]
    fn negative_center_frequency_is_rejected() {
        assert!(response_curve(&[band(-10, 6.0, 1.0)]).is_err());
    }
}
