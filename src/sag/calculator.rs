use serde::{Deserialize, Serialize};

/// One MWD accelerometer reading. Axis values are in g × 1000.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccelerometerSample {
    pub md: f64,
    pub gz: f64,
    pub gx: f64,
    pub gy: f64,
}

impl AccelerometerSample {
    pub fn new(md: f64, gz: f64, gx: f64, gy: f64) -> Self {
        AccelerometerSample { md, gz, gx, gy }
    }

    pub fn raw_inclination(&self) -> f64 {
        raw_inclination_from_gravity(self.gx, self.gy, self.gz)
    }
}

/// Inclination (deg) from the gravity vector: `acos(Gz / |G|)`.
///
/// The cosine is clamped to [-1, 1]. A zero or non-finite magnitude has no
/// direction and reads as vertical (0°).
pub fn raw_inclination_from_gravity(gx: f64, gy: f64, gz: f64) -> f64 {
    let magnitude = (gx * gx + gy * gy + gz * gz).sqrt();
    let cos_inc = gz / magnitude;
    if !cos_inc.is_finite() {
        return 0.0;
    }
    cos_inc.clamp(-1.0, 1.0).acos().to_degrees()
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SagSign {
    Subtract,
    Add,
}

pub fn sag_correct(raw_inc_deg: f64, sag_deg: f64, sign: SagSign) -> f64 {
    match sign {
        SagSign::Subtract => raw_inc_deg - sag_deg,
        SagSign::Add => raw_inc_deg + sag_deg,
    }
}

/// A possible sensor offset from the bit and the sag it implies.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPositionCandidate {
    pub label: String,
    pub distance_from_bit_m: f64,
    pub sag_deg: f64,
    /// Ground truth for grading; not shown to trainees up front.
    pub correct: bool,
}

impl SensorPositionCandidate {
    pub fn new(distance_from_bit_m: f64, sag_deg: f64, correct: bool) -> Self {
        SensorPositionCandidate {
            label: format!("{distance_from_bit_m:.2} m"),
            distance_from_bit_m,
            sag_deg,
            correct,
        }
    }
}

/// Candidate positions offered for one sensor (e.g. GWD or MWD).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorCandidates {
    pub sensor: String,
    pub candidates: Vec<SensorPositionCandidate>,
}

impl SensorCandidates {
    pub fn correct_index(&self) -> Option<usize> {
        self.candidates.iter().position(|c| c.correct)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SagSelection {
    pub candidate: usize,
    pub sign: SagSign,
}

/// A selection is right only for the flagged position with the sag subtracted.
pub fn is_correct_selection(sensor: &SensorCandidates, selection: &SagSelection) -> bool {
    selection.sign == SagSign::Subtract
        && sensor
            .candidates
            .get(selection.candidate)
            .is_some_and(|c| c.correct)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectedPoint {
    pub md: f64,
    pub raw_inc: f64,
    pub corrected_inc: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectedSeries {
    pub label: String,
    pub sag_deg: f64,
    pub sign: SagSign,
    pub points: Vec<CorrectedPoint>,
}

pub fn corrected_series(
    samples: &[AccelerometerSample],
    candidate: &SensorPositionCandidate,
    sign: SagSign,
) -> CorrectedSeries {
    CorrectedSeries {
        label: candidate.label.clone(),
        sag_deg: candidate.sag_deg,
        sign,
        points: samples
            .iter()
            .map(|s| {
                let raw_inc = s.raw_inclination();
                CorrectedPoint {
                    md: s.md,
                    raw_inc,
                    corrected_inc: sag_correct(raw_inc, candidate.sag_deg, sign),
                }
            })
            .collect(),
    }
}

/// One corrected series per candidate, all derived from the same readings.
pub fn evaluate_candidates(
    samples: &[AccelerometerSample],
    candidates: &[SensorPositionCandidate],
    sign: SagSign,
) -> Vec<CorrectedSeries> {
    candidates
        .iter()
        .map(|c| corrected_series(samples, c, sign))
        .collect()
}

/// Row of the exported inclination table, values rounded to 0.01°.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CorrectionRow {
    pub md: f64,
    pub raw_inc: f64,
    pub corrected: Vec<f64>,
}

/// Raw inclination plus one corrected column per `(sag_deg, sign)` pair.
pub fn correction_table(
    samples: &[AccelerometerSample],
    corrections: &[(f64, SagSign)],
) -> Vec<CorrectionRow> {
    samples
        .iter()
        .map(|s| {
            let raw_inc = round_hundredths(s.raw_inclination());
            CorrectionRow {
                md: s.md,
                raw_inc,
                corrected: corrections
                    .iter()
                    .map(|&(sag, sign)| round_hundredths(sag_correct(raw_inc, sag, sign)))
                    .collect(),
            }
        })
        .collect()
}

pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
