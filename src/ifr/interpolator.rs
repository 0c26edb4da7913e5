use serde::{Deserialize, Serialize};

/// Magnetic reference values at one depth.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct IfrValues {
    /// Declination (deg).
    pub declination: f64,
    /// Dip angle (deg).
    pub dip: f64,
    /// Total field strength (nT).
    pub total_field: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IfrReferencePoint {
    pub id: String,
    pub tvdss: f64,
    pub md: Option<f64>,
    pub values: IfrValues,
}

impl IfrReferencePoint {
    pub fn new(
        id: impl Into<String>,
        tvdss: f64,
        md: Option<f64>,
        declination: f64,
        dip: f64,
        total_field: f64,
    ) -> Self {
        IfrReferencePoint {
            id: id.into(),
            tvdss,
            md,
            values: IfrValues {
                declination,
                dip,
                total_field,
            },
        }
    }
}

/// IFR table for one well, with the model it was derived from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IfrReferenceSet {
    pub key: String,
    pub label: String,
    pub model: String,
    pub date: String,
    pub toolcode: String,
    pub note: String,
    /// Model values without in-field correction.
    pub baseline: IfrValues,
    /// Sorted by increasing TVDSS.
    pub points: Vec<IfrReferencePoint>,
}

impl IfrReferenceSet {
    pub fn lookup(&self, tvdss: f64) -> IfrLookup {
        interpolate_ifr(&self.points, tvdss)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClampSide {
    /// Query was shallower than the first tabulated point.
    Shallower,
    /// Query was deeper than the last tabulated point.
    Deeper,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidIfrQuery {
    NonFiniteDepth,
    EmptyTable,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IfrLookup {
    /// Within the table (tabulated depths included).
    Interpolated { values: IfrValues },
    /// Outside the table; values of the nearest end point.
    Clamped { values: IfrValues, side: ClampSide },
    Invalid { reason: InvalidIfrQuery },
}

impl IfrLookup {
    pub fn values(&self) -> Option<IfrValues> {
        match *self {
            IfrLookup::Interpolated { values } | IfrLookup::Clamped { values, .. } => Some(values),
            IfrLookup::Invalid { .. } => None,
        }
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, IfrLookup::Clamped { .. })
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation of declination, dip and total field on TVDSS.
/// `points` must be ordered by depth. No extrapolation: queries outside the
/// table return the end point's values, flagged as clamped.
pub fn interpolate_ifr(points: &[IfrReferencePoint], tvdss: f64) -> IfrLookup {
    if !tvdss.is_finite() {
        return IfrLookup::Invalid {
            reason: InvalidIfrQuery::NonFiniteDepth,
        };
    }
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return IfrLookup::Invalid {
            reason: InvalidIfrQuery::EmptyTable,
        };
    };

    if tvdss < first.tvdss {
        return IfrLookup::Clamped {
            values: first.values,
            side: ClampSide::Shallower,
        };
    }
    if tvdss > last.tvdss {
        return IfrLookup::Clamped {
            values: last.values,
            side: ClampSide::Deeper,
        };
    }

    for pair in points.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        if tvdss >= p0.tvdss && tvdss <= p1.tvdss {
            if tvdss == p0.tvdss {
                return IfrLookup::Interpolated { values: p0.values };
            }
            if tvdss == p1.tvdss {
                return IfrLookup::Interpolated { values: p1.values };
            }
            let t = (tvdss - p0.tvdss) / (p1.tvdss - p0.tvdss);
            return IfrLookup::Interpolated {
                values: IfrValues {
                    declination: lerp(p0.values.declination, p1.values.declination, t),
                    dip: lerp(p0.values.dip, p1.values.dip, t),
                    total_field: lerp(p0.values.total_field, p1.values.total_field, t),
                },
            };
        }
    }

    // single-point table queried exactly at its depth
    IfrLookup::Interpolated {
        values: first.values,
    }
}
