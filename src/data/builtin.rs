//! Field data compiled into the engine so it works without a dataset file.

use crate::ifr::interpolator::{IfrReferencePoint, IfrReferenceSet, IfrValues};
use crate::sag::calculator::{AccelerometerSample, SensorCandidates, SensorPositionCandidate};
use crate::{Station, SurfaceLocation};

use super::{FieldDataset, ReferenceWell};

pub const TARGET_WELL: &str = "A04";
pub const TARGET_WELL_COLOR: &str = "#dc2626";
/// Rotary table elevation above MSL (m).
pub const RT_ELEVATION_M: f64 = 27.0;
pub const TARGET_SURFACE: SurfaceLocation = SurfaceLocation {
    north: 600606.769,
    east: 524209.527,
};
pub const INTERCEPT_MD_M: f64 = 1933.0;
pub const INTERCEPT_TVDSS_M: f64 = 1780.0;

/// MD, inclination, azimuth.
const TARGET_STATIONS: [(f64, f64, f64); 12] = [
    (0.0, 0.0, 0.0),
    (121.0, 1.0, 250.0),
    (256.0, 7.3, 235.0),
    (426.0, 20.0, 194.0),
    (640.0, 38.8, 196.0),
    (853.0, 51.0, 191.0),
    (1066.0, 47.3, 190.0),
    (1341.0, 54.0, 193.0),
    (1645.0, 50.0, 197.0),
    (1908.0, 48.75, 197.0),
    (2103.0, 51.25, 198.0),
    (2316.0, 48.5, 196.0),
];

/// Planning team wellheads, with their display colors.
pub const TEAM_SURFACES: [(&str, &str, SurfaceLocation); 5] = [
    ("IBD", "#6b7280", SurfaceLocation { north: 600450.0, east: 524180.0 }),
    ("GM", "#16a34a", SurfaceLocation { north: 600420.0, east: 524260.0 }),
    ("AC", "#0891b2", SurfaceLocation { north: 600380.0, east: 524150.0 }),
    ("VF", "#ea580c", SurfaceLocation { north: 600460.0, east: 524300.0 }),
    ("SC", "#9333ea", SurfaceLocation { north: 600400.0, east: 524230.0 }),
];

/// Offset library display palette, assigned by library order.
pub const OFFSET_COLORS: [&str; 15] = [
    "#60a5fa", "#34d399", "#f87171", "#fbbf24", "#a78bfa", "#f472b6", "#38bdf8", "#4ade80",
    "#fb923c", "#e879f9", "#94a3b8", "#facc15", "#2dd4bf", "#818cf8", "#f43f5e",
];

/// Field offset wells, surveyed from a shared local wellhead at (0, 0).
const OFFSET_WELLS: [(&str, &[(f64, f64, f64)]); 17] = [
    (
        "A01",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.8, 326.6), (40.0, 1.6, 3.6), (50.0, 2.8, 2.7),
            (60.0, 4.2, 2.78), (70.0, 5.7, 2.8), (80.0, 7.7, 2.9), (90.0, 8.3, 2.6),
            (100.0, 10.0, 2.6), (110.0, 10.9, 2.5), (120.0, 12.7, 2.6), (200.0, 19.5, 7.7),
            (214.0, 20.81, 9.7), (243.0, 21.7, 7.2), (290.0, 29.8, 3.29), (328.0, 34.5, 0.8),
            (356.0, 37.1, 4.3), (384.0, 40.6, 6.3), (413.0, 42.4, 5.9), (447.0, 44.3, 3.2),
            (470.0, 44.1, 3.4), (499.0, 43.6, 3.7), (528.0, 47.8, 5.2), (556.0, 48.9, 4.5),
            (584.0, 48.7, 3.9), (613.0, 47.4, 4.5), (641.0, 45.8, 4.0), (670.0, 44.8, 2.5),
            (698.0, 44.2, 1.2), (727.0, 44.4, 1.5), (756.0, 44.4, 1.8), (784.0, 44.7, 1.9),
            (813.0, 45.3, 2.6), (841.0, 45.7, 2.8), (869.0, 46.1, 3.3), (898.0, 46.8, 3.9),
            (927.0, 47.3, 4.5), (955.0, 47.9, 4.8), (980.0, 48.0, 6.3), (1000.0, 48.0, 6.3),
        ],
    ),
    (
        "A02",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.1, 340.0), (40.0, 0.2, 340.0),
            (50.0, 0.1, 350.0), (60.0, 0.1, 20.0), (70.0, 0.1, 50.0), (80.0, 0.1, 40.0),
            (90.0, 0.1, 70.0), (100.0, 0.1, 50.0), (110.0, 0.1, 20.0), (120.0, 0.1, 60.0),
            (192.0, 0.3, 133.9), (220.5, 3.1, 134.2), (267.4, 5.08, 64.11), (309.03, 8.11, 74.81),
            (350.06, 11.5, 75.11), (390.47, 13.27, 77.0), (431.47, 16.37, 73.87),
            (472.27, 21.45, 76.12), (512.94, 24.81, 74.63), (553.03, 23.72, 72.04),
            (594.3, 22.89, 78.0), (635.47, 21.27, 80.17), (676.23, 19.66, 76.42),
            (717.23, 21.13, 76.4), (757.71, 22.15, 76.99), (798.92, 22.52, 76.11),
            (837.51, 24.34, 75.11), (853.22, 24.34, 75.72), (877.59, 23.09, 74.04),
            (919.03, 23.77, 73.81), (960.18, 23.06, 75.97), (1000.67, 23.23, 77.22),
            (1041.77, 23.07, 75.83), (1082.29, 25.5, 76.92), (1123.47, 28.22, 79.33),
            (1163.0, 32.08, 84.84), (1205.18, 36.43, 85.43), (1244.52, 40.8, 87.63),
            (1285.66, 44.69, 90.57), (1327.42, 49.27, 91.63), (1368.02, 54.49, 93.68),
            (1408.76, 58.82, 95.8), (1455.81, 63.69, 95.09), (1489.45, 67.05, 95.41),
            (1528.26, 71.56, 95.67), (1570.6, 76.26, 96.15), (1612.41, 78.08, 96.6),
            (1653.26, 79.43, 96.83), (1672.56, 79.74, 96.65), (1725.83, 78.71, 97.06),
            (1766.81, 78.78, 96.13), (1806.64, 78.82, 96.18), (1847.24, 78.68, 97.17),
            (1888.21, 78.73, 96.64), (1929.62, 78.2, 96.94), (1970.22, 78.38, 96.38),
            (2010.58, 78.78, 96.46), (2051.91, 78.73, 97.03), (2065.47, 78.75, 96.5),
            (2091.47, 78.75, 96.5), (2132.47, 78.75, 96.5), (2173.63, 78.81, 95.16),
            (2215.12, 78.77, 95.08), (2254.67, 78.55, 95.71), (2296.72, 78.8, 95.44),
            (2338.02, 78.69, 95.66), (2378.17, 78.88, 96.42), (2419.8, 78.75, 96.41),
            (2460.39, 78.6, 96.24), (2500.88, 78.69, 96.5), (2541.3, 79.48, 96.6),
            (2581.57, 79.45, 96.74), (2622.22, 79.38, 96.6), (2663.63, 79.66, 96.89),
            (2704.52, 79.03, 96.94), (2744.7, 78.58, 95.36), (2785.53, 78.49, 96.53),
            (2825.66, 78.67, 96.4), (2865.61, 78.42, 96.83), (2907.88, 78.87, 96.69),
            (2948.59, 79.11, 96.39), (2989.36, 79.01, 96.72), (3029.18, 80.49, 98.39),
            (3071.06, 81.42, 98.55), (3077.24, 82.01, 98.64), (3125.29, 87.01, 100.29),
        ],
    ),
    (
        "A03",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.3, 151.2), (40.0, 0.3, 140.7),
            (50.0, 1.0, 130.1), (60.0, 3.2, 127.6), (70.0, 4.8, 127.1), (80.0, 6.7, 127.1),
            (90.0, 8.3, 127.1), (100.0, 9.6, 127.6), (110.0, 10.8, 128.0), (120.0, 12.2, 128.1),
            (123.0, 12.57, 128.1), (191.0, 20.5, 130.3), (219.0, 21.4, 121.8), (220.0, 25.1, 130.3),
            (247.5, 27.8, 116.8), (277.5, 38.3, 128.4), (304.0, 42.2, 121.7), (365.0, 53.8, 129.1),
            (417.0, 59.0, 135.7), (475.0, 59.2, 140.0), (522.0, 60.9, 144.0), (563.0, 60.0, 145.0),
            (592.0, 59.5, 155.8), (649.0, 60.4, 148.2), (706.0, 60.1, 154.3), (762.0, 58.8, 157.5),
            (847.0, 56.1, 154.0), (932.5, 59.3, 151.6), (1018.0, 59.7, 151.6), (1105.0, 60.6, 152.4),
            (1205.0, 60.5, 153.0),
        ],
    ),
    (
        "A04",
        &[
            (0.0, 0.0, 0.0), (121.92, 1.0, 250.0), (195.07, 3.93, 269.0), (256.03, 7.33, 235.0),
            (335.28, 12.75, 206.0), (426.72, 20.0, 194.0), (518.16, 27.0, 191.0), (609.6, 35.0, 197.0),
            (701.04, 43.75, 196.0), (792.48, 48.75, 194.0), (883.92, 53.0, 192.0),
            (975.36, 52.25, 192.0), (1066.8, 47.25, 190.0), (1158.24, 51.0, 192.0),
            (1249.68, 55.25, 193.0), (1341.12, 54.0, 193.0), (1432.56, 53.0, 193.0),
            (1524.0, 53.75, 192.0), (1615.44, 52.25, 192.0), (1706.88, 50.0, 197.0),
            (1798.32, 49.5, 197.0), (1889.76, 48.75, 197.0), (1981.2, 47.5, 197.0),
            (2072.64, 51.0, 199.0), (2164.08, 49.5, 194.0), (2255.52, 50.0, 195.0),
            (2316.48, 48.5, 196.0),
        ],
    ),
    (
        "A05",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.3, 151.2), (40.0, 0.3, 140.7),
            (50.0, 1.0, 130.1), (60.0, 3.2, 127.6), (70.0, 4.8, 127.1), (80.0, 6.7, 127.1),
            (90.0, 8.3, 127.1), (100.0, 9.6, 127.6), (110.0, 10.8, 128.0), (120.0, 12.2, 128.1),
            (191.0, 20.5, 130.3), (247.5, 27.8, 116.8), (304.0, 42.2, 121.7), (417.0, 59.0, 135.7),
            (522.0, 60.9, 144.0), (649.0, 60.4, 148.2), (819.0, 56.3, 155.0), (989.0, 59.3, 151.7),
            (1128.5, 60.8, 152.6), (1205.0, 60.5, 153.0),
        ],
    ),
    (
        "A06",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.2, 201.8), (40.0, 1.1, 300.8),
            (120.0, 12.0, 306.4), (163.0, 12.75, 303.0), (243.0, 23.5, 310.5), (328.0, 34.3, 311.3),
            (413.0, 47.3, 310.9), (471.0, 58.2, 310.9), (527.0, 61.6, 310.0), (611.0, 65.0, 310.3),
            (697.0, 64.3, 310.6), (782.0, 61.8, 310.6), (869.0, 62.4, 309.9), (955.0, 64.2, 310.7),
            (1046.0, 65.4, 310.8), (1210.0, 65.1, 311.4),
        ],
    ),
    (
        "A07",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (120.0, 0.2, 105.4), (184.0, 0.3, 75.0),
            (231.0, 4.1, 4.0), (288.0, 12.2, 3.5), (345.0, 16.5, 15.8), (409.0, 22.4, 20.42),
            (489.0, 26.0, 20.7), (574.0, 32.6, 13.0), (659.0, 33.2, 13.4), (733.0, 33.2, 16.7),
            (774.0, 33.2, 16.7),
        ],
    ),
    (
        "A08",
        &[
            (0.0, 0.0, 0.0), (9.2, 52.9, 159.2), (507.0, 56.15, 161.04), (560.0, 59.7, 153.6),
            (617.0, 57.1, 156.5), (702.0, 56.9, 157.6), (789.0, 55.2, 159.2), (874.0, 52.8, 158.7),
            (940.0, 52.5, 159.3),
        ],
    ),
    (
        "A09",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (120.0, 15.8, 194.1), (205.0, 24.9, 195.6),
            (310.0, 39.5, 186.8), (452.0, 54.9, 182.6), (565.0, 66.8, 187.3), (679.0, 68.0, 184.2),
            (794.0, 67.6, 186.4), (936.0, 69.3, 184.1), (1050.0, 68.9, 186.1), (1191.0, 68.7, 184.2),
            (1361.0, 68.1, 185.8), (1484.0, 68.0, 185.0),
        ],
    ),
    (
        "A10",
        &[
            (0.0, 0.0, 0.0), (28.0, 0.58, 207.15), (98.0, 16.71, 197.32), (182.0, 36.54, 189.0),
            (284.56, 46.62, 189.15), (379.41, 60.4, 181.81), (473.93, 71.29, 173.87),
            (550.09, 79.36, 169.9), (634.65, 79.44, 166.05), (729.67, 80.52, 166.86),
            (821.62, 79.26, 165.84), (908.13, 80.05, 164.78), (1001.97, 78.15, 167.76),
            (1097.22, 80.49, 166.58), (1191.51, 79.91, 167.37), (1287.3, 80.09, 167.04),
            (1381.99, 79.47, 166.15), (1475.97, 80.08, 165.1), (1571.15, 80.09, 163.55),
            (1665.84, 77.89, 161.83), (1760.73, 75.78, 161.59), (1822.0, 75.0, 160.8),
        ],
    ),
    (
        "A11",
        &[
            (0.0, 0.0, 0.0), (10.0, 0.0, 40.0), (123.0, 12.8, 40.0), (219.0, 16.0, 48.6),
            (304.0, 24.7, 68.8), (405.0, 25.8, 75.1), (504.0, 27.8, 67.7), (619.0, 27.0, 66.8),
            (704.0, 26.3, 68.3),
        ],
    ),
    (
        "A12",
        &[
            (0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (30.0, 0.2, 201.8), (120.0, 12.0, 306.4),
            (124.4, 19.14, 345.4), (276.0, 42.2, 338.6), (390.5, 50.5, 338.2), (505.0, 54.6, 335.0),
            (590.0, 58.7, 337.6), (703.0, 58.5, 336.2), (818.0, 56.3, 336.0), (933.0, 56.8, 335.0),
            (1076.0, 56.5, 335.8), (1182.0, 55.1, 336.8),
        ],
    ),
    (
        "AA13",
        &[
            (0.0, 0.0, 0.0), (119.98, 1.98, 55.9), (148.0, 2.1, 65.4), (175.0, 2.34, 58.85),
            (202.0, 2.16, 57.05), (230.0, 1.82, 55.98),
        ],
    ),
    (
        "AA14",
        &[
            (0.0, 0.0, 0.0), (119.98, 1.98, 55.9), (139.29, 2.45, 55.86), (158.53, 2.92, 84.13),
            (177.85, 3.16, 81.29), (197.21, 4.33, 87.66), (216.5, 5.67, 92.35), (223.23, 6.05, 92.83),
        ],
    ),
    (
        "AA16",
        &[
            (0.0, 0.0, 0.0), (83.77, 0.0, 0.0), (112.77, 1.57, 54.12), (155.9, 0.25, 25.16),
            (311.63, 0.12, 319.49), (776.32, 0.49, 327.82), (927.47, 4.5, 285.65),
            (1223.42, 11.99, 297.92), (1529.0, 29.97, 293.8), (1906.1, 30.8, 293.54),
            (2238.3, 31.12, 294.81), (2626.51, 30.86, 302.49), (3014.44, 30.81, 293.39),
            (3395.6, 29.86, 278.12), (3793.4, 30.25, 273.2), (4168.36, 29.26, 270.81),
            (4306.39, 28.86, 273.68), (4878.05, 30.68, 270.25), (5123.57, 23.56, 261.83),
            (5372.28, 19.64, 267.64),
        ],
    ),
    (
        "AA18",
        &[
            (0.0, 0.0, 0.0), (83.77, 0.0, 0.0), (112.78, 2.03, 53.15), (230.24, 0.45, 33.1),
            (297.2, 4.75, 90.78), (483.66, 11.76, 117.25), (726.1, 23.7, 117.34),
            (973.67, 34.75, 116.48), (1195.06, 47.6, 121.21), (1524.52, 63.6, 118.53),
            (1766.82, 73.32, 120.49), (2035.23, 74.19, 121.63), (2326.01, 74.04, 121.7),
            (2689.5, 76.28, 118.73), (2820.82, 84.99, 108.68), (3018.5, 88.16, 108.22),
            (3124.49, 86.99, 107.19), (3300.62, 91.0, 107.53), (3750.0, 90.0, 104.5),
        ],
    ),
    (
        "Deep",
        &[
            (0.0, 0.0, 0.0), (83.77, 0.0, 0.0), (112.77, 1.68, 45.76), (175.73, 2.29, 12.43),
            (204.66, 3.64, 58.1), (224.04, 3.55, 60.69), (237.12, 2.26, 58.6), (287.86, 6.79, 61.12),
            (316.67, 8.01, 60.45), (345.58, 8.29, 78.29), (375.0, 8.5, 95.0), (382.5, 9.0, 98.0),
        ],
    ),
];

/// Prefilled team surveys (MD, inclination, azimuth) for exercise sessions.
const DEMO_SURVEYS: [(&str, [(f64, f64, f64); 8]); 5] = [
    (
        "IBD",
        [
            (0.0, 0.0, 0.0), (120.0, 2.0, 200.0), (400.0, 15.0, 197.0), (700.0, 30.0, 196.0),
            (1000.0, 42.0, 195.0), (1300.0, 48.0, 196.0), (1600.0, 50.0, 196.0), (1933.0, 49.0, 196.0),
        ],
    ),
    (
        "GM",
        [
            (0.0, 0.0, 0.0), (130.0, 1.5, 205.0), (450.0, 12.0, 200.0), (750.0, 28.0, 197.0),
            (1050.0, 40.0, 196.0), (1350.0, 46.0, 196.0), (1650.0, 49.0, 196.0), (1933.0, 48.5, 196.0),
        ],
    ),
    (
        "AC",
        [
            (0.0, 0.0, 0.0), (110.0, 2.5, 195.0), (380.0, 18.0, 196.0), (680.0, 33.0, 196.0),
            (980.0, 44.0, 195.0), (1280.0, 49.0, 196.0), (1580.0, 50.0, 196.0), (1933.0, 49.0, 196.0),
        ],
    ),
    (
        "VF",
        [
            (0.0, 0.0, 0.0), (115.0, 1.8, 210.0), (420.0, 14.0, 200.0), (720.0, 29.0, 197.0),
            (1020.0, 41.0, 196.0), (1320.0, 47.0, 196.0), (1620.0, 50.0, 196.0), (1933.0, 49.0, 196.0),
        ],
    ),
    (
        "SC",
        [
            (0.0, 0.0, 0.0), (125.0, 2.2, 202.0), (430.0, 16.0, 198.0), (730.0, 31.0, 196.0),
            (1030.0, 43.0, 195.0), (1330.0, 48.0, 196.0), (1630.0, 50.0, 196.0), (1933.0, 49.0, 196.0),
        ],
    ),
];

/// MD, Gz, Gx, Gy (g × 1000) recorded by the MWD tool while sliding.
const ACCELEROMETER: [(f64, f64, f64, f64); 34] = [
    (1698.54, 185.37, 535.14, 819.94),
    (1708.08, 190.37, 863.41, -459.69),
    (1733.58, 199.86, 969.34, -114.42),
    (1750.79, 200.36, -965.34, -17.99),
    (1790.63, 200.36, -677.54, 704.52),
    (1831.22, 199.36, -810.45, -547.63),
    (1872.19, 200.36, -951.35, -226.35),
    (1913.6, 198.87, -366.75, -906.38),
    (1953.42, 200.36, 973.84, 30.98),
    (1994.57, 199.86, -784.97, 583.10),
    (2035.22, 199.36, -962.85, 181.38),
    (2077.36, 197.87, 336.27, -917.38),
    (2117.12, 199.86, 930.87, 294.30),
    (2199.1, 200.86, -760.98, 613.08),
    (2238.66, 199.36, 130.41, -968.34),
    (2280.71, 199.86, -753.99, 622.08),
    (2312.35, 199.86, 911.88, -348.26),
    (2333.66, 199.86, -102.43, 971.34),
    (2382.78, 200.36, -355.76, 909.88),
    (2444.37, 199.36, -372.75, -903.39),
    (2484.86, 199.36, -973.84, 90.44),
    (2546.72, 183.38, -366.25, 909.38),
    (2606.21, 182.88, 376.74, -904.89),
    (2646.4, 182.88, -738.50, -646.06),
    (2688.39, 191.87, 538.63, 816.45),
    (2728.69, 191.37, -928.37, -312.79),
    (2790.84, 200.36, -966.84, -146.40),
    (2828.89, 199.36, -906.38, 366.75),
    (2891.87, 196.87, -161.39, -964.35),
    (2932.6, 191.87, -972.84, -111.92),
    (2973.35, 192.37, -794.46, -572.61),
    (3013.16, 172.38, 876.90, -440.70),
    (3055.04, 155.89, 139.41, -974.84),
    (3061.22, 151.90, 853.92, 490.67),
];

/// Distance from bit (m), sag (deg), flagged answer.
const GWD_CANDIDATES: [(f64, f64, bool); 4] = [
    (11.65, 0.28, false),
    (11.80, 0.23, false),
    (11.94, 0.18, true),
    (12.10, 0.13, false),
];
const MWD_CANDIDATES: [(f64, f64, bool); 4] = [
    (27.66, -0.07, true),
    (27.81, -0.05, false),
    (27.96, -0.03, false),
    (28.11, -0.09, false),
];

pub fn target_well() -> ReferenceWell {
    ReferenceWell {
        name: TARGET_WELL.to_string(),
        color: TARGET_WELL_COLOR.to_string(),
        surface: TARGET_SURFACE,
        vertical_origin: -RT_ELEVATION_M,
        stations: stations(&TARGET_STATIONS),
    }
}

fn stations(rows: &[(f64, f64, f64)]) -> Vec<Station> {
    rows.iter().map(|&(md, inc, azi)| Station::new(md, inc, azi)).collect()
}

pub fn offset_wells() -> Vec<ReferenceWell> {
    OFFSET_WELLS
        .iter()
        .zip(OFFSET_COLORS.iter().cycle())
        .map(|(&(name, rows), color)| ReferenceWell {
            name: name.to_string(),
            color: color.to_string(),
            surface: SurfaceLocation::default(),
            vertical_origin: 0.0,
            stations: stations(rows),
        })
        .collect()
}

/// One prefilled survey per planning team, drilled from that team's wellhead.
pub fn demo_surveys() -> Vec<ReferenceWell> {
    DEMO_SURVEYS
        .iter()
        .filter_map(|(team, rows)| {
            let &(_, color, surface) = TEAM_SURFACES.iter().find(|(t, _, _)| t == team)?;
            Some(ReferenceWell {
                name: team.to_string(),
                color: color.to_string(),
                surface,
                vertical_origin: -RT_ELEVATION_M,
                stations: stations(rows),
            })
        })
        .collect()
}

pub fn accelerometer_samples() -> Vec<AccelerometerSample> {
    ACCELEROMETER
        .iter()
        .map(|&(md, gz, gx, gy)| AccelerometerSample::new(md, gz, gx, gy))
        .collect()
}

fn sensor(name: &str, rows: &[(f64, f64, bool)]) -> SensorCandidates {
    SensorCandidates {
        sensor: name.to_string(),
        candidates: rows
            .iter()
            .map(|&(distance, sag, correct)| SensorPositionCandidate::new(distance, sag, correct))
            .collect(),
    }
}

pub fn sensor_candidates() -> Vec<SensorCandidates> {
    vec![sensor("GWD", &GWD_CANDIDATES), sensor("MWD", &MWD_CANDIDATES)]
}

pub fn ifr_sets() -> Vec<IfrReferenceSet> {
    vec![
        IfrReferenceSet {
            key: "AA16".into(),
            label: "AA16 (Target Well)".into(),
            model: "GRGM2013".into(),
            date: "April 10, 2008".into(),
            toolcode: "MWD_OWSG_Rev5 + IFR".into(),
            note: "Depth relative to 24.5 m above MSL".into(),
            baseline: IfrValues {
                declination: 0.52,
                dip: 70.76,
                total_field: 50329.88,
            },
            points: vec![
                IfrReferencePoint::new("P01", 0.0, Some(0.0), 0.50, 70.78, 50297.60),
                IfrReferencePoint::new("P02", 200.0, Some(240.0), 0.50, 70.77, 50296.30),
                IfrReferencePoint::new("P03", 1202.0, Some(1250.0), 0.51, 70.76, 50308.70),
                IfrReferencePoint::new("P04", 2378.0, Some(2600.0), 0.52, 70.75, 50337.50),
                IfrReferencePoint::new("P05", 3628.0, Some(4050.0), 0.54, 70.75, 50359.20),
                IfrReferencePoint::new("P06", 4565.0, Some(5125.0), 0.55, 70.74, 50380.00),
            ],
        },
        IfrReferenceSet {
            key: "RW".into(),
            label: "Relief Well".into(),
            model: "Reference 2013".into(),
            date: "June 15, 2013".into(),
            toolcode: "MWD_OWSG_Rev5 + IFR".into(),
            note: "Depth relative to MSL".into(),
            baseline: IfrValues {
                declination: -0.16,
                dip: 69.68,
                total_field: 50034.06,
            },
            points: vec![
                IfrReferencePoint::new("P01", 200.0, None, -0.17, 69.68, 50057.40),
                IfrReferencePoint::new("P02", 1000.0, None, -0.17, 69.68, 50036.10),
                IfrReferencePoint::new("P03", 1800.0, None, -0.17, 69.68, 50033.10),
                IfrReferencePoint::new("P04", 2600.0, None, -0.16, 69.67, 50021.70),
                IfrReferencePoint::new("P05", 3400.0, None, -0.16, 69.67, 50022.00),
            ],
        },
    ]
}

impl FieldDataset {
    pub fn builtin() -> Self {
        FieldDataset::new(
            vec![target_well()],
            ifr_sets(),
            accelerometer_samples(),
            sensor_candidates(),
        )
        .with_library(offset_wells(), demo_surveys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn target_intercept_is_found_by_measured_depth() {
        let trajectory = target_well().trajectory();
        assert_eq!(trajectory.len(), TARGET_STATIONS.len());
        let first = trajectory.surface().unwrap();
        assert_eq!(first.tvd, -RT_ELEVATION_M);
        assert_eq!(first.north, TARGET_SURFACE.north);

        let intercept = trajectory.intercept_point(INTERCEPT_MD_M).unwrap();
        assert_eq!(intercept.md, 2103.0);
        let td = trajectory.total_depth().unwrap();
        assert_ne!(intercept, td);
        // the survey ends above the intercept TVDSS even though MD passes it
        assert!(td.tvd < INTERCEPT_TVDSS_M);
        // builds toward south-southwest
        assert!(td.north < TARGET_SURFACE.north && td.east < TARGET_SURFACE.east);
    }

    #[test]
    fn each_sensor_has_one_flagged_answer() {
        for sensor in sensor_candidates() {
            assert_eq!(sensor.candidates.iter().filter(|c| c.correct).count(), 1);
        }
        assert_eq!(ACCELEROMETER.len(), accelerometer_samples().len());
    }

    #[test]
    fn ifr_tables_are_sorted_by_depth() {
        for set in ifr_sets() {
            assert!(set.points.windows(2).all(|w| w[0].tvdss < w[1].tvdss));
        }
        let rw = &ifr_sets()[1];
        assert_approx_eq!(rw.lookup(1400.0).values().unwrap().total_field, 50034.6, 1e-9);
    }

    #[test]
    fn offset_library_cycles_palette_in_order() {
        let wells = offset_wells();
        assert_eq!(wells.len(), 17);
        assert_eq!(wells[0].name, "A01");
        assert_eq!(wells[16].name, "Deep");
        assert_eq!(wells[15].color, OFFSET_COLORS[0]);
        assert_eq!(wells[16].color, OFFSET_COLORS[1]);
        for well in &wells {
            assert!(well.stations.len() >= 2, "{} is too short", well.name);
            assert!(well.stations.windows(2).all(|w| w[1].md > w[0].md), "{}", well.name);
            assert_eq!(well.trajectory().surface().unwrap().tvd, 0.0);
        }
    }

    #[test]
    fn demo_surveys_start_at_team_wellheads() {
        let surveys = demo_surveys();
        assert_eq!(surveys.len(), TEAM_SURFACES.len());
        for (well, (team, color, surface)) in surveys.iter().zip(TEAM_SURFACES.iter()) {
            assert_eq!(well.name, *team);
            assert_eq!(well.color, *color);
            assert_eq!(well.surface, *surface);
            assert_eq!(well.stations.len(), 8);
            assert_eq!(well.stations.last().unwrap().md, INTERCEPT_MD_M);
        }
    }
}
