//! Reference geomagnetic tables.
//!
//! Each table is sampled every 10 degrees, rows from latitude -60 to 60 and
//! columns from longitude -180 to 180. The first and last column describe the
//! same meridian.

/// Number of latitude rows in the reference tables
pub const LAT_BANDS: usize = 13;
/// Number of longitude columns in the reference tables
pub const LON_BANDS: usize = 37;

/// Magnetic declination, in degrees (positive east)
#[rustfmt::skip]
pub static DECLINATION_TABLE: [[i16; LON_BANDS]; LAT_BANDS] = [
    [42, 40, 38, 35, 32, 28, 25, 21, 17, 13, 9, 5, 1, -3, -7, -11, -15, -19, -23, -26, -30, -33, -36, -39, -41, -42, -42, -40, -36, -26, -10, 10, 26, 36, 40, 42, 42], // -60
    [29, 29, 28, 27, 24, 22, 19, 16, 13, 10, 7, 4, 0, -3, -6, -10, -13, -16, -19, -21, -24, -26, -28, -29, -29, -29, -28, -25, -20, -13, -4, 5, 14, 21, 25, 28, 29], // -50
    [22, 22, 22, 21, 19, 18, 15, 13, 11, 8, 5, 2, 0, -3, -6, -9, -11, -14, -16, -18, -20, -21, -22, -22, -22, -22, -20, -17, -13, -8, -2, 4, 10, 14, 18, 20, 22], // -40
    [17, 17, 17, 17, 16, 14, 12, 10, 8, 6, 4, 1, -1, -4, -6, -8, -11, -13, -14, -16, -17, -18, -18, -18, -18, -16, -15, -12, -9, -5, -1, 3, 7, 11, 14, 16, 17], // -30
    [14, 14, 14, 13, 13, 11, 10, 8, 6, 4, 2, 0, -2, -4, -7, -9, -11, -13, -14, -15, -15, -16, -15, -15, -14, -13, -11, -9, -6, -3, 0, 3, 6, 9, 11, 13, 14], // -20
    [11, 12, 11, 11, 10, 9, 8, 6, 5, 3, 1, -1, -3, -5, -8, -10, -12, -13, -14, -15, -15, -14, -14, -13, -12, -10, -8, -7, -4, -2, 1, 3, 5, 8, 9, 10, 11], // -10
    [9, 10, 9, 9, 8, 7, 6, 4, 3, 1, 0, -2, -4, -6, -8, -10, -12, -13, -14, -14, -14, -13, -12, -11, -9, -8, -6, -5, -3, -1, 1, 3, 5, 7, 8, 9, 9], // 0
    [8, 8, 8, 7, 6, 5, 4, 3, 1, 0, -1, -3, -5, -6, -8, -10, -11, -12, -13, -12, -12, -11, -10, -8, -7, -6, -4, -3, -1, 0, 2, 4, 5, 6, 7, 8, 8], // 10
    [7, 7, 6, 5, 5, 3, 2, 1, 0, -1, -2, -4, -5, -6, -7, -8, -9, -10, -10, -10, -9, -8, -7, -6, -5, -4, -3, -1, 0, 2, 3, 4, 5, 6, 7, 7, 7], // 20
    [6, 6, 5, 4, 3, 2, 1, -1, -2, -3, -4, -5, -5, -6, -7, -7, -8, -8, -8, -7, -7, -6, -5, -4, -3, -2, -1, 0, 2, 3, 4, 5, 5, 6, 6, 6, 6], // 30
    [5, 5, 4, 2, 1, 0, -1, -2, -4, -4, -5, -6, -6, -6, -7, -7, -7, -6, -6, -5, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 6, 6, 6, 6, 5], // 40
    [5, 4, 2, 1, -1, -2, -4, -5, -6, -7, -7, -8, -8, -8, -7, -7, -6, -6, -5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 7, 7, 7, 7, 6, 5], // 50
    [5, 3, 1, -1, -3, -5, -7, -8, -9, -10, -10, -10, -10, -10, -9, -8, -7, -6, -5, -3, -2, 0, 1, 2, 4, 5, 6, 8, 9, 9, 10, 10, 10, 9, 8, 7, 5], // 60
];

/// Magnetic inclination, in degrees (positive down)
#[rustfmt::skip]
pub static INCLINATION_TABLE: [[i16; LON_BANDS]; LAT_BANDS] = [
    [-77, -76, -74, -72, -71, -69, -68, -67, -66, -65, -65, -64, -64, -64, -65, -65, -66, -67, -68, -69, -70, -71, -73, -75, -76, -78, -80, -81, -83, -84, -85, -85, -84, -83, -81, -79, -77], // -60
    [-72, -70, -68, -66, -64, -63, -61, -60, -59, -58, -57, -57, -57, -57, -58, -58, -59, -60, -62, -63, -64, -66, -68, -70, -71, -73, -75, -76, -78, -79, -79, -79, -79, -77, -76, -74, -72], // -50
    [-65, -63, -61, -59, -57, -55, -53, -51, -50, -49, -48, -48, -48, -48, -49, -50, -51, -52, -54, -56, -57, -59, -61, -63, -65, -67, -69, -70, -71, -72, -73, -72, -72, -71, -69, -67, -65], // -40
    [-56, -54, -51, -49, -46, -44, -42, -40, -39, -37, -37, -36, -36, -37, -38, -39, -40, -42, -44, -46, -48, -51, -53, -55, -57, -59, -61, -62, -63, -64, -64, -64, -63, -62, -60, -58, -56], // -30
    [-44, -41, -38, -36, -33, -30, -28, -25, -24, -23, -22, -22, -22, -22, -24, -25, -27, -29, -31, -34, -37, -39, -42, -44, -47, -49, -51, -52, -53, -54, -54, -53, -53, -51, -49, -47, -44], // -20
    [-29, -25, -22, -19, -15, -12, -10, -8, -6, -5, -4, -4, -4, -5, -7, -8, -10, -13, -16, -19, -22, -25, -28, -30, -33, -35, -37, -39, -40, -40, -40, -40, -38, -37, -34, -32, -29], // -10
    [-9, -6, -2, 1, 4, 7, 9, 11, 13, 14, 14, 14, 13, 13, 11, 10, 7, 5, 2, -1, -4, -7, -10, -13, -15, -18, -20, -21, -22, -23, -22, -21, -20, -18, -15, -12, -9], // 0
    [12, 15, 18, 21, 23, 25, 27, 28, 29, 30, 30, 30, 29, 29, 27, 26, 24, 22, 20, 17, 15, 12, 9, 7, 4, 2, 1, -1, -1, -2, -1, 0, 2, 4, 6, 9, 12], // 10
    [31, 33, 36, 37, 39, 40, 42, 42, 43, 43, 43, 43, 42, 42, 41, 40, 38, 37, 35, 33, 31, 29, 27, 25, 24, 22, 21, 20, 20, 20, 20, 21, 23, 25, 27, 29, 31], // 20
    [46, 48, 49, 51, 52, 52, 53, 53, 53, 53, 53, 53, 53, 52, 51, 50, 49, 48, 47, 46, 44, 43, 42, 41, 40, 39, 38, 38, 38, 38, 38, 39, 40, 42, 43, 45, 46], // 30
    [58, 59, 60, 61, 61, 62, 62, 62, 62, 62, 61, 61, 61, 60, 59, 59, 58, 57, 56, 56, 55, 54, 53, 53, 52, 52, 51, 51, 51, 52, 52, 53, 54, 55, 56, 57, 58], // 40
    [68, 68, 69, 69, 69, 69, 69, 69, 69, 69, 68, 68, 67, 67, 66, 66, 65, 65, 64, 64, 63, 63, 62, 62, 62, 62, 62, 62, 62, 63, 63, 64, 65, 65, 66, 67, 68], // 50
    [75, 76, 76, 76, 76, 76, 76, 75, 75, 74, 74, 74, 73, 73, 72, 72, 71, 71, 71, 70, 70, 70, 70, 70, 70, 70, 70, 70, 71, 71, 72, 72, 73, 74, 74, 75, 75], // 60
];

/// Total field strength, in centi-Tesla
#[rustfmt::skip]
pub static STRENGTH_TABLE: [[i16; LON_BANDS]; LAT_BANDS] = [
    [57, 55, 54, 52, 50, 49, 47, 46, 45, 44, 43, 42, 42, 42, 42, 43, 43, 44, 45, 46, 48, 49, 51, 52, 54, 56, 57, 58, 60, 60, 61, 61, 61, 60, 59, 58, 57], // -60
    [55, 53, 51, 48, 46, 45, 43, 41, 40, 39, 38, 37, 37, 37, 37, 38, 38, 39, 41, 42, 44, 45, 47, 49, 51, 53, 55, 57, 58, 59, 60, 60, 60, 59, 58, 56, 55], // -50
    [51, 49, 46, 44, 42, 40, 38, 36, 35, 34, 33, 32, 32, 32, 32, 33, 33, 34, 36, 37, 39, 41, 43, 45, 47, 50, 52, 54, 55, 56, 57, 57, 57, 56, 55, 53, 51], // -40
    [46, 44, 42, 39, 37, 35, 33, 32, 30, 29, 29, 28, 28, 28, 28, 28, 29, 30, 31, 33, 34, 36, 38, 40, 43, 45, 47, 49, 51, 52, 53, 53, 53, 52, 50, 48, 46], // -30
    [41, 39, 37, 35, 33, 31, 30, 28, 27, 26, 25, 25, 25, 24, 25, 25, 25, 26, 27, 29, 30, 32, 34, 36, 38, 40, 42, 44, 46, 47, 48, 48, 47, 46, 45, 43, 41], // -20
    [37, 35, 33, 32, 30, 29, 27, 26, 25, 25, 24, 24, 23, 23, 23, 23, 23, 24, 25, 26, 27, 28, 30, 32, 33, 35, 37, 39, 40, 41, 42, 42, 42, 41, 40, 38, 37], // -10
    [34, 33, 32, 31, 30, 29, 28, 27, 26, 26, 25, 25, 24, 24, 24, 24, 24, 24, 24, 25, 26, 27, 28, 29, 31, 32, 34, 35, 36, 37, 38, 38, 38, 37, 37, 36, 34], // 0
    [35, 35, 34, 33, 33, 32, 31, 30, 30, 29, 28, 28, 27, 27, 26, 26, 26, 26, 26, 27, 27, 28, 28, 29, 30, 31, 33, 34, 35, 36, 36, 37, 37, 37, 36, 36, 35], // 10
    [40, 39, 39, 38, 38, 37, 36, 36, 35, 34, 33, 33, 32, 31, 31, 31, 30, 30, 30, 30, 31, 31, 32, 32, 33, 34, 35, 36, 37, 38, 38, 39, 39, 40, 40, 40, 40], // 20
    [46, 46, 45, 45, 44, 43, 42, 42, 41, 40, 39, 38, 38, 37, 37, 36, 36, 36, 36, 36, 36, 36, 37, 38, 38, 39, 40, 41, 42, 43, 44, 45, 45, 46, 46, 46, 46], // 30
    [53, 53, 52, 51, 51, 50, 49, 48, 47, 46, 45, 44, 44, 43, 43, 42, 42, 42, 42, 42, 42, 43, 43, 44, 45, 46, 47, 48, 49, 50, 50, 51, 52, 52, 53, 53, 53], // 40
    [59, 59, 58, 58, 57, 56, 55, 54, 53, 52, 51, 51, 50, 49, 49, 48, 48, 48, 48, 48, 49, 49, 50, 50, 51, 52, 53, 54, 55, 56, 57, 58, 58, 59, 59, 59, 59], // 50
    [64, 64, 63, 62, 62, 61, 60, 59, 58, 58, 57, 56, 56, 55, 55, 54, 54, 54, 54, 54, 55, 55, 56, 57, 57, 58, 59, 60, 61, 61, 62, 63, 63, 64, 64, 64, 64], // 60
];
