//! Exercise limits and lookup-table sizes
//!
//! Note: lookup tables themselves (codons, colors, ingredients) live next to
//! the exercise that owns them.

// =============================================================================
// Numeric exercises
// =============================================================================

/// Number of squares on a chess board
pub const BOARD_SQUARES: u32 = 64;

/// Largest value representable with standard Roman numerals
pub const ROMAN_MAX: u32 = 3999;

/// Largest secret handshake code (5 bits)
pub const HANDSHAKE_MAX: u32 = 0b11111;

/// Dart board ring radii (inner, middle, outer)
pub const DART_RINGS: [f64; 3] = [1.0, 5.0, 10.0];

// =============================================================================
// Text exercises
// =============================================================================

/// Number of RNA bases in a codon
pub const CODON_LENGTH: usize = 3;

/// Number of characters in an ISBN-10 (dashes excluded)
pub const ISBN_LENGTH: usize = 10;

/// Number of verses in "This is the House that Jack Built"
pub const HOUSE_VERSES: usize = 12;

/// Largest rotational cipher key
pub const MAX_ROTATION: u8 = 26;

// =============================================================================
// Collection drills
// =============================================================================

/// Card value of a Jack
pub const JACK_VALUE: u32 = 11;

/// Highest score that still counts as failing
pub const FAILING_SCORE: f64 = 40.0;

/// Score awarded for a perfect exam
pub const PERFECT_SCORE: f64 = 100.0;

/// Seat letters in a single airline row
pub const SEAT_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Row number airlines skip
pub const SKIPPED_ROW: u32 = 13;

/// Length of a generated ticket code
pub const TICKET_CODE_LENGTH: usize = 12;

/// Starting health of a freshly spawned alien
pub const ALIEN_START_HEALTH: u32 = 3;

// =============================================================================
// Surveys
// =============================================================================

/// Progress callback interval (numbers checked between reports)
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Numbers handed to one rayon task in a survey
pub const SURVEY_CHUNK_SIZE: u64 = 4096;
