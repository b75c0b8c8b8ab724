//! Proficiency - Layer 3 of the stat system.

/// Proficiency bonus for a character level.
///
/// Formula: `ceil(1 + 0.25 × level)`, evaluated in integer arithmetic so
/// there is no float rounding at quarter boundaries. The function accepts
/// any integer; range checks on user input happen before this is called.
///
/// ```
/// # use sheet_core::proficiency_bonus;
/// assert_eq!(proficiency_bonus(1), 2);
/// assert_eq!(proficiency_bonus(4), 2);
/// assert_eq!(proficiency_bonus(5), 3);
/// assert_eq!(proficiency_bonus(20), 6);
/// ```
pub const fn proficiency_bonus(level: i32) -> i32 {
    let quarters_up = level.div_euclid(4) + (level.rem_euclid(4) != 0) as i32;
    1 + quarters_up
}
