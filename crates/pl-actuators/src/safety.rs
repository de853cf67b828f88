//! Volume guard and level conversion.
//!
//! Accepted range is 0..=100 percent. Out-of-range requests are refused
//! before any implementation touches its state.

use crate::error::{ActuatorError, ActuatorResult};

/// Highest accepted volume percentage.
pub const MAX_VOLUME_PERCENT: i32 = 100;

/// Full scale of one 16-bit audio channel.
const CHANNEL_FULL_SCALE: u32 = 0xFFFF;

/// Check a requested volume and narrow it to a percentage.
pub fn validate_volume(percent: i32) -> ActuatorResult<u8> {
    if (0..=MAX_VOLUME_PERCENT).contains(&percent) {
        // In range, so the cast cannot truncate.
        Ok(percent as u8)
    } else {
        Err(ActuatorError::VolumeOutOfRange { percent })
    }
}

/// Stereo output level for a percentage: the 16-bit channel level is
/// written to both the low (left) and high (right) halves.
pub fn wave_out_level(percent: u8) -> u32 {
    let percent = u32::from(percent.min(100));
    let channel = percent * CHANNEL_FULL_SCALE / 100;
    channel | (channel << 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(validate_volume(0), Ok(0));
        assert_eq!(validate_volume(50), Ok(50));
        assert_eq!(validate_volume(100), Ok(100));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            validate_volume(150),
            Err(ActuatorError::VolumeOutOfRange { percent: 150 })
        );
        assert_eq!(
            validate_volume(-1),
            Err(ActuatorError::VolumeOutOfRange { percent: -1 })
        );
        assert!(validate_volume(101).is_err());
    }

    #[test]
    fn wave_out_levels() {
        assert_eq!(wave_out_level(0), 0);
        assert_eq!(wave_out_level(100), 0xFFFF_FFFF);
        // 50% -> 32767 per channel
        assert_eq!(wave_out_level(50), 0x7FFF_7FFF);
    }
}
