//! XP and Level system
//!
//! Two parallel tables: `LEVEL_THRESHOLDS[i]` is the XP needed for level
//! `i + 1`, `LEVEL_NAMES[i]` is its title. Thresholds ascend from 0.

pub const LEVEL_THRESHOLDS: [u32; 5] = [0, 100, 300, 600, 1000];

pub const LEVEL_NAMES: [&str; 5] = [
    "New Adventurer",
    "Curious Explorer",
    "Dedicated Seeker",
    "True Ally",
    "Legendary Friend",
];

/// Level for a given XP total (1-based)
pub fn calculate_level(xp: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| xp >= *threshold)
        .map(|i| i as u32 + 1)
        .unwrap_or(1)
}

/// Title for a level, the first title when the level is out of range
pub fn level_name(level: u32) -> &'static str {
    (level as usize)
        .checked_sub(1)
        .and_then(|i| LEVEL_NAMES.get(i))
        .copied()
        .unwrap_or(LEVEL_NAMES[0])
}

/// Progress from the current level's threshold towards the next, 0-100.
/// At max level this is 100.
pub fn level_progress(xp: u32) -> u8 {
    let level = calculate_level(xp) as usize;
    let current = LEVEL_THRESHOLDS[level - 1];
    let Some(next) = LEVEL_THRESHOLDS.get(level).copied() else {
        return 100;
    };

    let needed = (next - current) as f64;
    let progress = (xp - current) as f64;
    ((progress / needed) * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_xp() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(99), 1);
        assert_eq!(calculate_level(100), 2);
        assert_eq!(calculate_level(110), 2);
        assert_eq!(calculate_level(300), 3);
        assert_eq!(calculate_level(999), 4);
        assert_eq!(calculate_level(1000), 5);
        assert_eq!(calculate_level(u32::MAX), 5);
    }

    #[test]
    fn test_level_is_non_decreasing() {
        let mut previous = calculate_level(0);
        for xp in 0..1500 {
            let level = calculate_level(xp);
            assert!(level >= previous, "level dropped at {} xp", xp);
            previous = level;
        }
    }

    #[test]
    fn test_tables_line_up() {
        assert_eq!(LEVEL_THRESHOLDS.len(), LEVEL_NAMES.len());
        assert_eq!(LEVEL_THRESHOLDS[0], 0);
        assert!(LEVEL_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_level_name_clamps() {
        assert_eq!(level_name(1), "New Adventurer");
        assert_eq!(level_name(5), "Legendary Friend");
        assert_eq!(level_name(6), "New Adventurer");
        assert_eq!(level_name(0), "New Adventurer");
    }

    #[test]
    fn test_level_progress() {
        assert_eq!(level_progress(0), 0);
        assert_eq!(level_progress(50), 50);
        assert_eq!(level_progress(200), 50); // 100/200 into level 2
        assert_eq!(level_progress(1000), 100);
        assert_eq!(level_progress(5000), 100);
    }
}
