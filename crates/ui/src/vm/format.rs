/// `65` -> `"65%"`.
#[must_use]
pub fn percent_label(value: u8) -> String {
    format!("{value}%")
}

/// One decimal place, as shown next to the star icon.
#[must_use]
pub fn rating_label(rating: f32) -> String {
    format!("{rating:.1}")
}

/// Share of `unlocked` in `total`, rounded half up. An empty list is 0%.
#[must_use]
pub fn completion_percentage(unlocked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let unlocked = unlocked.min(total);
    let percent = (unlocked * 100 + total / 2) / total;
    u8::try_from(percent).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_zero_percent() {
        assert_eq!(completion_percentage(0, 0), 0);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(completion_percentage(4, 8), 50);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(8, 8), 100);
    }

    #[test]
    fn labels() {
        assert_eq!(percent_label(0), "0%");
        assert_eq!(percent_label(100), "100%");
        assert_eq!(rating_label(4.8), "4.8");
        assert_eq!(rating_label(5.0), "5.0");
    }
}
