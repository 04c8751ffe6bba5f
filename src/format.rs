//! Display rules for scores, percentages and player names

use unicode_width::UnicodeWidthStr;

/// Whether a score should be shown as a gain or a loss. Zero counts as a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Positive,
    Negative,
}

impl ScoreTone {
    pub fn of(score: f64) -> Self {
        if score >= 0.0 {
            ScoreTone::Positive
        } else {
            ScoreTone::Negative
        }
    }
}

/// Plain number: integers without a decimal point, `-0` shown as `0`
pub fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Score with an explicit `+` on gains; zero carries no sign
pub fn signed_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{}", number(score))
    } else {
        number(score)
    }
}

/// Win percentage to one decimal place
pub fn win_rate_percent(win_rate: f64) -> String {
    format!("{:.1}%", win_rate)
}

/// Left-align `name` in `width` terminal columns.
///
/// Wide (CJK) characters take two columns. Names wider than `width` are left
/// as they are.
pub fn pad_name(name: &str, width: usize) -> String {
    let used = name.width();
    if used >= width {
        name.to_string()
    } else {
        format!("{}{}", name, " ".repeat(width - used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_score() {
        assert_eq!(signed_score(12.0), "+12");
        assert_eq!(signed_score(3.5), "+3.5");
        assert_eq!(signed_score(0.0), "0");
        assert_eq!(signed_score(-0.0), "0");
        assert_eq!(signed_score(-7.0), "-7");
    }

    #[test]
    fn test_score_tone() {
        assert_eq!(ScoreTone::of(4.0), ScoreTone::Positive);
        assert_eq!(ScoreTone::of(0.0), ScoreTone::Positive);
        assert_eq!(ScoreTone::of(-0.5), ScoreTone::Negative);
    }

    #[test]
    fn test_pad_name_uses_display_width() {
        assert_eq!(pad_name("Amy", 6), "Amy   ");
        assert_eq!(pad_name("阿明", 6), "阿明  ");
        assert_eq!(pad_name("阿明", 4), "阿明");
        assert_eq!(pad_name("Alexandria", 4), "Alexandria");
    }

    #[test]
    fn test_win_rate_percent() {
        assert_eq!(win_rate_percent(75.0), "75.0%");
        assert_eq!(win_rate_percent(200.0 / 3.0), "66.7%");
        assert_eq!(win_rate_percent(0.0), "0.0%");
    }
}
