//! Display arithmetic for campaign numbers.

pub const COUNT_UP_DELAY_MS: u32 = 500;
pub const COUNT_UP_TICK_MS: u32 = 20;
pub const COUNT_UP_STEPS: u32 = 100;

/// Reads the numeric value out of a display string such as `"685.400.000₫"`,
/// ignoring every non-digit character.
pub fn parse_amount(display: &str) -> u64 {
    display
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| acc.saturating_mul(10).saturating_add(digit as u64))
}

/// Short Vietnamese rendering: billions as "tỷ", millions as "triệu",
/// smaller amounts with `.` thousands separators.
pub fn format_amount(amount: u64) -> String {
    if amount >= 1_000_000_000 {
        format!("{:.1} tỷ", amount as f64 / 1_000_000_000.0)
    } else if amount >= 1_000_000 {
        format!("{:.0} triệu", amount as f64 / 1_000_000.0)
    } else {
        group_thousands(amount)
    }
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Share of a stretch goal reached, capped at 100.
pub fn goal_progress(current: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (current as f64 / goal as f64 * 100.0).min(100.0)
}

/// Width of the hero funding bar.
pub fn funding_bar_width(percent_funded: f64) -> f64 {
    percent_funded.clamp(0.0, 100.0)
}

/// Width of the "remaining" bar on limited rewards; never thinner than 10%.
pub fn remaining_bar_width(remaining: u32, backers: u32) -> f64 {
    let total = remaining as f64 + backers as f64;
    if total == 0.0 {
        return 10.0;
    }
    (remaining as f64 / total * 100.0).max(10.0)
}

/// Values shown by the animated stretch-goal counter, one per tick.
///
/// Climbs in [`COUNT_UP_STEPS`] equal increments and always ends on `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / COUNT_UP_STEPS as f64,
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_only_digits() {
        assert_eq!(parse_amount("685.400.000₫"), 685_400_000);
        assert_eq!(parse_amount("1,290,000₫"), 1_290_000);
        assert_eq!(parse_amount("n/a"), 0);
    }

    #[test]
    fn amounts_use_vietnamese_units() {
        assert_eq!(format_amount(1_000_000_000), "1.0 tỷ");
        assert_eq!(format_amount(1_260_000_000), "1.3 tỷ");
        assert_eq!(format_amount(685_400_000), "685 triệu");
        assert_eq!(format_amount(590_000), "590.000");
        assert_eq!(format_amount(1_000), "1.000");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(0), "0");
    }

    #[test]
    fn goal_progress_is_capped() {
        assert_eq!(goal_progress(300, 600), 50.0);
        assert_eq!(goal_progress(900, 600), 100.0);
        assert_eq!(goal_progress(5, 0), 100.0);
    }

    #[test]
    fn funding_bar_never_overflows() {
        assert_eq!(funding_bar_width(137.0), 100.0);
        assert_eq!(funding_bar_width(42.5), 42.5);
        assert_eq!(funding_bar_width(-3.0), 0.0);
    }

    #[test]
    fn remaining_bar_has_a_floor() {
        assert_eq!(remaining_bar_width(1, 3), 25.0);
        assert_eq!(remaining_bar_width(1, 999), 10.0);
        assert_eq!(remaining_bar_width(50, 50), 50.0);
    }

    #[test]
    fn count_up_lands_exactly_on_target() {
        let values: Vec<u64> = CountUp::new(685_400_000).collect();
        assert!(values.len() >= COUNT_UP_STEPS as usize);
        assert!(values.len() <= COUNT_UP_STEPS as usize + 1);
        assert_eq!(values.last(), Some(&685_400_000));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values[0], 6_854_000);
    }

    #[test]
    fn count_up_of_zero_finishes_immediately() {
        assert_eq!(CountUp::new(0).collect::<Vec<_>>(), vec![0]);
    }
}
