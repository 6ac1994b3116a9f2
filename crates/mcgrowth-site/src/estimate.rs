//! Break-even math behind the ROI snapshot card.

/// Booked leads needed to cover the monthly fee:
/// `max(1, ceil(monthly_fee / (job_value * close_rate / 100)))`.
///
/// Returns `None` when the expected value per lead is zero or negative
/// (`job_value <= 0` or `close_rate <= 0`), since no number of booked leads
/// covers the fee in that case. The card renders this as "enter your numbers"
/// copy rather than a figure.
pub fn leads_to_cover_fee(job_value: i64, monthly_fee: i64, close_rate: i64) -> Option<i64> {
    let value_per_lead = job_value as f64 * (close_rate as f64 / 100.0);
    if value_per_lead <= 0.0 {
        return None;
    }
    let needed = (monthly_fee.max(0) as f64 / value_per_lead).ceil() as i64;
    Some(needed.max(1))
}

/// Parse a raw text-field value as a whole number, reading an optional sign
/// and then digits and ignoring whatever follows, so "12.5" reads as 12.
/// Empty or non-numeric entries fall back to 0, matching the behavior of a
/// cleared input.
pub fn parse_field(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if i == 0 && (c == '+' || c == '-') {
            end = c.len_utf8();
            continue;
        }
        if c.is_ascii_digit() {
            end = i + 1;
        } else {
            break;
        }
    }
    trimmed[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn typical_roofing_numbers_break_even_on_one_job() {
        // ceil(500 / (8000 * 0.35)) = ceil(0.1786) = 1
        assert_eq!(leads_to_cover_fee(8000, 500, 35), Some(1));
    }

    #[test]
    fn small_jobs_need_more_bookings() {
        // ceil(2000 / (1000 * 0.5)) = 4
        assert_eq!(leads_to_cover_fee(1000, 2000, 50), Some(4));
    }

    #[test]
    fn zero_fee_still_reports_one_lead() {
        assert_eq!(leads_to_cover_fee(8000, 0, 35), Some(1));
    }

    #[test]
    fn negative_fee_is_clamped() {
        assert_eq!(leads_to_cover_fee(8000, -100, 35), Some(1));
    }

    #[test]
    fn zero_job_value_is_undefined() {
        assert_eq!(leads_to_cover_fee(0, 500, 35), None);
    }

    #[test]
    fn zero_close_rate_is_undefined() {
        assert_eq!(leads_to_cover_fee(8000, 500, 0), None);
    }

    #[test]
    fn negative_inputs_are_undefined() {
        assert_eq!(leads_to_cover_fee(-8000, 500, 35), None);
        assert_eq!(leads_to_cover_fee(8000, 500, -35), None);
    }

    #[test]
    fn parse_field_accepts_whole_numbers() {
        assert_eq!(parse_field("8000"), 8000);
        assert_eq!(parse_field(" 35 "), 35);
        assert_eq!(parse_field("-250"), -250);
        assert_eq!(parse_field("+35"), 35);
    }

    #[test]
    fn parse_field_truncates_at_the_first_non_digit() {
        assert_eq!(parse_field("12.5"), 12);
        assert_eq!(parse_field("1e3"), 1);
        assert_eq!(parse_field("40%"), 40);
        assert_eq!(parse_field("-7.9"), -7);
    }

    #[test]
    fn parse_field_defaults_to_zero() {
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field("-"), 0);
        assert_eq!(parse_field(".5"), 0);
    }

    proptest! {
        #[test]
        fn defined_results_are_at_least_one(
            job_value in 1i64..1_000_000,
            monthly_fee in 0i64..1_000_000,
            close_rate in 1i64..=100,
        ) {
            let leads = leads_to_cover_fee(job_value, monthly_fee, close_rate).unwrap();
            prop_assert!(leads >= 1);
        }

        #[test]
        fn raising_the_fee_never_lowers_the_answer(
            job_value in 1i64..1_000_000,
            monthly_fee in 0i64..1_000_000,
            bump in 0i64..1_000_000,
            close_rate in 1i64..=100,
        ) {
            let base = leads_to_cover_fee(job_value, monthly_fee, close_rate).unwrap();
            let bumped = leads_to_cover_fee(job_value, monthly_fee + bump, close_rate).unwrap();
            prop_assert!(bumped >= base);
        }

        #[test]
        fn raising_the_job_value_never_raises_the_answer(
            job_value in 1i64..1_000_000,
            bump in 0i64..1_000_000,
            monthly_fee in 0i64..1_000_000,
            close_rate in 1i64..=100,
        ) {
            let base = leads_to_cover_fee(job_value, monthly_fee, close_rate).unwrap();
            let richer = leads_to_cover_fee(job_value + bump, monthly_fee, close_rate).unwrap();
            prop_assert!(richer <= base);
        }
    }
}
