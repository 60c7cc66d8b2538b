use std::sync::LazyLock;

use regex::Regex;

use crate::Salary;

/// Rupees per dollar used for display conversion.
pub const USD_TO_INR: u64 = 82;

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+)k\s*-\s*\$([0-9]+)k").expect("valid range pattern"));
static SINGLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+)k").expect("valid single pattern"));

/// Converts `"$65k - $140k"` or `"$65k"` into lakh notation rounded to the
/// nearest half lakh. Anything else is returned unchanged.
pub fn format_to_inr(salary: &str) -> String {
    if let Some(caps) = RANGE_PATTERN.captures(salary) {
        if let (Some(min), Some(max)) = (to_half_lakhs(&caps[1]), to_half_lakhs(&caps[2])) {
            return format!("₹{}L - ₹{}L", render_halves(min), render_halves(max));
        }
        return salary.to_owned();
    }

    if let Some(caps) = SINGLE_PATTERN.captures(salary) {
        if let Some(value) = to_half_lakhs(&caps[1]) {
            return format!("₹{}L", render_halves(value));
        }
    }

    salary.to_owned()
}

/// Display string for a job's salary range.
pub fn salary_display(salary: &Salary) -> String {
    format_to_inr(&format!(
        "${}k - ${}k",
        thousands(salary.min),
        thousands(salary.max)
    ))
}

/// Display string for one salary bound of the filter sheet.
pub fn salary_bound_display(amount: u64) -> String {
    format_to_inr(&format!("${}k", (amount + 500) / 1000))
}

/// `thousands * 82 / 100` lakh, expressed in half-lakh units with halves
/// rounded up. `None` on overflow.
fn to_half_lakhs(thousands: &str) -> Option<u64> {
    let value: u64 = thousands.parse().ok()?;
    let scaled = value.checked_mul(USD_TO_INR * 2)?.checked_add(50)?;
    Some(scaled / 100)
}

fn render_halves(halves: u64) -> String {
    if halves % 2 == 0 {
        format!("{}", halves / 2)
    } else {
        format!("{}.5", halves / 2)
    }
}

fn thousands(amount: u64) -> String {
    if amount % 1000 == 0 {
        format!("{}", amount / 1000)
    } else {
        format!("{}", amount as f64 / 1000.0)
    }
}
