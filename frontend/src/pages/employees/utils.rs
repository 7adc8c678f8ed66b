/// First letter of each name part, e.g. "Aisha Rahman" -> "AR".
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `$12,345` style; a missing or zero salary renders as "-".
pub fn format_salary(salary: Option<f64>) -> String {
    match salary {
        Some(value) if value != 0.0 && value.is_finite() => format!("${}", group_thousands(value)),
        _ => "-".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_part() {
        assert_eq!(initials("Aisha Rahman"), "AR");
        assert_eq!(initials("tanvir  ahmed khan"), "TAK");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn salary_is_grouped_with_dollar_sign() {
        assert_eq!(format_salary(Some(12345.0)), "$12,345");
        assert_eq!(format_salary(Some(1234567.5)), "$1,234,567.5");
        assert_eq!(format_salary(Some(999.0)), "$999");
        assert_eq!(format_salary(Some(0.0)), "-");
        assert_eq!(format_salary(None), "-");
    }

    #[test]
    fn capitalize_upper_cases_first_letter() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize(""), "");
    }
}
