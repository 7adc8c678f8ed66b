use crate::api::RegisterHrRequest;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub designation: String,
    pub salary: String,
    pub is_working: bool,
    pub age: String,
    pub gender: String,
}

impl RegistrationForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn required_fields(&self) -> [&str; 10] {
        [
            &self.username,
            &self.full_name,
            &self.email,
            &self.phone,
            &self.password,
            &self.address,
            &self.designation,
            &self.salary,
            &self.age,
            &self.gender,
        ]
    }
}

/// Checks the form in a fixed order and reports only the first problem.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterHrRequest, String> {
    if form.required_fields().iter().any(|value| value.trim().is_empty()) {
        return Err("All fields are required".into());
    }

    let username = form.username.as_str();
    if !is_valid_username(username) {
        return Err(
            "Username must be 3-20 characters and can only contain letters, numbers, and underscores"
                .into(),
        );
    }

    let full_name = form.full_name.as_str();
    if !is_valid_full_name(full_name) {
        return Err(
            "Full name must be 2-50 characters and can only contain letters and spaces".into(),
        );
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        return Err("Invalid email address".into());
    }

    let password = form.password.as_str();
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".into());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".into());
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err(
            "Password must contain at least one special character (!@#$%^&* etc.)".into(),
        );
    }

    let phone = form.phone.trim();
    if phone.len() != 11 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone must be exactly 11 digits".into());
    }

    let age = match parse_whole_number(&form.age) {
        Some(age) if age >= 18 => age,
        _ => return Err("Age must be a whole number and above 18".into()),
    };

    let salary = match form.salary.trim().parse::<f64>() {
        Ok(salary) if salary.is_finite() && salary > 0.0 => salary,
        _ => return Err("Salary must be a positive number".into()),
    };

    let address = form.address.trim();
    if address.chars().count() < 10 {
        return Err("Address must be at least 10 characters long".into());
    }

    Ok(RegisterHrRequest {
        username: username.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        password: password.to_string(),
        address: address.to_string(),
        designation: form.designation.trim().to_string(),
        salary,
        is_working: form.is_working,
        age,
        gender: form.gender.clone(),
    })
}

fn is_valid_username(value: &str) -> bool {
    (3..=20).contains(&value.chars().count())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_full_name(value: &str) -> bool {
    (2..=50).contains(&value.chars().count())
        && value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// `local@domain.tld` with no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '@')
        .map(|(i, _)| i)
    else {
        return false;
    };
    let domain = &value[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn parse_whole_number(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            username: "hana_hr".into(),
            full_name: "Hana Reyes".into(),
            email: "hana@example.com".into(),
            phone: "01712345678".into(),
            password: "Secret!123".into(),
            address: "12 Lake Road, Dhaka".into(),
            designation: "HR Manager".into(),
            salary: "55000".into(),
            is_working: true,
            age: "30".into(),
            gender: "Female".into(),
        }
    }

    fn error_for(update: impl FnOnce(&mut RegistrationForm)) -> String {
        let mut form = valid_form();
        update(&mut form);
        validate_registration(&form).unwrap_err()
    }

    #[test]
    fn valid_form_builds_request() {
        let request = validate_registration(&valid_form()).unwrap();
        assert_eq!(request.username, "hana_hr");
        assert_eq!(request.age, 30);
        assert_eq!(request.salary, 55000.0);
        assert!(request.is_working);
    }

    #[test]
    fn missing_field_reported_before_any_format_rule() {
        assert_eq!(
            error_for(|f| {
                f.gender.clear();
                f.username = "x".into();
            }),
            "All fields are required"
        );
    }

    #[test]
    fn username_is_checked_untrimmed() {
        assert!(error_for(|f| f.username = " hana".into()).starts_with("Username must be"));
    }

    #[test]
    fn rules_fire_in_documented_order() {
        assert!(error_for(|f| {
            f.username = "a b".into();
            f.email = "nope".into();
        })
        .starts_with("Username must be 3-20 characters"));
        assert!(error_for(|f| {
            f.full_name = "R2D2".into();
            f.email = "nope".into();
        })
        .starts_with("Full name must be 2-50 characters"));
        assert_eq!(
            error_for(|f| {
                f.email = "hana@example".into();
                f.password = "short".into();
            }),
            "Invalid email address"
        );
        assert_eq!(
            error_for(|f| {
                f.password = "Ab!".into();
                f.phone = "123".into();
            }),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            error_for(|f| f.password = "secret!123".into()),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(
            error_for(|f| f.password = "Secret1234".into()),
            "Password must contain at least one special character (!@#$%^&* etc.)"
        );
        assert_eq!(
            error_for(|f| {
                f.phone = "0171234567".into();
                f.age = "12".into();
            }),
            "Phone must be exactly 11 digits"
        );
        assert_eq!(
            error_for(|f| {
                f.age = "18.5".into();
                f.salary = "-1".into();
            }),
            "Age must be a whole number and above 18"
        );
        assert_eq!(
            error_for(|f| {
                f.salary = "0".into();
                f.address = "short".into();
            }),
            "Salary must be a positive number"
        );
        assert_eq!(
            error_for(|f| f.address = "Dhaka".into()),
            "Address must be at least 10 characters long"
        );
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a @b.c"));
    }

    #[test]
    fn age_accepts_exactly_eighteen() {
        let mut form = valid_form();
        form.age = "18".into();
        assert_eq!(validate_registration(&form).unwrap().age, 18);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form, RegistrationForm::default());
    }
}
