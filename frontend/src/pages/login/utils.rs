use crate::api::LoginRequest;

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}
