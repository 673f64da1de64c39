use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 姓名长度校验：1 <= x <= 100
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.len() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    // 邮箱长度与列宽一致
    if email.len() > 120 {
        return Err("Email must be at most 120 characters");
    }
    Ok(())
}

pub fn validate_course_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Course name must not be empty");
    }
    if name.len() > 100 {
        return Err("Course name must be at most 100 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("mayuri@gmail.com").is_ok());
        assert!(validate_email("prof.mehta+flask@uni.edu.in").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@gmail.com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(120);
        assert!(validate_email(&format!("{local}@gmail.com")).is_err());
    }

    #[test]
    fn test_valid_name() {
        assert!(validate_name("Mayuri Mahajan").is_ok());
        assert!(validate_name("A").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_name_too_long() {
        assert!(validate_name(&"x".repeat(101)).is_err());
        assert!(validate_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_course_name() {
        assert!(validate_course_name("Python Basics").is_ok());
        assert!(validate_course_name("").is_err());
    }
}
