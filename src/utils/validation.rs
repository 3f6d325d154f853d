use url::Url;

/// Escapes the characters HTML treats specially, for safe interpolation
/// into markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }

    out
}

/// Strips complete HTML tags, drops stray dangerous characters and trims
/// surrounding whitespace. An unterminated `<` loses only the bracket; the
/// text after it survives.
pub fn sanitize_input(input: &str) -> String {
    let mut without_tags = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        match rest[start..].find('>') {
            Some(end) => {
                without_tags.push_str(&rest[..start]);
                rest = &rest[start + end + 1..];
            }
            None => break,
        }
    }
    without_tags.push_str(rest);

    let cleaned: String = without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"' | '&'))
        .collect();

    cleaned.trim().to_string()
}

/// Loose email shape check: one `@`, no whitespace, and a dot somewhere
/// inside the domain with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.chars().count() - 1;
    domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsernameCheck {
    pub valid: bool,
    pub message: String,
}

/// Usernames are 3 to 20 characters of ASCII letters, digits and underscores.
pub fn validate_username(username: &str) -> UsernameCheck {
    if username.is_empty() {
        return UsernameCheck {
            valid: false,
            message: "El nombre de usuario no puede estar vacío".to_string(),
        };
    }

    let length = username.chars().count();
    if length < 3 {
        return UsernameCheck {
            valid: false,
            message: "El nombre de usuario debe tener al menos 3 caracteres".to_string(),
        };
    }
    if length > 20 {
        return UsernameCheck {
            valid: false,
            message: "El nombre de usuario no puede tener más de 20 caracteres".to_string(),
        };
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return UsernameCheck {
            valid: false,
            message: "El nombre de usuario solo puede contener letras, números y guiones bajos"
                .to_string(),
        };
    }

    UsernameCheck {
        valid: true,
        message: String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordCheck {
    pub valid: bool,
    pub strength: PasswordStrength,
    pub message: String,
}

/// Grades a password: under 6 characters is rejected, under 8 is accepted
/// as weak, and longer passwords are ranked by how many character classes
/// they mix (upper, lower, digit, punctuation).
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck {
            valid: false,
            strength: PasswordStrength::Weak,
            message: "La contraseña no puede estar vacía".to_string(),
        };
    }

    let length = password.chars().count();
    if length < 6 {
        return PasswordCheck {
            valid: false,
            strength: PasswordStrength::Weak,
            message: "La contraseña debe tener al menos 6 caracteres".to_string(),
        };
    }
    if length < 8 {
        return PasswordCheck {
            valid: true,
            strength: PasswordStrength::Weak,
            message: "Fortaleza de contraseña: Débil".to_string(),
        };
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c));

    let classes = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|present| **present)
        .count();

    if classes < 2 {
        PasswordCheck {
            valid: true,
            strength: PasswordStrength::Weak,
            message: "Fortaleza de contraseña: Débil".to_string(),
        }
    } else if classes < 3 {
        PasswordCheck {
            valid: true,
            strength: PasswordStrength::Medium,
            message: "Fortaleza de contraseña: Media".to_string(),
        }
    } else {
        PasswordCheck {
            valid: true,
            strength: PasswordStrength::Strong,
            message: "Fortaleza de contraseña: Fuerte".to_string(),
        }
    }
}

/// Truncates to at most `max_length` characters.
pub fn limit_length(input: &str, max_length: usize) -> String {
    input.chars().take(max_length).collect()
}

pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
