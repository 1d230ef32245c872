use crate::commands::is_reserved;
use crate::error::GogiError;

const MAX_NAME_LEN: usize = 255;

/// Checks that `name` can serve both as a registry key and as a file stem
/// inside the template directory.
pub fn validate_template_name(name: &str) -> Result<(), GogiError> {
    if name.trim().is_empty() {
        return Err(GogiError::MissingArgument("template name"));
    }

    if is_reserved(name) {
        return Err(GogiError::ReservedName(name.to_string()));
    }

    let invalid = |reason| GogiError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.starts_with('-') {
        return Err(invalid("cannot start with '-'"));
    }

    if name.contains("..") {
        return Err(invalid("contains invalid sequence '..'"));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(invalid("cannot contain a path separator"));
    }

    if name.contains('\0') {
        return Err(invalid("contains null byte"));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(invalid("cannot contain whitespace"));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(invalid("is too long (max: 255 characters)"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["node", "rust-cli", "Python3", "go_mod", "web.app"] {
            assert!(validate_template_name(name).is_ok(), "{} rejected", name);
        }
    }

    #[test]
    fn empty_name_is_missing_argument() {
        assert!(matches!(
            validate_template_name(""),
            Err(GogiError::MissingArgument(_))
        ));
        assert!(matches!(
            validate_template_name("   "),
            Err(GogiError::MissingArgument(_))
        ));
    }

    #[test]
    fn reserved_words_are_rejected() {
        for name in ["create", "l", "init", "--force", "ALIAS"] {
            assert!(matches!(
                validate_template_name(name),
                Err(GogiError::ReservedName(_))
            ));
        }
    }

    #[test]
    fn path_like_names_are_rejected() {
        for name in ["../etc", "a/b", "a\\b", "-x", "a b", "nul\0l"] {
            assert!(matches!(
                validate_template_name(name),
                Err(GogiError::InvalidName { .. })
            ));
        }
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_template_name(&long).is_err());
    }
}
