use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across value objects.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }
        Ok(())
    }

    pub fn validate_template_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidTemplateEntry {
                name: name.into(),
                reason: "name must be non-empty and contain no whitespace".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_names_rejected() {
        assert!(DomainValidator::validate_project_name("").is_err());
        assert!(DomainValidator::validate_project_name("   ").is_err());
    }

    #[test]
    fn dotfile_and_separator_names_rejected() {
        assert!(DomainValidator::validate_project_name(".hidden").is_err());
        assert!(DomainValidator::validate_project_name("a/b").is_err());
        assert!(DomainValidator::validate_project_name("a\\b").is_err());
    }

    #[test]
    fn ordinary_names_pass() {
        for name in ["my-project", "my_app", "project123", "MyApp"] {
            assert!(
                DomainValidator::validate_project_name(name).is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn template_names_cannot_contain_spaces() {
        assert!(DomainValidator::validate_template_name("vue app").is_err());
        assert!(DomainValidator::validate_template_name("vue-app").is_ok());
    }
}
