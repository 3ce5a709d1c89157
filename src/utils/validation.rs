use crate::error::AppError;

pub const NAME_MAX_CHARS: usize = 100;

// Mismo límite que la columna `name VARCHAR(100)`
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("El campo 'name' es obligatorio".to_string()));
    }

    let length = name.chars().count();
    if length > NAME_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "El campo 'name' admite como máximo {} caracteres (recibidos {})",
            NAME_MAX_CHARS, length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(validate_name(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let accented = "ñ".repeat(NAME_MAX_CHARS);
        assert!(validate_name(&accented).is_ok());

        let too_long = "a".repeat(NAME_MAX_CHARS + 1);
        assert!(matches!(validate_name(&too_long), Err(AppError::Validation(_))));
    }

    #[test]
    fn whitespace_is_kept_as_is() {
        assert!(validate_name(" ").is_ok());
        assert!(validate_name("Gadget").is_ok());
    }
}
