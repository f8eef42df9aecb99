//! Form fields and built-in constraint validation.

/// Input type of a form field, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
}

/// One named control of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value as the page sanitizes it: email inputs drop surrounding
    /// whitespace, every other kind is taken verbatim.
    fn sanitized_value(&self) -> &str {
        match self.kind {
            FieldKind::Email => self.value.trim(),
            _ => &self.value,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let value = self.sanitized_value();
        if value.is_empty() {
            if self.required {
                return Err(ValidationError::ValueMissing {
                    field: self.name.clone(),
                });
            }
            return Ok(());
        }
        if self.kind == FieldKind::Email && !is_valid_email(value) {
            return Err(ValidationError::TypeMismatch {
                field: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// First constraint a form failed. Shown through the page's native
/// validation UI, never as an application error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out the {field} field.")]
    ValueMissing { field: String },

    #[error("Please enter a valid email address in the {field} field.")]
    TypeMismatch { field: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::ValueMissing { field } | ValidationError::TypeMismatch { field } => {
                field
            }
        }
    }
}

/// Ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current value of the field named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Set the value of the field named `name`. Returns false if there is
    /// no such field.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Check every field in document order and report the first failure.
    pub fn check_validity(&self) -> Result<(), ValidationError> {
        self.fields.iter().try_for_each(FormField::validate)
    }

    /// Blank every field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

/// `local@domain` with the character rules of an HTML email input.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}
