//! Classification of Django field classes.

/// Field classes that hold a reference to an uploaded file.
const FILE_FIELDS: &[&str] = &["ImageField", "FileField"];

/// Field classes that hold a date, a time, or both.
const TEMPORAL_FIELDS: &[&str] = &["DateField", "DateTimeField", "TimeField"];

/// Coarse category of a model field, derived from its class name.
///
/// Templates only care about two special cases: file fields need `.url` to be
/// displayed and date fields need a date widget in forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    File,
    Temporal,
    Other,
}

impl FieldKind {
    /// Classify a Django field class name (e.g., "ImageField").
    pub fn of(class_name: &str) -> Self {
        if FILE_FIELDS.contains(&class_name) {
            FieldKind::File
        } else if TEMPORAL_FIELDS.contains(&class_name) {
            FieldKind::Temporal
        } else {
            FieldKind::Other
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldKind::File)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldKind::Temporal)
    }
}
