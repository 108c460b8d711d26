use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The field types the form builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    LineText,
    TextArea,
    Number,
    Select,
    Checkbox,
    Radio,
    Toggle,
    Date,
}

impl FieldType {
    /// Normalizes a raw type name: trimmed, case-sensitive exact match
    /// against the known types, with `LineText` as the catch-all.
    ///
    /// The second element is true when the input had to be coerced.
    pub fn normalize(raw: &str) -> (FieldType, bool) {
        match raw.trim() {
            "LineText" => (FieldType::LineText, false),
            "TextArea" => (FieldType::TextArea, false),
            "Number" => (FieldType::Number, false),
            "Select" => (FieldType::Select, false),
            "Checkbox" => (FieldType::Checkbox, false),
            "Radio" => (FieldType::Radio, false),
            "Toggle" => (FieldType::Toggle, false),
            "Date" => (FieldType::Date, false),
            _ => (FieldType::LineText, true),
        }
    }

    /// True for types that carry an options list.
    pub fn has_options(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

/// A selectable option of a `Select` or `Radio` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub text: String,
    pub value: String,
}

/// Responsive grid sizing of a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub xs: u8,
    pub sm: u8,
    pub md: u8,
    pub lg: u8,
    pub xl: u8,
}

impl Default for FieldSize {
    fn default() -> Self {
        FieldSize {
            xs: 12,
            sm: 12,
            md: 6,
            lg: 6,
            xl: 6,
        }
    }
}

/// A fully materialized form-field record, ready for the form builder.
///
/// Constructed once per reconciliation and immutable afterwards. `position`
/// is assigned by the reconciler from final order, never taken from the
/// model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub position: u32,
    pub identifier: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub default_value: String,
    pub group: Option<String>,
    pub size: FieldSize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub suspended: bool,
    pub disabled: bool,
    pub visible: bool,
    pub protected: bool,
    pub options: Option<Vec<FieldOption>>,
    pub help_text: Option<String>,
    pub error: Option<String>,
}

impl FieldDescriptor {
    /// Materializes a descriptor with default metadata.
    ///
    /// `Select` and `Radio` fields are guaranteed a non-empty options list (a
    /// two-entry placeholder is injected when the model omitted them); every
    /// other type carries none, whatever the model supplied.
    pub fn new(
        identifier: String,
        field_type: FieldType,
        position: u32,
        label: String,
        options: Option<Vec<FieldOption>>,
    ) -> Self {
        let options = if field_type.has_options() {
            Some(match options {
                Some(list) if !list.is_empty() => list,
                _ => default_options(),
            })
        } else {
            None
        };

        let now = Utc::now();
        FieldDescriptor {
            position,
            identifier,
            label,
            field_type,
            required: true,
            default_value: String::new(),
            group: None,
            size: FieldSize::default(),
            created_at: now,
            updated_at: now,
            suspended: false,
            disabled: false,
            visible: true,
            protected: false,
            options,
            help_text: None,
            error: None,
        }
    }
}

fn default_options() -> Vec<FieldOption> {
    vec![
        FieldOption {
            text: "Opção 1".to_string(),
            value: "opcao1".to_string(),
        },
        FieldOption {
            text: "Opção 2".to_string(),
            value: "opcao2".to_string(),
        },
    ]
}
