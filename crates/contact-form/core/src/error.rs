//! Field validation failures

use thiserror::Error;

/// Every way a contact form field can fail validation.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("※この項目は必須です")]
    Required,

    #[error("※正しいメールアドレスを入力してください")]
    EmailFormat,

    #[error("※電話番号は数字で入力してください（ハイフンは任意）")]
    TelFormat,

    #[error("※正しい電話番号を入力してください（ハイフンは任意）")]
    TelLength,
}

impl FieldError {
    /// Short machine-readable name, used in logs and by the JS helpers
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::EmailFormat => "email_format",
            FieldError::TelFormat => "tel_format",
            FieldError::TelLength => "tel_length",
        }
    }
}
