//! Client-side input rules shared by the single check form, the batch
//! uploader and the report form.

use thiserror::Error;

pub const MIN_TEXT_CHARS: usize = 5;
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_BATCH_FILES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text or image required")]
    MissingInput,
    #[error("text shorter than {MIN_TEXT_CHARS} characters")]
    TextTooShort,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingInput => "กรุณากรอกข้อความหรือแนบรูปภาพที่ต้องการตรวจสอบ",
            ValidationError::TextTooShort => "กรุณากรอกข้อความอย่างน้อย 5 ตัวอักษร หรือแนบรูปภาพ",
        }
    }
}

/// What the browser tells us about a picked file before it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("{name}: not an image ({mime})")]
    NotAnImage { name: String, mime: String },
    #[error("{name}: {size} bytes exceeds the upload limit")]
    TooLarge { name: String, size: u64 },
}

impl FileRejection {
    pub fn user_message(&self) -> String {
        match self {
            FileRejection::NotAnImage { name, .. } => {
                format!("{name} ไม่ใช่ไฟล์รูปภาพ")
            }
            FileRejection::TooLarge { name, .. } => {
                format!("{name} มีขนาดเกิน 10MB")
            }
        }
    }
}

/// A check needs either an attached file or at least `MIN_TEXT_CHARS` of
/// trimmed text.
pub fn validate_check_input(text: &str, has_file: bool) -> Result<(), ValidationError> {
    if has_file {
        return Ok(());
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingInput);
    }
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(ValidationError::TextTooShort);
    }
    Ok(())
}

pub fn validate_image_file(meta: &FileMeta) -> Result<(), FileRejection> {
    if !meta.mime.starts_with("image/") {
        return Err(FileRejection::NotAnImage {
            name: meta.name.clone(),
            mime: meta.mime.clone(),
        });
    }
    if meta.size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge {
            name: meta.name.clone(),
            size: meta.size,
        });
    }
    Ok(())
}

pub fn validate_report(content: &str) -> Result<(), ValidationError> {
    validate_check_input(content, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn short_text_without_file_is_rejected() {
        assert_eq!(validate_check_input("", false), Err(ValidationError::MissingInput));
        assert_eq!(validate_check_input("   ", false), Err(ValidationError::MissingInput));
        assert_eq!(validate_check_input(" abcd ", false), Err(ValidationError::TextTooShort));
        assert_eq!(validate_check_input("abcde", false), Ok(()));
    }

    #[test]
    fn thai_text_counts_characters_not_bytes() {
        assert_eq!(validate_check_input("โอนเงิน", false), Ok(()));
        assert_eq!(validate_check_input("โอน", false), Err(ValidationError::TextTooShort));
    }

    #[test]
    fn attached_file_skips_text_rules() {
        assert_eq!(validate_check_input("", true), Ok(()));
    }

    #[test]
    fn file_type_and_size() {
        assert!(validate_image_file(&meta("a.png", "image/png", 1024)).is_ok());
        assert!(validate_image_file(&meta("b.jpg", "image/jpeg", MAX_FILE_BYTES)).is_ok());
        assert!(matches!(
            validate_image_file(&meta("c.jpg", "image/jpeg", MAX_FILE_BYTES + 1)),
            Err(FileRejection::TooLarge { .. })
        ));
        assert!(matches!(
            validate_image_file(&meta("d.pdf", "application/pdf", 10)),
            Err(FileRejection::NotAnImage { .. })
        ));
    }
}
