use crate::buffer::SaveBuffer;
use crate::checksum;
use crate::core_api::{CoreError, CoreErrorCode, CoreResult};
use crate::layout::EXPECTED_SIZE;

pub fn has_expected_size(buf: &SaveBuffer) -> bool {
    buf.len() == EXPECTED_SIZE
}

/// Pass/fail view of the main checksum. Any error (e.g. a truncated file) counts as a failure.
pub fn has_valid_main_checksum(buf: &SaveBuffer) -> bool {
    match checksum::validate_main(buf) {
        Ok(valid) => valid,
        Err(err) => {
            tracing::debug!(error = %err, "main checksum could not be evaluated");
            false
        }
    }
}

pub fn require_expected_size(buf: &SaveBuffer) -> CoreResult<()> {
    if has_expected_size(buf) {
        return Ok(());
    }
    Err(CoreError::new(
        CoreErrorCode::UnexpectedSize,
        format!(
            "save is {:#x} bytes, expected {EXPECTED_SIZE:#x}",
            buf.len()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_checks_agree() {
        let ok = SaveBuffer::new(vec![0; EXPECTED_SIZE]);
        assert!(has_expected_size(&ok));
        assert!(require_expected_size(&ok).is_ok());

        let short = SaveBuffer::new(vec![0; EXPECTED_SIZE - 1]);
        assert!(!has_expected_size(&short));
        assert_eq!(
            require_expected_size(&short).unwrap_err().code,
            CoreErrorCode::UnexpectedSize
        );
    }

    #[test]
    fn main_checksum_probe_never_fails() {
        assert!(!has_valid_main_checksum(&SaveBuffer::default()));

        let mut buf = SaveBuffer::new(vec![0; EXPECTED_SIZE]);
        assert!(!has_valid_main_checksum(&buf));
        checksum::fix_main(&mut buf).unwrap();
        assert!(has_valid_main_checksum(&buf));
    }
}
