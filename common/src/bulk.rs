//! Simulated progress for the bulk upload view.

/// Points added on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Interval between ticks.
pub const PROGRESS_INTERVAL_MS: u32 = 200;

pub const CSV_HEADER: &str = "certificate_id,name,roll_no,course,marks,issue_date,institution";

pub const JSON_EXAMPLE: &str = r#"[
  {
    "certificate_id": "CERT-001",
    "name": "John Doe",
    "roll_no": "CS001",
    "course": "Computer Science",
    "marks": "85%",
    "issue_date": "2023-06-15",
    "institution": "State University"
  }
]"#;

/// Extensions offered by the bulk file picker. The file is never parsed.
pub const BULK_ACCEPT: &str = ".csv,.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTick {
    /// Progress moved to the contained value.
    Advanced(u8),
    /// Progress had already reached 100; the interval should be dropped.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkUpload {
    pub file_name: Option<String>,
    pub progress: u8,
    pub uploading: bool,
}

impl BulkUpload {
    pub fn select_file(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    pub fn can_start(&self) -> bool {
        self.file_name.is_some() && !self.uploading
    }

    /// Resets progress to 0 and starts uploading. Returns `false` without a
    /// file or while an upload is already running.
    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.uploading = true;
        self.progress = 0;
        true
    }

    pub fn tick(&mut self) -> ProgressTick {
        if !self.uploading || self.progress >= 100 {
            self.uploading = false;
            return ProgressTick::Finished;
        }
        self.progress = (self.progress + PROGRESS_STEP).min(100);
        ProgressTick::Advanced(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_climbs_in_steps_of_ten_then_stops() {
        let mut upload = BulkUpload::default();
        upload.select_file("batch.csv");
        assert!(upload.start());

        let mut seen = vec![upload.progress];
        loop {
            match upload.tick() {
                ProgressTick::Advanced(value) => seen.push(value),
                ProgressTick::Finished => break,
            }
        }

        let expected: Vec<u8> = (0..=10).map(|step| step * 10).collect();
        assert_eq!(seen, expected);
        assert!(seen.windows(2).all(|pair| pair[1] == pair[0] + PROGRESS_STEP));
        assert!(!upload.uploading);
        assert_eq!(upload.progress, 100);
        assert_eq!(upload.tick(), ProgressTick::Finished);
    }

    #[test]
    fn start_requires_a_file_and_an_idle_upload() {
        let mut upload = BulkUpload::default();
        assert!(!upload.start());

        upload.select_file("batch.json");
        assert!(upload.start());
        assert!(!upload.start());
    }

    #[test]
    fn restart_after_completion_resets_progress() {
        let mut upload = BulkUpload::default();
        upload.select_file("batch.csv");
        upload.start();
        while upload.tick() != ProgressTick::Finished {}

        assert!(upload.start());
        assert_eq!(upload.progress, 0);
        assert_eq!(upload.tick(), ProgressTick::Advanced(10));
    }
}
