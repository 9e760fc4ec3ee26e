use crate::api::ApiResult;
use crate::models::{BatchImageResponse, BatchSummary};
use crate::notify::Toast;
use crate::validation::{validate_image_file, FileMeta, FileRejection, MAX_BATCH_FILES};

/// Files picked for a batch upload. `F` is the platform file handle (a
/// `gloo_file::File` plus its preview in the browser); it is handed back on
/// removal so the caller can release whatever it owns.
#[derive(Debug)]
pub struct BatchSelection<F> {
    entries: Vec<BatchEntry<F>>,
    next_id: u64,
}

#[derive(Debug)]
pub struct BatchEntry<F> {
    pub id: u64,
    pub meta: FileMeta,
    pub handle: F,
}

/// What happened to a set of candidates offered to the selection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AdmitReport {
    pub added: Vec<u64>,
    pub rejected: Vec<FileRejection>,
    pub truncated: usize,
}

impl<F> Default for BatchSelection<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> BatchSelection<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Invalid files are rejected individually; valid files past the cap are
    /// dropped and only counted.
    pub fn admit<I>(&mut self, candidates: I) -> AdmitReport
    where
        I: IntoIterator<Item = (FileMeta, F)>,
    {
        let mut report = AdmitReport::default();

        for (meta, handle) in candidates {
            if let Err(rejection) = validate_image_file(&meta) {
                log::warn!("Skipping file: {}", rejection);
                report.rejected.push(rejection);
                continue;
            }
            if self.entries.len() >= MAX_BATCH_FILES {
                report.truncated += 1;
                continue;
            }
            let id = self.next_id;
            self.next_id += 1;
            self.entries.push(BatchEntry { id, meta, handle });
            report.added.push(id);
        }

        report
    }

    pub fn remove(&mut self, id: u64) -> Option<F> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).handle)
    }

    pub fn clear(&mut self) -> Vec<F> {
        self.entries.drain(..).map(|entry| entry.handle).collect()
    }

    pub fn entries(&self) -> &[BatchEntry<F>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_BATCH_FILES.saturating_sub(self.entries.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining_slots() == 0
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|entry| entry.meta.size).sum()
    }
}

/// In-flight batch submissions. Only the response to the newest request is
/// applied; earlier ones are dropped when they land.
#[derive(Debug, Default)]
pub struct BatchRequests {
    latest: u64,
    loading: bool,
}

/// What the uploader shows once the newest request settles.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResolution {
    pub toast: Toast,
    pub response: Option<BatchImageResponse>,
}

impl BatchRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.loading = true;
        self.latest
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn resolve(
        &mut self,
        request: u64,
        result: ApiResult<BatchImageResponse>,
    ) -> Option<BatchResolution> {
        if request != self.latest {
            log::debug!("Dropping stale batch response #{}", request);
            return None;
        }
        self.loading = false;

        match result {
            Ok(response) => {
                if !response.is_consistent() {
                    log::warn!(
                        "Batch {} returned {} rows for {} images",
                        response.batch_id,
                        response.results.len(),
                        response.summary.total
                    );
                }
                Some(BatchResolution {
                    toast: summary_toast(&response.summary),
                    response: Some(response),
                })
            }
            Err(error) => {
                log::error!("Batch request failed: {}", error);
                Some(BatchResolution {
                    toast: Toast::error(error.user_message()),
                    response: None,
                })
            }
        }
    }
}

pub fn summary_toast(summary: &BatchSummary) -> Toast {
    if summary.scam_count > 0 {
        Toast::error(format!(
            "พบรูปที่มีความเสี่ยง {} จาก {} รูป",
            summary.scam_count, summary.total
        ))
    } else {
        Toast::success(format!("ตรวจสอบเสร็จสิ้น {} รูป", summary.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CONNECTION_ERROR_MESSAGE};
    use crate::models::{BatchItem, BatchOutcome};
    use crate::notify::ToastKind;
    use crate::validation::MAX_FILE_BYTES;

    fn image(name: &str) -> (FileMeta, String) {
        (
            FileMeta {
                name: name.into(),
                mime: "image/png".into(),
                size: 2048,
            },
            name.to_string(),
        )
    }

    #[test]
    fn selection_never_exceeds_cap() {
        let mut selection = BatchSelection::new();
        let first = selection.admit((0..7).map(|i| image(&format!("{i}.png"))));
        assert_eq!(first.added.len(), 7);

        let second = selection.admit((7..15).map(|i| image(&format!("{i}.png"))));
        assert_eq!(second.added.len(), 3);
        assert_eq!(second.truncated, 5);
        assert_eq!(selection.len(), MAX_BATCH_FILES);
        assert!(selection.is_full());

        let third = selection.admit(vec![image("late.png")]);
        assert!(third.added.is_empty());
        assert_eq!(third.truncated, 1);
        assert_eq!(selection.len(), MAX_BATCH_FILES);
    }

    #[test]
    fn invalid_files_are_rejected_not_sent() {
        let mut selection = BatchSelection::new();
        let report = selection.admit(vec![
            image("ok.png"),
            (
                FileMeta {
                    name: "big.jpg".into(),
                    mime: "image/jpeg".into(),
                    size: MAX_FILE_BYTES + 1,
                },
                "big.jpg".to_string(),
            ),
            (
                FileMeta {
                    name: "notes.txt".into(),
                    mime: "text/plain".into(),
                    size: 10,
                },
                "notes.txt".to_string(),
            ),
        ]);

        assert_eq!(report.added.len(), 1);
        assert_eq!(report.rejected.len(), 2);
        let names: Vec<_> = selection.entries().iter().map(|e| e.handle.as_str()).collect();
        assert_eq!(names, vec!["ok.png"]);
    }

    #[test]
    fn remove_and_clear_return_handles() {
        let mut selection = BatchSelection::new();
        let report = selection.admit(vec![image("a.png"), image("b.png")]);

        assert_eq!(selection.remove(report.added[0]), Some("a.png".to_string()));
        assert_eq!(selection.remove(report.added[0]), None);
        assert_eq!(selection.clear(), vec!["b.png".to_string()]);
        assert!(selection.is_empty());
        assert_eq!(selection.remaining_slots(), MAX_BATCH_FILES);
    }

    fn batch(scam_count: usize, total: usize) -> BatchImageResponse {
        BatchImageResponse {
            batch_id: format!("batch-{scam_count}-{total}"),
            summary: BatchSummary {
                total,
                scam_count,
                safe_count: total - scam_count,
                manipulated_count: 0,
            },
            results: (0..total)
                .map(|i| BatchItem {
                    filename: format!("{i}.png"),
                    outcome: BatchOutcome::Success {
                        is_scam: i < scam_count,
                        risk_score: if i < scam_count { 0.9 } else { 0.1 },
                        category: String::new(),
                        reason: String::new(),
                        is_manipulated: false,
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn only_newest_batch_response_is_applied() {
        let mut requests = BatchRequests::new();
        let first = requests.begin();
        let second = requests.begin();

        assert!(requests.resolve(first, Ok(batch(2, 3))).is_none());
        assert!(requests.is_loading());

        let resolution = requests.resolve(second, Ok(batch(0, 4))).unwrap();
        assert!(!requests.is_loading());
        assert_eq!(resolution.response.unwrap().summary.total, 4);
    }

    #[test]
    fn scam_hits_raise_an_error_toast() {
        let mut requests = BatchRequests::new();
        let request = requests.begin();

        let resolution = requests.resolve(request, Ok(batch(2, 5))).unwrap();

        assert_eq!(resolution.toast.kind, ToastKind::Error);
        assert_eq!(resolution.toast.message, "พบรูปที่มีความเสี่ยง 2 จาก 5 รูป");
    }

    #[test]
    fn clean_batch_reports_success() {
        let toast = summary_toast(&batch(0, 3).summary);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "ตรวจสอบเสร็จสิ้น 3 รูป");
    }

    #[test]
    fn failed_batch_shows_connection_message() {
        let mut requests = BatchRequests::new();
        let request = requests.begin();

        let resolution = requests
            .resolve(request, Err(ApiError::Network("offline".into())))
            .unwrap();

        assert_eq!(resolution.toast.kind, ToastKind::Error);
        assert_eq!(resolution.toast.message, CONNECTION_ERROR_MESSAGE);
        assert!(resolution.response.is_none());
        assert!(!requests.is_loading());
    }
}
