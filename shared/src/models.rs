use serde::{Deserialize, Serialize};

/// Result of a single text/image check as returned by the detection API.
///
/// The wire payload carries `forensics` and `slip_verification` as loose
/// optional fields; they are folded into `panels` on the way in so renderers
/// match on a closed set of variants instead of probing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DetectionWire", into = "DetectionWire")]
pub struct DetectionResponse {
    pub request_id: String,
    pub is_scam: bool,
    pub risk_score: f32,
    pub category: String,
    pub reason: String,
    pub ocr_text: Option<String>,
    pub panels: Vec<AnalysisPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPanel {
    Forensics(ForensicsReport),
    Slip(SlipVerification),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForensicsReport {
    pub is_manipulated: bool,
    pub confidence: f32,
    #[serde(default)]
    pub ela_score: Option<f32>,
    #[serde(default)]
    pub metadata_flags: Vec<String>,
    #[serde(default)]
    pub compression_score: Option<f32>,
    #[serde(default)]
    pub cloning_detected: bool,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipVerification {
    pub is_authentic: bool,
    pub trust_score: f32,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub transferred_at: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize)]
struct DetectionWire {
    request_id: String,
    is_scam: bool,
    risk_score: f32,
    #[serde(default)]
    category: String,
    #[serde(default, alias = "reasoning")]
    reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ocr_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    forensics: Option<ForensicsReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slip_verification: Option<SlipVerification>,
}

impl From<DetectionWire> for DetectionResponse {
    fn from(wire: DetectionWire) -> Self {
        let mut panels = Vec::new();
        if let Some(forensics) = wire.forensics {
            panels.push(AnalysisPanel::Forensics(forensics));
        }
        if let Some(slip) = wire.slip_verification {
            panels.push(AnalysisPanel::Slip(slip));
        }

        Self {
            request_id: wire.request_id,
            is_scam: wire.is_scam,
            risk_score: wire.risk_score,
            category: wire.category,
            reason: wire.reason,
            ocr_text: wire.ocr_text.filter(|text| !text.trim().is_empty()),
            panels,
        }
    }
}

impl From<DetectionResponse> for DetectionWire {
    fn from(response: DetectionResponse) -> Self {
        let mut forensics = None;
        let mut slip_verification = None;
        for panel in response.panels {
            match panel {
                AnalysisPanel::Forensics(report) => forensics = Some(report),
                AnalysisPanel::Slip(slip) => slip_verification = Some(slip),
            }
        }

        Self {
            request_id: response.request_id,
            is_scam: response.is_scam,
            risk_score: response.risk_score,
            category: response.category,
            reason: response.reason,
            ocr_text: response.ocr_text,
            forensics,
            slip_verification,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchImageResponse {
    pub batch_id: String,
    pub summary: BatchSummary,
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scam_count: usize,
    pub safe_count: usize,
    #[serde(default)]
    pub manipulated_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub filename: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Success {
        is_scam: bool,
        risk_score: f32,
        #[serde(default)]
        category: String,
        #[serde(default, alias = "reasoning")]
        reason: String,
        #[serde(default)]
        is_manipulated: bool,
    },
    Error {
        #[serde(default)]
        error: String,
    },
}

impl BatchImageResponse {
    /// Every submitted image must come back as exactly one row.
    pub fn is_consistent(&self) -> bool {
        self.results.len() == self.summary.total
    }

    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|item| matches!(item.outcome, BatchOutcome::Error { .. }))
            .count()
    }
}

/// One page of an admin listing. `total` is the server-side row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionLog {
    pub id: String,
    pub created_at: String,
    #[serde(default)]
    pub input_preview: String,
    #[serde(default)]
    pub input_type: String,
    pub is_scam: bool,
    pub risk_score: f32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub partner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackLog {
    pub id: String,
    pub request_id: String,
    pub created_at: String,
    pub is_correct: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerStats {
    pub partner_id: String,
    pub name: String,
    pub total_requests: u64,
    pub scam_detected: u64,
    #[serde(default)]
    pub last_active: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: u64,
    #[serde(default)]
    pub avg_risk_score: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_detections: u64,
    pub scam_detected: u64,
    pub safe_detected: u64,
    #[serde(default)]
    pub feedback_count: u64,
    #[serde(default)]
    pub active_partners: u64,
    #[serde(default)]
    pub detections_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicStats {
    pub total_checks: u64,
    pub scams_detected: u64,
    #[serde(default)]
    pub reports_received: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub content: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub report_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub request_id: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub warning_signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_without_optional_payloads_has_no_panels() {
        let raw = r#"{
            "request_id": "r-1",
            "is_scam": true,
            "risk_score": 0.85,
            "category": "banking_scam",
            "reasoning": "urgent transfer with shortened link"
        }"#;
        let response: DetectionResponse = serde_json::from_str(raw).unwrap();

        assert!(response.panels.is_empty());
        assert_eq!(response.reason, "urgent transfer with shortened link");
        assert_eq!(response.ocr_text, None);
    }

    #[test]
    fn detection_folds_forensics_and_slip_into_panels() {
        let raw = r#"{
            "request_id": "r-2",
            "is_scam": false,
            "risk_score": 0.2,
            "category": "safe",
            "reason": "ok",
            "ocr_text": "   ",
            "forensics": {"is_manipulated": true, "confidence": 0.9, "cloning_detected": true},
            "slip_verification": {"is_authentic": true, "trust_score": 0.8, "bank": "KBANK"}
        }"#;
        let response: DetectionResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.ocr_text, None);
        assert_eq!(response.panels.len(), 2);
        assert!(matches!(
            &response.panels[0],
            AnalysisPanel::Forensics(report) if report.cloning_detected
        ));
        assert!(matches!(
            &response.panels[1],
            AnalysisPanel::Slip(slip) if slip.bank.as_deref() == Some("KBANK")
        ));
    }

    #[test]
    fn batch_items_decode_by_status() {
        let raw = r#"{
            "batch_id": "b-1",
            "summary": {"total": 2, "scam_count": 1, "safe_count": 0, "manipulated_count": 1},
            "results": [
                {"filename": "a.png", "status": "success", "is_scam": true, "risk_score": 0.9,
                 "category": "fake_slip", "reason": "edited", "is_manipulated": true},
                {"filename": "b.png", "status": "error", "error": "unreadable image"}
            ]
        }"#;
        let response: BatchImageResponse = serde_json::from_str(raw).unwrap();

        assert!(response.is_consistent());
        assert_eq!(response.failed_count(), 1);
        assert_eq!(
            response.results[1].outcome,
            BatchOutcome::Error {
                error: "unreadable image".into()
            }
        );
    }

    #[test]
    fn batch_with_missing_rows_is_flagged() {
        let response = BatchImageResponse {
            batch_id: "b-2".into(),
            summary: BatchSummary {
                total: 3,
                scam_count: 0,
                safe_count: 1,
                manipulated_count: 0,
            },
            results: vec![BatchItem {
                filename: "only.png".into(),
                outcome: BatchOutcome::Error {
                    error: "timeout".into(),
                },
            }],
        };

        assert!(!response.is_consistent());
    }

    #[test]
    fn login_response_accepts_access_token_field() {
        let login: LoginResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(login.token, "abc");
    }
}
