use crate::notify::ToastKind;
use strum_macros::{Display, EnumString, IntoStaticStr};

pub const SCAM_THRESHOLD: f32 = 0.7;
pub const SUSPICIOUS_THRESHOLD: f32 = 0.4;

/// Three-tier reading of a risk score. Lower bounds are inclusive:
/// 0.7 is already `Scam`, 0.4 is already `Suspicious`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RiskTier {
    Scam,
    Suspicious,
    Safe,
}

impl RiskTier {
    pub fn from_score(score: f32) -> Self {
        if score.is_nan() {
            return RiskTier::Suspicious;
        }
        if score >= SCAM_THRESHOLD {
            RiskTier::Scam
        } else if score >= SUSPICIOUS_THRESHOLD {
            RiskTier::Suspicious
        } else {
            RiskTier::Safe
        }
    }

    /// Tier for a score where higher means more trustworthy (slip trust,
    /// forensics "authentic" confidence).
    pub fn from_trust(trust: f32) -> Self {
        Self::from_score(1.0 - trust)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskTier::Scam => "tier-scam",
            RiskTier::Suspicious => "tier-suspicious",
            RiskTier::Safe => "tier-safe",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Scam => "#dc2626",
            RiskTier::Suspicious => "#f59e0b",
            RiskTier::Safe => "#16a34a",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RiskTier::Scam => "fa-solid fa-triangle-exclamation",
            RiskTier::Suspicious => "fa-solid fa-circle-question",
            RiskTier::Safe => "fa-solid fa-shield-halved",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            RiskTier::Scam => "ระวัง! ความเสี่ยงสูง",
            RiskTier::Suspicious => "น่าสงสัย ควรตรวจสอบเพิ่มเติม",
            RiskTier::Safe => "ไม่พบความเสี่ยงที่ชัดเจน",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskTier::Scam => "อย่าโอนเงิน อย่ากดลิงก์ และอย่าให้ข้อมูลส่วนตัว",
            RiskTier::Suspicious => "ตรวจสอบกับช่องทางทางการก่อนดำเนินการใดๆ",
            RiskTier::Safe => "ยังคงระมัดระวังหากมีการขอข้อมูลส่วนตัวหรือเงิน",
        }
    }

    pub fn toast_kind(self) -> ToastKind {
        match self {
            RiskTier::Scam => ToastKind::Error,
            RiskTier::Suspicious => ToastKind::Warning,
            RiskTier::Safe => ToastKind::Success,
        }
    }

    pub fn toast_message(self) -> &'static str {
        match self {
            RiskTier::Scam => "ตรวจพบความเสี่ยงสูง โปรดระวัง!",
            RiskTier::Suspicious => "พบสัญญาณที่น่าสงสัย",
            RiskTier::Safe => "ไม่พบสัญญาณมิจฉาชีพ",
        }
    }
}

/// Score as a whole percentage clamped to 0..=100 for meters and labels.
pub fn percent(score: f32) -> u8 {
    if score.is_nan() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_upper_tier() {
        assert_eq!(RiskTier::from_score(0.69), RiskTier::Suspicious);
        assert_eq!(RiskTier::from_score(0.70), RiskTier::Scam);
        assert_eq!(RiskTier::from_score(0.39), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(0.40), RiskTier::Suspicious);
    }

    #[test]
    fn extremes_and_nan() {
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(1.0), RiskTier::Scam);
        assert_eq!(RiskTier::from_score(f32::NAN), RiskTier::Suspicious);
    }

    #[test]
    fn trust_scores_invert() {
        assert_eq!(RiskTier::from_trust(0.95), RiskTier::Safe);
        assert_eq!(RiskTier::from_trust(0.1), RiskTier::Scam);
    }

    #[test]
    fn tier_drives_toast_and_copy() {
        assert_eq!(RiskTier::Scam.toast_kind(), ToastKind::Error);
        assert_eq!(RiskTier::Suspicious.toast_kind(), ToastKind::Warning);
        assert_eq!(RiskTier::Safe.toast_kind(), ToastKind::Success);
        assert_eq!(RiskTier::Scam.headline(), "ระวัง! ความเสี่ยงสูง");
        assert_eq!(RiskTier::Scam.to_string(), "scam");
    }

    #[test]
    fn percent_clamps() {
        assert_eq!(percent(0.854), 85);
        assert_eq!(percent(1.7), 100);
        assert_eq!(percent(-0.2), 0);
    }
}
