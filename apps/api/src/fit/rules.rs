//! Signal detection — named trigger tables evaluated by substring containment
//! against the lower-cased job description.
//!
//! Matching is deliberately naive: "ai" hits inside "maintain", "ui" inside
//! "intuition". The decision policy in `engine` was tuned against this
//! behavior, so tightening to word boundaries would shift verdicts.

/// Role keywords signalling an SDET / QA position.
pub const ROLE_TRIGGERS: &[&str] = &["sdet", "lead", "qa", "quality"];

/// Test-automation tooling keywords.
pub const AUTOMATION_TRIGGERS: &[&str] = &["automation", "selenium", "cypress"];

/// AI/ML keywords.
pub const AI_ML_TRIGGERS: &[&str] = &["ai", "ml", "machine learning"];

/// Leadership keywords.
pub const LEADERSHIP_TRIGGERS: &[&str] = &["lead", "mentor", "team"];

/// Fintech-domain keywords. Detected and logged, but never changes the verdict.
pub const FINTECH_TRIGGERS: &[&str] = &["fintech", "financial", "series b"];

/// Mobile-platform keywords.
pub const MOBILE_TRIGGERS: &[&str] = &["mobile", "ios", "android", "native"];

/// Performance-and-scale keywords.
pub const PERFORMANCE_SCALE_TRIGGERS: &[&str] = &["performance", "scale", "million"];

/// Boolean signals extracted from one job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JdSignals {
    pub role: bool,
    pub automation: bool,
    pub ai_ml: bool,
    pub leadership: bool,
    pub fintech: bool,
    pub mobile: bool,
    pub performance_scale: bool,
}

/// True if any trigger occurs as a substring. `jd_lower` must already be
/// lower-cased — triggers are stored lower-case.
pub fn contains_any(jd_lower: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| jd_lower.contains(trigger))
}

/// Evaluates every trigger table against the lower-cased job description.
pub fn detect_signals(jd_lower: &str) -> JdSignals {
    JdSignals {
        role: contains_any(jd_lower, ROLE_TRIGGERS),
        automation: contains_any(jd_lower, AUTOMATION_TRIGGERS),
        ai_ml: contains_any(jd_lower, AI_ML_TRIGGERS),
        leadership: contains_any(jd_lower, LEADERSHIP_TRIGGERS),
        fintech: contains_any(jd_lower, FINTECH_TRIGGERS),
        mobile: contains_any(jd_lower, MOBILE_TRIGGERS),
        performance_scale: contains_any(jd_lower, PERFORMANCE_SCALE_TRIGGERS),
    }
}
