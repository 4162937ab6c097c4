//! Decision policy — turns detected signals into a structured fit assessment.
//!
//! The policy is an ordered rule list, first match wins:
//! 1. (role OR leadership) AND (automation OR ai_ml)  -> Strong Fit
//! 2. mobile AND performance_scale                    -> Weak Fit
//! 3. otherwise                                       -> Potential Fit
//! Strong Fit is checked first and wins even when the Weak Fit conjunction
//! also holds. Callers depend on this ordering.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::fit::gaps::{extract_gaps, FitGap, MAX_GAPS};
use crate::fit::rules::detect_signals;

/// Cap on gaps for a Potential Fit verdict.
const MAX_POTENTIAL_FIT_GAPS: usize = 2;

/// Categorical verdict on profile/JD alignment. Wire names match what the
/// site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitStatus {
    #[serde(rename = "Strong Fit")]
    StrongFit,
    #[serde(rename = "Potential Fit")]
    PotentialFit,
    #[serde(rename = "Weak Fit")]
    WeakFit,
}

/// A matched dimension between the candidate profile and the JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitMatch {
    pub title: String,
    pub description: String,
    pub evidence: String,
}

/// Full assessment returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAssessment {
    pub status: FitStatus,
    pub matches: Vec<FitMatch>,
    pub gaps: Vec<FitGap>,
    pub recommendation: String,
}

/// The fit analyzer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn FitAnalyzer>`. Async so a semantic
/// backend can call the gateway behind the same seam.
#[async_trait]
pub trait FitAnalyzer: Send + Sync {
    async fn analyze(&self, job_description: &str) -> Result<FitAssessment, AppError>;
}

/// Rule-based analyzer. Fast, deterministic, no network.
pub struct RuleFitAnalyzer;

#[async_trait]
impl FitAnalyzer for RuleFitAnalyzer {
    async fn analyze(&self, job_description: &str) -> Result<FitAssessment, AppError> {
        Ok(evaluate_fit(job_description))
    }
}

/// Evaluates the decision policy over a job description.
///
/// Pure and total: any input string yields a valid assessment, and the same
/// input always yields the same output. Blank-input rejection is the
/// handler's job, not the engine's.
pub fn evaluate_fit(job_description: &str) -> FitAssessment {
    let jd = job_description.to_lowercase();
    let signals = detect_signals(&jd);

    if signals.fintech {
        debug!("fintech domain keywords present; verdict unaffected");
    }

    if (signals.role || signals.leadership) && (signals.automation || signals.ai_ml) {
        strong_fit(&jd)
    } else if signals.mobile && signals.performance_scale {
        weak_fit(&jd)
    } else {
        potential_fit(&jd)
    }
}

fn strong_fit(jd_lower: &str) -> FitAssessment {
    let gaps = extract_gaps(jd_lower);

    let mut recommendation = String::from(
        "This is an excellent match for your background. Your 13+ years of experience \
         leading QA teams in similar-stage companies, combined with your comprehensive \
         testing expertise across automation, AI/ML, security, and performance testing, \
         makes you a strong candidate for this role.",
    );
    if !gaps.is_empty() {
        recommendation.push_str(
            " Consider addressing any identified gaps through targeted learning or \
             highlighting transferable skills.",
        );
    }

    FitAssessment {
        status: FitStatus::StrongFit,
        matches: strong_fit_matches(),
        gaps,
        recommendation,
    }
}

fn weak_fit(jd_lower: &str) -> FitAssessment {
    let mut gaps = extract_gaps(jd_lower);

    // The mobile gap must always be present for this verdict, even when three
    // earlier table rows crowded it out.
    if !gaps.iter().any(|gap| gap.title.contains("Mobile")) {
        gaps.insert(
            0,
            FitGap::new(
                "Native Mobile Development",
                "Limited experience with native iOS/Android development and testing",
            ),
        );
        gaps.truncate(MAX_GAPS);
    }

    FitAssessment {
        status: FitStatus::WeakFit,
        matches: weak_fit_matches(),
        gaps,
        recommendation: "This role requires deep mobile testing expertise that doesn't align \
                         well with your current background. Consider roles that leverage your \
                         web automation and leadership experience instead."
            .to_string(),
    }
}

fn potential_fit(jd_lower: &str) -> FitAssessment {
    let mut gaps = extract_gaps(jd_lower);

    if gaps.is_empty() {
        gaps.push(FitGap::new(
            "Industry-Specific Experience",
            "May lack deep experience in this specific industry or domain",
        ));
    }
    gaps.truncate(MAX_POTENTIAL_FIT_GAPS);

    FitAssessment {
        status: FitStatus::PotentialFit,
        matches: potential_fit_matches(),
        gaps,
        recommendation: "There's potential here based on your technical skills, but you may \
                         need to highlight transferable experience. Consider reaching out to \
                         discuss how your QA leadership experience could apply to this role."
            .to_string(),
    }
}

fn fit_match(title: &str, description: &str, evidence: &str) -> FitMatch {
    FitMatch {
        title: title.to_string(),
        description: description.to_string(),
        evidence: evidence.to_string(),
    }
}

/// The Strong Fit catalogue: canned title/description/evidence triples whose
/// evidence text quotes the knowledge base's project and achievement lines.
fn strong_fit_matches() -> Vec<FitMatch> {
    vec![
        fit_match(
            "Test Automation Leadership",
            "Deep expertise in building automated testing frameworks",
            "Built end-to-end test automation framework that reduced regression testing time by 75%",
        ),
        fit_match(
            "AI/ML Testing Experience",
            "Proven track record testing AI/ML products at scale",
            "Led QA for machine learning platform serving 10M+ users, including testing model accuracy and bias",
        ),
        fit_match(
            "Team Leadership & Mentoring",
            "Experience leading QA teams and mentoring junior engineers",
            "Led QA teams at multiple tech companies (Series A-C stage) and mentored junior QA engineers",
        ),
        fit_match(
            "Security Testing Expertise",
            "Comprehensive security testing knowledge and tools",
            "Security testing experience with OWASP ZAP, Burp Suite, and other security testing tools",
        ),
        fit_match(
            "API & Performance Testing",
            "Extensive experience with API and performance testing",
            "API testing (RestAssured), Performance testing (JMeter, Gatling), Load testing (Locust, JMeter)",
        ),
        fit_match(
            "CI/CD Pipeline Integration",
            "Expertise in implementing comprehensive CI/CD testing pipelines",
            "Implemented CI/CD pipelines with comprehensive test automation using Jenkins, GitHub Actions, CircleCI, GitLab CI",
        ),
        fit_match(
            "Cloud Platform Experience",
            "Multi-cloud testing and deployment experience",
            "Experience with AWS, GCP, Azure cloud platforms for testing and deployment",
        ),
    ]
}

/// The single Weak Fit match — the one dimension that still transfers.
fn weak_fit_matches() -> Vec<FitMatch> {
    vec![fit_match(
        "QA Process & Best Practices",
        "Established QA processes and improved product quality",
        "Established QA processes that improved product quality metrics by 40%",
    )]
}

fn potential_fit_matches() -> Vec<FitMatch> {
    vec![
        fit_match(
            "Test Automation Frameworks",
            "Strong experience building automated testing solutions",
            "Built automated testing frameworks using Selenium, Cypress, Playwright",
        ),
        fit_match(
            "CI/CD Pipeline Integration",
            "Experience implementing comprehensive CI/CD testing",
            "Implemented CI/CD pipelines with comprehensive test automation using Jenkins, GitHub Actions",
        ),
    ]
}
