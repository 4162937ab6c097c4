//! Gap extraction — an ordered table of keyword groups, each mapping to a
//! candidate-profile gap.

use serde::{Deserialize, Serialize};

use crate::fit::rules::contains_any;

/// Hard cap on reported gaps.
pub const MAX_GAPS: usize = 3;

/// An area where the profile lacks evidence for the job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitGap {
    pub title: String,
    pub description: String,
}

impl FitGap {
    pub fn new(title: &str, description: &str) -> Self {
        FitGap {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

struct GapRule {
    triggers: &'static [&'static str],
    title: &'static str,
    description: &'static str,
}

/// Declaration order is load-bearing: gaps are reported in this order and
/// truncated to the first `MAX_GAPS`.
const GAP_RULES: &[GapRule] = &[
    GapRule {
        triggers: &["react", "vue", "angular"],
        title: "Frontend Framework Experience",
        description: "Limited experience with modern frontend frameworks like React, Vue, or Angular",
    },
    GapRule {
        triggers: &["docker", "kubernetes", "terraform"],
        title: "DevOps/Infrastructure Tools",
        description: "Limited hands-on experience with Docker, Kubernetes, or infrastructure automation",
    },
    GapRule {
        triggers: &["oracle", "sql server", "mysql"],
        title: "Traditional RDBMS Experience",
        description: "More experience with modern databases (PostgreSQL, MongoDB) than traditional RDBMS",
    },
    GapRule {
        triggers: &["php", "ruby", "go", "rust"],
        title: "Additional Programming Languages",
        description: "Primary experience in Python, JavaScript/TypeScript, Java, C#",
    },
    GapRule {
        triggers: &["mobile", "ios", "android", "native"],
        title: "Native Mobile Development",
        description: "Limited experience with native iOS/Android development",
    },
    GapRule {
        triggers: &["game", "gaming", "unity", "unreal"],
        title: "Game Development/Testing",
        description: "No experience with game development or gaming industry testing",
    },
    GapRule {
        triggers: &["blockchain", "web3", "crypto", "ethereum"],
        title: "Blockchain/Web3 Experience",
        description: "No experience with blockchain, cryptocurrency, or Web3 technologies",
    },
    GapRule {
        triggers: &["embedded", "iot", "firmware"],
        title: "Embedded Systems/IoT",
        description: "Limited experience with embedded systems or IoT device testing",
    },
    GapRule {
        triggers: &["data science", "ml engineer", "data engineer"],
        title: "Data Science/ML Engineering",
        description: "Experience is focused on testing AI/ML systems rather than building them",
    },
    GapRule {
        triggers: &["system admin", "sysadmin", "linux", "bash"],
        title: "System Administration",
        description: "Limited experience with Linux system administration and bash scripting",
    },
    GapRule {
        triggers: &["ui", "ux", "design", "user experience"],
        title: "UI/UX Testing Focus",
        description: "More focused on backend/API testing than UI/UX and user experience testing",
    },
    GapRule {
        triggers: &["cissp", "ceh", "security+", "compliance"],
        title: "Security Certifications",
        description: "No formal security certifications, though practical security testing experience exists",
    },
    GapRule {
        triggers: &["scrum master", "project manager", "agile coach"],
        title: "Project Management",
        description: "Leadership experience is in QA teams rather than full project management roles",
    },
];

/// Extracts profile gaps for a lower-cased job description, in table order,
/// truncated to `MAX_GAPS`.
pub fn extract_gaps(jd_lower: &str) -> Vec<FitGap> {
    GAP_RULES
        .iter()
        .filter(|rule| contains_any(jd_lower, rule.triggers))
        .take(MAX_GAPS)
        .map(|rule| FitGap::new(rule.title, rule.description))
        .collect()
}
