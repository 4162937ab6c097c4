//! Résumé knowledge base — the static structured data behind the whole site.
//!
//! Built once at startup, shared as `Arc<KnowledgeBase>`, never mutated.
//! Consumed by the profile endpoint, the ask system prompt, and (through its
//! project/achievement lines) the fit engine's match catalogue.

use serde::Serialize;

pub mod handlers;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub years_experience: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
}

/// One role on the résumé. Bullets are ordered most-impactful-first, the
/// way the site renders them.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    pub profile: Profile,
    /// Ordered current-first; the first entry is the current role.
    pub experience: Vec<ExperienceEntry>,
    /// Technical skill groups, fed into the ask system prompt.
    pub skills: Vec<SkillGroup>,
    /// The honest Strong / Moderate / Gaps self-assessment the UI renders.
    pub skill_matrix: Vec<SkillGroup>,
    pub achievements: Vec<&'static str>,
    pub expertise_areas: Vec<&'static str>,
    pub education: Education,
    /// Starter questions offered in the ask dialog.
    pub sample_questions: Vec<&'static str>,
}

impl KnowledgeBase {
    /// The candidate's résumé record.
    pub fn builtin() -> Self {
        KnowledgeBase {
            profile: Profile {
                name: "Deepak Dhami",
                title: "Lead Software Development Engineer In Test (Lead SDET)",
                years_experience: "13+ years in QA/SDET roles",
                location: "India",
                availability: "Open to Lead SDET & QA Architect roles",
            },
            experience: vec![
                ExperienceEntry {
                    company: "Cornerstone on Demand",
                    role: "Lead Software Development Engineer In Test",
                    period: "03/2021 – Present",
                    bullets: &[
                        "Pioneered AI-driven regression analysis with 95% accuracy, reducing testing cycle by 40%",
                        "Created and maintained documentation for AI testing procedures",
                        "Proficient in debugging script failures for API and Selenium testing in Java and C#",
                        "Mentored junior QA engineers",
                        "Integrated automated tests into CI/CD pipelines using Azure DevOps and TeamCity",
                        "Non-functional testing (Performance, Security, Accessibility)",
                    ],
                },
                ExperienceEntry {
                    company: "Varian Medical",
                    role: "Senior Test Analyst",
                    period: "12/2017 – 03/2021",
                    bullets: &[
                        "Built Selenium-based automation frameworks in Java and C#",
                        "Implemented JUnit and TestNG for structured test execution",
                        "API testing using Postman and RestAssured",
                        "Security testing with OWASP ZAP, identified 5 critical vulnerabilities including XSS",
                        "Maintained 98% test coverage",
                    ],
                },
                ExperienceEntry {
                    company: "JLT",
                    role: "Automation Specialist",
                    period: "12/2014 – 12/2017",
                    bullets: &[
                        "Developed Selenium framework using C#",
                        "Achieved 98% test coverage for new releases",
                        "Implemented automation in CI with TFS Build Definitions",
                    ],
                },
                ExperienceEntry {
                    company: "Infogain",
                    role: "Test Engineer",
                    period: "06/2011 – 12/2014",
                    bullets: &[
                        "Manual and automated testing",
                        "API testing and validation",
                        "Built testing foundation",
                    ],
                },
            ],
            skills: vec![
                SkillGroup {
                    category: "Programming",
                    items: &["Python", "JavaScript/TypeScript", "Java", "C#"],
                },
                SkillGroup {
                    category: "Testing Tools",
                    items: &[
                        "Selenium",
                        "Cypress",
                        "Playwright",
                        "Appium",
                        "Postman",
                        "RestAssured",
                    ],
                },
                SkillGroup {
                    category: "CI/CD",
                    items: &[
                        "Jenkins",
                        "GitHub Actions",
                        "Azure DevOps",
                        "TeamCity",
                        "GitLab CI",
                    ],
                },
                SkillGroup {
                    category: "Cloud",
                    items: &["AWS", "GCP", "Azure"],
                },
                SkillGroup {
                    category: "Security",
                    items: &["OWASP ZAP", "Burp Suite"],
                },
                SkillGroup {
                    category: "Performance",
                    items: &["JMeter", "Gatling", "Locust"],
                },
                SkillGroup {
                    category: "Accessibility",
                    items: &["Axe", "Wave"],
                },
            ],
            skill_matrix: vec![
                SkillGroup {
                    category: "Strong",
                    items: &[
                        "AI-Driven Test Automation",
                        "Selenium & JAVA Frameworks",
                        "API Testing (Postman, RESTAssured)",
                        "CI/CD Integration (Azure DevOps, TeamCity)",
                        "Test Strategy & Documentation",
                        "Team Mentorship & Leadership",
                    ],
                },
                SkillGroup {
                    category: "Moderate",
                    items: &[
                        "Security Testing (OWASP ZAP)",
                        "Performance Testing",
                        "Accessibility Testing",
                    ],
                },
                SkillGroup {
                    category: "Gaps (I'll tell you)",
                    items: &[
                        "Mobile App Testing",
                        "Load Testing at Scale",
                        "Cloud Infrastructure Testing",
                    ],
                },
            ],
            achievements: vec![
                "95% accuracy in AI-driven defect detection",
                "40% reduction in testing cycle time",
                "Built end-to-end automation frameworks from scratch",
                "Led QA for ML platforms serving millions",
                "Identified critical security vulnerabilities",
                "98% test coverage achievement",
                "Mentored multiple junior engineers",
            ],
            expertise_areas: vec![
                "AI/ML Testing & Validation",
                "Test Automation Architecture",
                "CI/CD Integration",
                "Security Testing (OWASP)",
                "Performance Testing",
                "API Testing",
                "Leadership & Mentoring",
                "Cross-functional Collaboration",
            ],
            education: Education {
                degree: "Bachelor of Technology",
                institution: "Graphic Era University",
                period: "2008 – 2012",
            },
            sample_questions: vec![
                "Would Deepak be good for a Series B startup with complex testing needs?",
                "How did he achieve 95% accuracy in AI-driven testing?",
                "Tell me about his leadership experience.",
                "What kind of automation frameworks has he built?",
            ],
        }
    }
}
