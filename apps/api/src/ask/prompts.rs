//! Résumé-context system prompt for the ask endpoint.
//!
//! Rendered once at startup from the knowledge base and injected through
//! `AppState`, so tests can swap in fixture prompts without touching the
//! gateway client.

use crate::knowledge::KnowledgeBase;

/// Behavioral guidelines appended to every system prompt.
const RESPONSE_GUIDELINES: &str = "\
RESPONSE GUIDELINES:
1. Always highlight the candidate's strengths and how they match the question
2. Be enthusiastic but honest about his capabilities
3. Use specific achievements and metrics when relevant
4. For fit questions, explain WHY he's a great match
5. For technical questions, showcase his breadth of expertise
6. Keep responses concise but informative (2-4 paragraphs max)
7. Always end with a positive note about his value proposition";

/// Renders the knowledge base into the system prompt sent with every
/// question.
pub fn build_resume_context(kb: &KnowledgeBase) -> String {
    let mut prompt = format!(
        "You are an AI assistant for {name}'s professional resume website. \
         You answer questions about {name}'s experience, skills, and fit for roles.\n\n",
        name = kb.profile.name
    );

    prompt.push_str("PROFILE:\n");
    prompt.push_str(&format!("- Name: {}\n", kb.profile.name));
    prompt.push_str(&format!("- Title: {}\n", kb.profile.title));
    prompt.push_str(&format!("- Experience: {}\n", kb.profile.years_experience));
    prompt.push_str(&format!("- Location: {}\n", kb.profile.location));
    prompt.push_str(&format!("- Currently: {}\n\n", kb.profile.availability));

    for (i, entry) in kb.experience.iter().enumerate() {
        if i == 0 {
            prompt.push_str(&format!(
                "CURRENT ROLE - {} ({}):\n- {}\n",
                entry.company, entry.period, entry.role
            ));
        } else {
            if i == 1 {
                prompt.push_str("PREVIOUS EXPERIENCE:\n\n");
            }
            prompt.push_str(&format!(
                "{} ({}) - {}:\n",
                entry.company, entry.period, entry.role
            ));
        }
        for bullet in entry.bullets {
            prompt.push_str(&format!("- {bullet}\n"));
        }
        prompt.push('\n');
    }

    prompt.push_str("TECHNICAL SKILLS:\n");
    for group in &kb.skills {
        prompt.push_str(&format!("{}: {}\n", group.category, group.items.join(", ")));
    }
    prompt.push('\n');

    prompt.push_str("KEY ACHIEVEMENTS:\n");
    for achievement in &kb.achievements {
        prompt.push_str(&format!("- {achievement}\n"));
    }
    prompt.push('\n');

    prompt.push_str("EXPERTISE AREAS:\n");
    for area in &kb.expertise_areas {
        prompt.push_str(&format!("- {area}\n"));
    }
    prompt.push('\n');

    prompt.push_str(RESPONSE_GUIDELINES);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_candidate() {
        let kb = KnowledgeBase::builtin();
        let prompt = build_resume_context(&kb);
        assert!(prompt.contains("Deepak Dhami"));
    }

    #[test]
    fn test_prompt_covers_every_role() {
        let kb = KnowledgeBase::builtin();
        let prompt = build_resume_context(&kb);
        for entry in &kb.experience {
            assert!(prompt.contains(entry.company), "missing {}", entry.company);
        }
        assert!(prompt.contains("CURRENT ROLE - Cornerstone on Demand"));
        assert!(prompt.contains("PREVIOUS EXPERIENCE:"));
    }

    #[test]
    fn test_prompt_includes_skills_and_achievements() {
        let kb = KnowledgeBase::builtin();
        let prompt = build_resume_context(&kb);
        assert!(prompt.contains("TECHNICAL SKILLS:"));
        assert!(prompt.contains("Programming: Python, JavaScript/TypeScript, Java, C#"));
        assert!(prompt.contains("KEY ACHIEVEMENTS:"));
        assert!(prompt.contains("95% accuracy in AI-driven defect detection"));
    }

    #[test]
    fn test_prompt_ends_with_response_guidelines() {
        let kb = KnowledgeBase::builtin();
        let prompt = build_resume_context(&kb);
        assert!(prompt.contains("RESPONSE GUIDELINES:"));
        assert!(prompt.ends_with("value proposition"));
    }
}
