//! Intent rule table
//!
//! The builtin table reproduces the production assistant's nine branches as
//! data. Order matters: the first rule with any trigger contained in the
//! lowercased message wins, so overlapping triggers are ordered
//! most-specific-first.

use serde::{Deserialize, Serialize};

/// Intent id reported when no rule matches.
pub const FALLBACK_INTENT_ID: &str = "default";

/// One intent: its id, trigger fragments, and canned response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IntentRule {
    pub id: String,
    pub triggers: Vec<String>,
    pub response: String,
}

impl IntentRule {
    pub fn new(id: &str, triggers: &[&str], response: &str) -> Self {
        Self {
            id: id.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            response: response.to_string(),
        }
    }

    /// True if any trigger fragment occurs in the already-lowercased text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }
}

/// Ordered rule table plus the fallback response.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RuleTable {
    rules: Vec<IntentRule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<IntentRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The production table: seven topical rules, gratitude, and fallback.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                IntentRule::new("tracks", &["track", "program"], TRACKS_RESPONSE),
                IntentRule::new("apply", &["apply", "application"], APPLY_RESPONSE),
                IntentRule::new("eligibility", &["eligib", "criteria"], ELIGIBILITY_RESPONSE),
                IntentRule::new(
                    "accessibility",
                    &["accessib", "blind", "vision"],
                    ACCESSIBILITY_RESPONSE,
                ),
                IntentRule::new("cost", &["cost", "fee", "budget"], COST_RESPONSE),
                IntentRule::new(
                    "partners",
                    &["organization", "vision empower", "i-stem"],
                    PARTNERS_RESPONSE,
                ),
                IntentRule::new("greeting", &["hello", "hi", "hey"], GREETING_RESPONSE),
                IntentRule::new("gratitude", &["thank", "thanks"], GRATITUDE_RESPONSE),
            ],
            FALLBACK_RESPONSE,
        )
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

const TRACKS_RESPONSE: &str = "Vision 30 offers three specialized tracks:\n\n\
• **V30-GEN**: General skill building for Classes 8-10 students (₹12.5 Lacs/year)\n\
• **V30-STEM**: Focused STEM development for Classes 8-10 (₹34 Lacs/year)\n\
• **V30-HED**: Higher education support for Classes 11-12 (₹85,000/student/year)\n\n\
Each track is designed to meet students at their educational stage. Would you like to know more about a specific track?";

const APPLY_RESPONSE: &str = "To apply for Vision 30:\n\n\
1. **School Nomination**: Students are nominated from ~10-15 select special schools\n\
2. **Academic Assessment**: Above-average performance in Science & Math required\n\
3. **Baseline Testing**: Assessment in Aptitude, English, Math, Science, and Computer Science\n\
4. **Motivation Review**: Demonstration of self-drive and commitment\n\n\
Applications are currently being accepted. Visit our Apply page for detailed instructions!";

const ELIGIBILITY_RESPONSE: &str = "Vision 30 eligibility criteria:\n\n\
• **Students**: Classes 8-12 from special schools for visually impaired\n\
• **Academic Performance**: Above-average grades in Science and Mathematics\n\
• **Commitment**: Willingness to dedicate extra time for preparation\n\
• **School Support**: Teacher and principal recommendations required\n\n\
We welcome students with visual impairments who are passionate about STEM fields!";

const ACCESSIBILITY_RESPONSE: &str = "Vision 30 prioritizes accessibility:\n\n\
• **Screen Reader Compatible**: All materials work with NVDA, JAWS\n\
• **Specialized Labs**: Accessible science equipment and tools\n\
• **Assistive Technology**: Latest tools for STEM learning\n\
• **Accessible Formats**: Braille, audio, and tactile materials\n\
• **Trained Instructors**: Teachers skilled in inclusive education\n\n\
Our program is designed specifically for blind and low-vision students!";

const COST_RESPONSE: &str = "Vision 30 program costs:\n\n\
• **V30-GEN**: ₹12.5 Lacs per year\n\
• **V30-STEM**: ₹34 Lacs per year (for 6 students)\n\
• **V30-HED**: ₹85,000 per student per year\n\n\
We work with funding partners and may offer scholarships. Financial assistance options are available for deserving students.";

const PARTNERS_RESPONSE: &str = "Vision 30 is a collaboration between:\n\n\
• **Vision Empower (VE)**: Founded 2017, supports 145 special schools across 15 states\n\
• **I-Stem**: Digital inclusion platform making 96%+ of content accessible\n\n\
Together, we're creating an inclusive STEM education ecosystem for visually impaired students across India.";

const GREETING_RESPONSE: &str = "Hello! I'm the Vision 30 AI Assistant. I'm here to help you learn about our transformative STEM education program for blind and low-vision students. What would you like to know?";

const GRATITUDE_RESPONSE: &str = "You're welcome! I'm always here to help with Vision 30 questions. Feel free to ask about our programs, application process, or accessibility features anytime!";

const FALLBACK_RESPONSE: &str = "I'd be happy to help you with information about Vision 30! I can assist with:\n\n\
• Program tracks and details\n\
• Application process\n\
• Eligibility criteria\n\
• Accessibility features\n\
• Organizations involved\n\
• Costs and funding\n\n\
What specific aspect would you like to learn about?";
