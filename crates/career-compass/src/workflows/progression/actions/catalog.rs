use super::{ActionRule, RuleCondition};
use crate::workflows::progression::domain::IndustryContext;
use crate::workflows::progression::scoring::ScoreBand;

/// Built-in rule table. Order is significant: it fixes the order actions are emitted in.
pub static STANDARD_RULES: &[ActionRule] = &[
    // Score bands, exactly one fires
    ActionRule {
        key: "band_stretch",
        condition: RuleCondition::ScoreBand(ScoreBand::Stretch),
        actions: &[
            "Take stretch assignments and mentor junior team members.",
            "Lead at least one initiative end-to-end this quarter.",
            "Show decision-making in cross-team topics.",
        ],
    },
    ActionRule {
        key: "band_consolidate",
        condition: RuleCondition::ScoreBand(ScoreBand::Consolidate),
        actions: &[
            "Strengthen 1\u{2013}2 core competencies to reach 4+/5.",
            "Request ownership of a module or feature area.",
        ],
    },
    ActionRule {
        key: "band_foundation",
        condition: RuleCondition::ScoreBand(ScoreBand::Foundation),
        actions: &[
            "Focus on delivery consistency and quality.",
            "Pair with a mentor and set up regular feedback sessions.",
        ],
    },
    // Domain interest
    ActionRule {
        key: "domain_data",
        condition: RuleCondition::DomainMentions(&["data", "analytics"]),
        actions: &[
            "Pursue SQL, Power BI, or Tableau certifications.",
            "Deliver at least one analytics dashboard or report.",
            "Practice data storytelling for business stakeholders.",
        ],
    },
    ActionRule {
        key: "domain_cloud",
        condition: RuleCondition::DomainMentions(&["cloud", "aws", "azure", "gcp"]),
        actions: &[
            "Target an associate-level cloud certification.",
            "Learn CI/CD and infrastructure fundamentals.",
            "Contribute to cloud migration or automation tasks.",
        ],
    },
    ActionRule {
        key: "domain_ai",
        condition: RuleCondition::DomainMentions(&[
            "ai",
            "ml",
            "machine learning",
            "machine-learning",
        ]),
        actions: &[
            "Complete an applied ML course and build 1\u{2013}2 small projects.",
            "Experiment with LLMs to automate team workflows.",
            "Understand basic MLOps concepts.",
        ],
    },
    ActionRule {
        key: "domain_product",
        condition: RuleCondition::DomainMentions(&[
            "product",
            "ba",
            "business analysis",
            "business-analysis",
        ]),
        actions: &[
            "Practice writing crisp user stories and acceptance criteria.",
            "Shadow product discovery or customer calls.",
            "Apply prioritisation frameworks like WSJF or RICE.",
        ],
    },
    ActionRule {
        key: "domain_quality",
        condition: RuleCondition::DomainMentions(&["qa", "test"]),
        actions: &[
            "Learn an automation framework (Selenium, Cypress, Playwright).",
            "Own regression suites and test strategy for a module.",
            "Strengthen API testing skills.",
        ],
    },
    ActionRule {
        key: "domain_architecture",
        condition: RuleCondition::DomainMentions(&["architecture", "design"]),
        actions: &[
            "Study system design patterns and trade-offs.",
            "Lead technical design for at least one feature.",
            "Deepen understanding of non-functional requirements.",
        ],
    },
    ActionRule {
        key: "domain_support",
        condition: RuleCondition::DomainMentions(&["support", "customer"]),
        actions: &[
            "Deepen product & troubleshooting knowledge.",
            "Contribute to knowledge base and runbooks.",
            "Participate in customer feedback analysis.",
        ],
    },
    // Leadership interest
    ActionRule {
        key: "leadership_facilitation",
        condition: RuleCondition::LeadershipInterest,
        actions: &[
            "Facilitate standups or retrospectives under guidance.",
            "Take responsibility for risk and dependency updates.",
        ],
    },
    // Agile / SAFe
    ActionRule {
        key: "domain_agile",
        condition: RuleCondition::DomainMentions(&["agile", "scrum", "safe", "kanban", "lean"]),
        actions: &[
            "Participate actively in PI planning preparation.",
            "Improve backlog refinement and estimation facilitation.",
            "Track team health metrics (velocity, WIP, predictability).",
            "Consider SAFe Scrum Master or POPM certification.",
        ],
    },
    // Career goal
    ActionRule {
        key: "goal_management",
        condition: RuleCondition::CareerGoalMentions(&["manager", "lead"]),
        actions: &[
            "Invest in stakeholder communication and conflict management.",
            "Lead at least one improvement initiative for the team.",
        ],
    },
    ActionRule {
        key: "goal_architect",
        condition: RuleCondition::CareerGoalMentions(&["architect"]),
        actions: &[
            "Own design for complex features or components.",
            "Mentor others on design principles.",
        ],
    },
    ActionRule {
        key: "goal_agile_coach",
        condition: RuleCondition::CareerGoalMentions(&["scrum", "agile"]),
        actions: &[
            "Run retrospectives end-to-end with clear outcomes.",
            "Drive actions from retros back into the backlog.",
        ],
    },
    // Industry, exactly one fires
    ActionRule {
        key: "industry_technology",
        condition: RuleCondition::Industry(IndustryContext::Technology),
        actions: &[
            "Stay current with engineering best practices and new tools.",
            "Increase exposure to system design and scalability topics.",
        ],
    },
    ActionRule {
        key: "industry_consulting",
        condition: RuleCondition::Industry(IndustryContext::Consulting),
        actions: &[
            "Shape problem statements and hypotheses for clients.",
            "Practice slide-making and structured storylines.",
        ],
    },
    ActionRule {
        key: "industry_banking_fintech",
        condition: RuleCondition::Industry(IndustryContext::BankingFintech),
        actions: &[
            "Understand key regulatory concepts (AML, KYC, PCI-DSS).",
            "Strengthen domain skills in payments, lending, or risk.",
        ],
    },
    ActionRule {
        key: "industry_healthcare",
        condition: RuleCondition::Industry(IndustryContext::Healthcare),
        actions: &[
            "Learn key healthcare processes and data privacy needs.",
            "Understand EHR/EMR workflows and quality of care metrics.",
        ],
    },
    ActionRule {
        key: "industry_retail_ecommerce",
        condition: RuleCondition::Industry(IndustryContext::RetailEcommerce),
        actions: &[
            "Use customer analytics to inform feature ideas.",
            "Understand funnel metrics, A/B testing, and experimentation.",
        ],
    },
    ActionRule {
        key: "industry_manufacturing",
        condition: RuleCondition::Industry(IndustryContext::Manufacturing),
        actions: &[
            "Learn basics of supply chain and production workflows.",
            "Identify automation opportunities in existing processes.",
        ],
    },
    ActionRule {
        key: "industry_education",
        condition: RuleCondition::Industry(IndustryContext::Education),
        actions: &[
            "Apply learning design principles to any internal training.",
            "Help create or improve onboarding materials.",
        ],
    },
    ActionRule {
        key: "industry_public_sector",
        condition: RuleCondition::Industry(IndustryContext::PublicSector),
        actions: &[
            "Understand procurement and governance processes.",
            "Document decisions clearly for audit and traceability.",
        ],
    },
];
