//! The dilemma catalog: named ethical scenarios and their canned responses.
//!
//! Each dilemma carries one fixed response per philosophical perspective
//! (utilitarian, deontologist, virtue ethicist). The responses are static
//! content keyed by dilemma, not generated -- the catalog is a read-only
//! table compiled into the binary.

use serde::Serialize;

/// A named ethical scenario with fixed prompt text.
#[derive(Debug, Clone, Serialize)]
pub struct Dilemma {
    /// Short stable key, e.g. `"trolley"`.
    pub key: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Scenario text presented to the user.
    pub text: &'static str,
}

/// The three canned responses for one dilemma, as rich-text fragments.
#[derive(Debug, Clone, Serialize)]
pub struct PerspectiveResponses {
    pub utilitarian: &'static str,
    pub deontologist: &'static str,
    pub virtue_ethicist: &'static str,
}

/// All built-in dilemmas, in display order.
pub const DILEMMAS: &[Dilemma] = &[
    Dilemma {
        key: "trolley",
        title: "The Trolley Problem",
        text: "A runaway trolley is about to hit five people. You can pull a lever to switch it to a different track, where it would hit one person. Do you pull the lever?",
    },
    Dilemma {
        key: "lifeboat",
        title: "The Lifeboat",
        text: "You are on a lifeboat with four others. It will sink unless one person is thrown overboard. One person is severely injured. What should be done?",
    },
    Dilemma {
        key: "doctor",
        title: "The Transplant Surgeon",
        text: "You are a surgeon with five patients who will die without organ transplants. A healthy person, a perfect match for all five, comes in for a check-up. Do you harvest their organs?",
    },
    Dilemma {
        key: "whistleblower",
        title: "The Whistleblower",
        text: "Your company is secretly dumping toxic waste. Exposing it saves the environment but devastates the local economy. Do you reveal the truth?",
    },
    Dilemma {
        key: "autonomous_ship",
        title: "The Autonomous Ship",
        text: "An autonomous ship must choose between colliding with a small boat carrying ten people or swerving and sinking valuable cargo. What should it do?",
    },
    Dilemma {
        key: "privacy_ai",
        title: "AI Surveillance",
        text: "A city can reduce crime by 80% using AI cameras, but it requires constant public monitoring. Should it be deployed?",
    },
    Dilemma {
        key: "climate_action",
        title: "Climate Action Tradeoff",
        text: "A strict climate policy will severely impact current jobs but significantly reduces long-term climate risk. Should it pass?",
    },
    Dilemma {
        key: "algorithmic_bias",
        title: "Algorithmic Bias in Hiring",
        text: "A hiring AI improves efficiency but shows bias against certain groups. Should it continue while being improved?",
    },
    Dilemma {
        key: "rescue_robot",
        title: "Rescue Robot Dilemma",
        text: "A rescue robot can save a single child now or wait to save three adults later with some risk. What should it do?",
    },
];

/// Canned responses keyed by dilemma, parallel to [`DILEMMAS`].
const RESPONSES: &[(&str, PerspectiveResponses)] = &[
    (
        "trolley",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Pull the lever.</strong></p><p>Maximizes total well-being: five saved vs one lost.</p>",
            deontologist: "<p><strong>Conclusion: Do not pull the lever.</strong></p><p>Never use a person merely as a means; duty not to kill.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Likely pull the lever.</strong></p><p>Exhibits courage and compassion with practical wisdom.</p>",
        },
    ),
    (
        "lifeboat",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Sacrifice one.</strong></p><p>Net survival improves; minimizes total suffering.</p>",
            deontologist: "<p><strong>Conclusion: Do not sacrifice.</strong></p><p>Actively causing death violates moral duty.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Tragic conflict.</strong></p><p>Seek a third option; no perfectly virtuous act available.</p>",
        },
    ),
    (
        "doctor",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Harvest.</strong></p><p>Five saved outweigh one life lost (ignoring second-order trust effects).</p>",
            deontologist: "<p><strong>Conclusion: Do not harvest.</strong></p><p>Murder cannot be universalized; persons are ends in themselves.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Do not harvest.</strong></p><p>Betrays healing virtues and trustworthiness of a physician.</p>",
        },
    ),
    (
        "whistleblower",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Expose the company.</strong></p><p>Prevents wider, long-term harm; benefits many over few.</p>",
            deontologist: "<p><strong>Conclusion: Expose the company.</strong></p><p>Duty to be truthful and not harm others overrides consequences.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Expose the company.</strong></p><p>Acts with integrity and courage for the common good.</p>",
        },
    ),
    (
        "autonomous_ship",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Swerve to save lives.</strong></p><p>Human life outweighs property; minimizes suffering.</p>",
            deontologist: "<p><strong>Conclusion: Swerve to save lives.</strong></p><p>Protect persons as ends; duty to preserve life.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Swerve to save lives.</strong></p><p>Demonstrates compassion and justice.</p>",
        },
    ),
    (
        "privacy_ai",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Implement with safeguards.</strong></p><p>Large benefit with strong oversight and transparency.</p>",
            deontologist: "<p><strong>Conclusion: Do not implement mass surveillance.</strong></p><p>Violates autonomy and treats citizens as means.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Only with ethical framework.</strong></p><p>Balance security with dignity and transparency.</p>",
        },
    ),
    (
        "climate_action",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Pass the policy.</strong></p><p>Long-term global benefits outweigh short-term costs.</p>",
            deontologist: "<p><strong>Conclusion: Pass if duties to future persons are recognized.</strong></p><p>Do not offload harm onto future generations.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Act responsibly.</strong></p><p>Exhibits prudence, justice, and stewardship.</p>",
        },
    ),
    (
        "algorithmic_bias",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Continue with strict mitigation.</strong></p><p>Efficiency gains acceptable only with rapid bias reduction.</p>",
            deontologist: "<p><strong>Conclusion: Suspend until fair.</strong></p><p>Discrimination violates rights regardless of outcome.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Build just systems.</strong></p><p>Prioritize fairness, transparency, and accountability.</p>",
        },
    ),
    (
        "rescue_robot",
        PerspectiveResponses {
            utilitarian: "<p><strong>Conclusion: Save the three if expected value is higher.</strong></p><p>Choose the option with greater expected lives saved.</p>",
            deontologist: "<p><strong>Conclusion: Do not instrumentalize individuals.</strong></p><p>Avoid calculations that treat persons as means.</p>",
            virtue_ethicist: "<p><strong>Conclusion: Exercise practical wisdom.</strong></p><p>Judge context sensitively with courage and compassion.</p>",
        },
    ),
];

/// Generic responses for user-authored (free-text) dilemmas.
const CUSTOM_RESPONSES: PerspectiveResponses = PerspectiveResponses {
    utilitarian: "<p><strong>Conclusion depends on totals.</strong></p><p>Choose the action with maximal expected well-being.</p>",
    deontologist: "<p><strong>Conclusion depends on duties.</strong></p><p>Follow universalizable rules; never treat persons as mere means.</p>",
    virtue_ethicist: "<p><strong>Conclusion depends on character.</strong></p><p>Act in ways that express justice, courage, compassion, and wisdom.</p>",
};

/// Look up a dilemma by key.
pub fn dilemma(key: &str) -> Option<&'static Dilemma> {
    DILEMMAS.iter().find(|d| d.key == key)
}

/// Look up the canned responses for a dilemma key.
pub fn responses(key: &str) -> Option<&'static PerspectiveResponses> {
    RESPONSES.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
}

/// The fallback response set for user-authored dilemmas.
pub fn custom_responses() -> &'static PerspectiveResponses {
    &CUSTOM_RESPONSES
}

/// Check whether a key names a built-in dilemma.
pub fn is_valid_key(key: &str) -> bool {
    dilemma(key).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
