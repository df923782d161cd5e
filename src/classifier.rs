use serde::Serialize;

pub const DEFAULT_PURPOSE: &str = "Manipulate decision-making";
pub const DEFAULT_COUNTER: &str = "I need to think about this independently.";

/// `(trigger, purpose)` pairs, tested in order.
pub const PURPOSE_TRIGGERS: &[(&str, &str)] = &[
    ("What keeps you up at night", "Create anxiety about retirement"),
    ("How would you feel if you outlived", "Fear-based motivation"),
    ("What's your biggest financial regret", "Find emotional triggers"),
    ("When you say it's too expensive", "Overcome price objections"),
    ("I hear you saying you want to think", "Prevent delay tactics"),
    ("This rate is only guaranteed", "Create artificial urgency"),
    ("When we set up your account", "Assume the sale is done"),
];

/// `(trigger, counter-script)` pairs, tested in order.
pub const COUNTER_TRIGGERS: &[(&str, &str)] = &[
    ("What keeps you up at night", "I'll share my concerns when I'm ready."),
    ("How would you feel if you outlived", "Let's focus on facts, not fears."),
    (
        "What's your biggest financial regret",
        "That's personal. Let's discuss your services.",
    ),
    (
        "When you say it's too expensive",
        "Price is important to me. What are my alternatives?",
    ),
    (
        "I hear you saying you want to think",
        "Yes, I need time to research independently.",
    ),
    (
        "This rate is only guaranteed",
        "I don't make financial decisions under pressure.",
    ),
    ("When we set up your account", "Stop. I haven't agreed to anything yet."),
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub purpose: &'static str,
    pub counter: &'static str,
}

#[must_use]
pub fn classify(script: &str) -> Classification {
    let haystack = script.to_lowercase();
    Classification {
        purpose: first_match(&haystack, PURPOSE_TRIGGERS).unwrap_or(DEFAULT_PURPOSE),
        counter: first_match(&haystack, COUNTER_TRIGGERS).unwrap_or(DEFAULT_COUNTER),
    }
}

fn first_match(haystack: &str, table: &[(&'static str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(trigger, _)| haystack.contains(&trigger.to_lowercase()))
        .map(|(_, output)| *output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumptive_close_trigger() {
        let got = classify("When we set up your account next week...");
        assert_eq!(got.purpose, "Assume the sale is done");
        assert_eq!(got.counter, "Stop. I haven't agreed to anything yet.");
    }

    #[test]
    fn empty_input_gets_defaults() {
        let got = classify("");
        assert_eq!(got.purpose, DEFAULT_PURPOSE);
        assert_eq!(got.counter, DEFAULT_COUNTER);
    }

    #[test]
    fn unmatched_script_gets_defaults() {
        let got = classify("I'll need your signature here to begin...");
        assert_eq!(
            got,
            Classification {
                purpose: DEFAULT_PURPOSE,
                counter: DEFAULT_COUNTER,
            }
        );
    }

    #[test]
    fn matching_ignores_case() {
        let got = classify("THIS RATE IS ONLY GUARANTEED until market close today...");
        assert_eq!(got.purpose, "Create artificial urgency");
        assert_eq!(got.counter, "I don't make financial decisions under pressure.");
    }

    #[test]
    fn trigger_embedded_in_longer_text_still_matches() {
        let got = classify("so... what keeps you up at nighttime, honestly?");
        assert_eq!(got.purpose, "Create anxiety about retirement");
    }

    #[test]
    fn earlier_trigger_wins_when_several_match() {
        let got = classify(
            "When we set up your account, what keeps you up at night about the fees?",
        );
        assert_eq!(got.purpose, "Create anxiety about retirement");
        assert_eq!(got.counter, "I'll share my concerns when I'm ready.");
    }

    #[test]
    fn tables_cover_the_same_triggers_in_the_same_order() {
        let purpose: Vec<_> = PURPOSE_TRIGGERS.iter().map(|(t, _)| *t).collect();
        let counter: Vec<_> = COUNTER_TRIGGERS.iter().map(|(t, _)| *t).collect();
        assert_eq!(purpose, counter);
    }
}
