// Host-side tests for the scripted chat rules.

use folio_core::{reply_for, ChatLog, CHAT_RULES, FALLBACK_REPLY};

#[test]
fn skill_in_any_case_gets_skills_reply() {
    for msg in ["skill", "SKILLS?", "What SkIlLs do you have", "softskill"] {
        assert_eq!(reply_for(msg), CHAT_RULES[1].reply, "{msg}");
    }
}

#[test]
fn unmatched_input_gets_fallback() {
    for msg in ["", "qwerty", "good morning", "42"] {
        assert_eq!(reply_for(msg), FALLBACK_REPLY, "{msg}");
    }
}

#[test]
fn each_rule_matches_its_keywords() {
    assert_eq!(reply_for("Hello there"), CHAT_RULES[0].reply);
    assert_eq!(reply_for("any projects?"), CHAT_RULES[2].reply);
    assert_eq!(reply_for("years of EXPERIENCE"), CHAT_RULES[3].reply);
    assert_eq!(reply_for("how long, in years"), CHAT_RULES[3].reply);
    assert_eq!(reply_for("Contact"), CHAT_RULES[4].reply);
    assert_eq!(reply_for("universe"), CHAT_RULES[5].reply);
}

#[test]
fn first_matching_rule_wins() {
    // "hi" is a plain substring match, so it also catches words like "this"
    assert_eq!(reply_for("is this a project?"), CHAT_RULES[0].reply);
    assert_eq!(reply_for("project skill"), CHAT_RULES[1].reply);
}

#[test]
fn log_trims_and_skips_blank_messages() {
    let mut log = ChatLog::default();
    assert_eq!(log.submit("   "), None);
    assert_eq!(log.submit("\thello \n").as_deref(), Some("hello"));
    log.push_bot("hi!");
    assert_eq!(log.len(), 2);
}
