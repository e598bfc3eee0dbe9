//! Fixtures for the conformance suite.
//!
//! The roster and term lists here are what every check works from.
//! [`FixtureSearch`] is a small grammar used to run the suite on itself.

use narrowbar_core::{
    InMemoryDirectory, NarrowTerm, PeopleDirectory, TermSyntax, User, SEARCH_OPERATOR,
    USER_PILL_OPERATORS,
};
use percent_encoding::percent_decode_str;

use crate::traits::TestableSearch;

pub const ALICE: &str = "alice@example.com";
pub const BOB: &str = "bob@example.com";
/// A guest account.
pub const CAROL: &str = "carol@example.com";
/// A deactivated account.
pub const DAVE: &str = "dave@example.com";
/// An account the viewer cannot see; also inactive.
pub const EVE: &str = "eve@example.com";

/// An address no directory in the suite knows.
pub const UNKNOWN_EMAIL: &str = "nobody@example.invalid";

pub const CAROL_ID: u64 = 3;
pub const DAVE_ID: u64 = 4;
pub const EVE_ID: u64 = 5;

/// Every user the suite refers to.
pub fn roster() -> Vec<User> {
    let mut eve = User::new(EVE_ID, EVE, "Unknown user");
    eve.is_inaccessible_user = true;
    vec![
        User::new(1, ALICE, "Alice Arden"),
        User::new(2, BOB, "Bob Brook"),
        User::new(CAROL_ID, CAROL, "Carol Cho"),
        User::new(DAVE_ID, DAVE, "Dave Dunn"),
        eve,
    ]
}

/// The roster loaded into an in-memory directory with its markings.
pub fn directory() -> InMemoryDirectory {
    let mut directory = InMemoryDirectory::with_users(roster());
    directory.mark_guest(CAROL_ID);
    directory.deactivate(DAVE_ID);
    directory.deactivate(EVE_ID);
    directory
}

/// Distinct terms that every grammar should accept and that become pills.
pub fn pillable_terms() -> Vec<NarrowTerm> {
    vec![
        NarrowTerm::new("channel", "design"),
        NarrowTerm::new("topic", "lunch"),
        NarrowTerm::new("dm", format!("{ALICE},{BOB}")),
        NarrowTerm::new("is", "starred"),
        NarrowTerm::new("sender", CAROL).negate(),
        NarrowTerm::new("has", "link"),
    ]
}

/// Terms every grammar should reject.
pub fn invalid_terms() -> Vec<NarrowTerm> {
    vec![
        NarrowTerm::new("sender", UNKNOWN_EMAIL),
        NarrowTerm::new("dm", format!("{ALICE},{UNKNOWN_EMAIL}")),
        NarrowTerm::new("frobnicate", "widgets"),
    ]
}

pub fn search_term(words: &str) -> NarrowTerm {
    NarrowTerm::new(SEARCH_OPERATOR, words)
}

/// A term whose operator has been typed but whose operand has not.
pub fn partial_term() -> NarrowTerm {
    NarrowTerm::new("dm", "")
}

// ──────────────────────────────────────────────
// FixtureSearch
// ──────────────────────────────────────────────

/// Operators [`FixtureSearch`] understands.
const KNOWN_OPERATORS: &[&str] = &[
    "channel",
    "channels",
    "topic",
    "is",
    "has",
    "near",
    "id",
    "dm",
    "dm-including",
    "sender",
    "search",
];

const IS_OPERANDS: &[&str] = &[
    "dm",
    "starred",
    "mentioned",
    "alerted",
    "unread",
    "resolved",
    "followed",
    "muted",
];

const HAS_OPERANDS: &[&str] = &["link", "image", "attachment", "reaction"];

/// A whitespace-separated `-operator:operand` grammar.
///
/// Operands encode spaces as `+` and use percent escapes for `%` and `+`.
/// Consecutive bare words form one `search` term.
#[derive(Debug, Clone)]
pub struct FixtureSearch {
    people: InMemoryDirectory,
}

impl FixtureSearch {
    pub fn new() -> Self {
        FixtureSearch {
            people: directory(),
        }
    }
}

impl Default for FixtureSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl TestableSearch for FixtureSearch {
    fn syntax(&self) -> &dyn TermSyntax {
        self
    }

    fn people(&self) -> &dyn PeopleDirectory {
        &self.people
    }
}

fn encode_operand(operand: &str) -> String {
    let mut encoded = String::with_capacity(operand.len());
    for c in operand.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '+' => encoded.push_str("%2B"),
            c if c.is_whitespace() => encoded.push('+'),
            c => encoded.push(c),
        }
    }
    encoded
}

fn decode_operand(operand: &str) -> String {
    let spaced = operand.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Split a token into `(negated, operator, operand)` if it has an operator.
fn split_operator(token: &str) -> Option<(bool, &str, &str)> {
    let (negated, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (operator, operand) = body.split_once(':')?;
    if operator.is_empty() {
        return None;
    }
    Some((negated, operator, operand))
}

impl TermSyntax for FixtureSearch {
    fn parse(&self, text: &str) -> Vec<NarrowTerm> {
        let mut terms = Vec::new();
        let mut words: Vec<&str> = Vec::new();
        for token in text.split_whitespace() {
            match split_operator(token) {
                Some((negated, operator, operand)) => {
                    if !words.is_empty() {
                        terms.push(search_term(&words.join(" ")));
                        words.clear();
                    }
                    terms.push(NarrowTerm {
                        operator: operator.to_lowercase(),
                        operand: decode_operand(operand),
                        negated,
                    });
                }
                None => words.push(token),
            }
        }
        if !words.is_empty() {
            terms.push(search_term(&words.join(" ")));
        }
        terms
    }

    fn unparse(&self, terms: &[NarrowTerm]) -> String {
        terms
            .iter()
            .map(|term| {
                if term.is_search() {
                    term.operand.clone()
                } else {
                    let sign = if term.negated { "-" } else { "" };
                    format!("{sign}{}:{}", term.operator, encode_operand(&term.operand))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_valid_search_term(&self, term: &NarrowTerm) -> bool {
        match term.operator.as_str() {
            "search" => true,
            "is" => IS_OPERANDS.contains(&term.operand.as_str()),
            "has" => HAS_OPERANDS.contains(&term.operand.as_str()),
            operator if USER_PILL_OPERATORS.contains(&operator) => {
                !term.operand.is_empty()
                    && term
                        .operand
                        .split(',')
                        .all(|email| self.people.get_by_email(email).is_some())
            }
            operator => KNOWN_OPERATORS.contains(&operator) && !term.operand.is_empty(),
        }
    }
}
