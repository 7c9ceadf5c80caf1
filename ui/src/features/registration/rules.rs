//! The declarative validation rule set.
//!
//! Each field maps to an ordered list of `(Rule, message)` pairs; the first
//! failing rule supplies the inline message for that field. Rules are pure
//! predicates over the current `FormModel` and nothing else.

use crate::features::registration::types::{Field, FormModel};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 10;

/// The symbols the password policy accepts.
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

pub const PASSWORD_POLICY_MESSAGE: &str = "Password must contain minimum 8 and maximum 10 \
     characters, at least one uppercase letter, one lowercase letter, one number and one \
     special character";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    PasswordPolicy,
    MatchesPassword,
}

pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [(Rule, &'static str)],
}

const NAME_RULES: &[(Rule, &'static str)] = &[
    (Rule::Required, "Required"),
    (Rule::MinLength(NAME_MIN_LEN), "Too Short!"),
    (Rule::MaxLength(NAME_MAX_LEN), "Too Long!"),
];

/// One entry per field, evaluated in order.
pub const RULE_SET: &[FieldRules] = &[
    FieldRules {
        field: Field::FirstName,
        rules: NAME_RULES,
    },
    FieldRules {
        field: Field::LastName,
        rules: NAME_RULES,
    },
    FieldRules {
        field: Field::Email,
        rules: &[
            (Rule::Required, "Required"),
            (Rule::Email, "Invalid Email"),
        ],
    },
    FieldRules {
        field: Field::Password,
        rules: &[
            (Rule::Required, "Required"),
            (Rule::PasswordPolicy, PASSWORD_POLICY_MESSAGE),
        ],
    },
    FieldRules {
        field: Field::ConfirmPassword,
        rules: &[(Rule::MatchesPassword, "Passwords must match")],
    },
];

impl Rule {
    /// Whether `value` satisfies this rule. Cross-field rules read the rest
    /// of the form.
    pub fn check(&self, value: &str, form: &FormModel) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Email => is_valid_email(value),
            Rule::PasswordPolicy => satisfies_password_policy(value),
            Rule::MatchesPassword => value == form.password,
        }
    }
}

pub fn rules_for(field: Field) -> &'static [(Rule, &'static str)] {
    RULE_SET
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.rules)
        .unwrap_or(&[])
}

/// The first failing message for `field`, or `None` when every rule passes.
pub fn first_error(field: Field, form: &FormModel) -> Option<&'static str> {
    let value = form.value_of(field);
    rules_for(field)
        .iter()
        .find(|(rule, _)| !rule.check(value, form))
        .map(|(_, message)| *message)
}

// Basic email validation: exactly one @, a non-empty local part, and a domain
// with at least one dot
fn is_valid_email(value: &str) -> bool {
    let email = value.trim();
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

// Length 8-10 with at least one uppercase letter, one lowercase letter, one
// digit and one symbol; no character outside the policy alphabet
fn satisfies_password_policy(value: &str) -> bool {
    let length = value.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&length) {
        return false;
    }

    let mut has_uppercase = false;
    let mut has_lowercase = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in value.chars() {
        if c.is_ascii_uppercase() {
            has_uppercase = true;
        } else if c.is_ascii_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SYMBOLS.contains(&c) {
            has_symbol = true;
        } else {
            return false;
        }
    }

    has_uppercase && has_lowercase && has_digit && has_symbol
}
