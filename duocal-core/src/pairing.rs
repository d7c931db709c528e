//! Account creation and partner linking.
//!
//! Linking is a local echo: the invite code typed in for the partner is stored
//! as-is and never checked against the code generated on the other device.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PARTNER_NAME, DEFAULT_SELF_NAME, INVITE_NAME_FILLER, INVITE_NAME_LETTERS,
    INVITE_NUMBER_MAX,
};
use crate::error::Rejection;
use crate::participant::Participant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Participant,
    pub name: String,
    pub invite_code: String,
}

/// Build an invite code: `PREFIX-ABC-0042`.
///
/// `ABC` are the first three letters of the name that have an upper case,
/// padded with `X` when there are fewer. The number is drawn from `0..=9999`.
pub fn invite_code<R: Rng>(prefix: &str, name: &str, rng: &mut R) -> String {
    let mut letters: String = name
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_uppercase())
        .take(INVITE_NAME_LETTERS)
        .collect();
    while letters.chars().count() < INVITE_NAME_LETTERS {
        letters.push(INVITE_NAME_FILLER);
    }

    let number = rng.random_range(0..=INVITE_NUMBER_MAX);
    format!("{}-{}-{:04}", prefix, letters, number)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairingState {
    me: Option<User>,
    partner: Option<User>,
    linked: bool,
}

impl PairingState {
    pub fn new() -> Self {
        PairingState::default()
    }

    /// Create (or replace) the local account with a fresh invite code.
    pub fn create_account<R: Rng>(
        &mut self,
        name: &str,
        prefix: &str,
        rng: &mut R,
    ) -> Result<&User, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::BlankName);
        }

        let user = User {
            id: Participant::Me,
            name: name.to_string(),
            invite_code: invite_code(prefix, name, rng),
        };
        Ok(&*self.me.insert(user))
    }

    /// Record the partner from an invite code they shared.
    pub fn accept_invite(&mut self, partner_name: &str, code: &str) -> Result<&User, Rejection> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Rejection::BlankInviteCode);
        }

        let name = match partner_name.trim() {
            "" => DEFAULT_PARTNER_NAME,
            name => name,
        };

        self.linked = true;
        Ok(&*self.partner.insert(User {
            id: Participant::Partner,
            name: name.to_string(),
            invite_code: code.to_string(),
        }))
    }

    pub fn me(&self) -> Option<&User> {
        self.me.as_ref()
    }

    pub fn partner(&self) -> Option<&User> {
        self.partner.as_ref()
    }

    pub fn user(&self, participant: Participant) -> Option<&User> {
        match participant {
            Participant::Me => self.me(),
            Participant::Partner => self.partner(),
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Name to show for a participant, with placeholders for missing accounts.
    pub fn display_name(&self, participant: Participant) -> &str {
        match (participant, self.user(participant)) {
            (_, Some(user)) => user.name.as_str(),
            (Participant::Me, None) => DEFAULT_SELF_NAME,
            (Participant::Partner, None) => DEFAULT_PARTNER_NAME,
        }
    }
}
