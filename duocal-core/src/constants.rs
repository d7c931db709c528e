/// Prefix of generated invite codes (`LOVE-ALE-0042`)
pub const DEFAULT_INVITE_PREFIX: &str = "LOVE";

/// Invite code numbers are drawn from `0..=INVITE_NUMBER_MAX`
pub const INVITE_NUMBER_MAX: u32 = 9999;

/// Letters taken from the account name for the invite code
pub const INVITE_NAME_LETTERS: usize = 3;

/// Filler for names with fewer letters than `INVITE_NAME_LETTERS`
pub const INVITE_NAME_FILLER: char = 'X';

/// Name shown for the local user before an account exists
pub const DEFAULT_SELF_NAME: &str = "You";

/// Name given to a partner who was linked without a name
pub const DEFAULT_PARTNER_NAME: &str = "Partner";

/// Clock defaults used by new event drafts
pub const DEFAULT_DRAFT_START: &str = "09:00";
pub const DEFAULT_DRAFT_END: &str = "10:00";

/// Fallbacks for unparseable draft times
pub const FALLBACK_START_HOUR: u32 = 9;
pub const FALLBACK_START_MINUTE: u32 = 0;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3001;
