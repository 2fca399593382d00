pub const DAY_IN_LEDGERS: u32 = 17280;

pub const MAX_INSTANCE_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = MAX_INSTANCE_TTL - DAY_IN_LEDGERS;

pub const MAX_PERSISTENT_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = MAX_PERSISTENT_TTL - DAY_IN_LEDGERS;

pub const MAX_TEMPORARY_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const TEMPORARY_TTL_THRESHOLD: u32 = MAX_TEMPORARY_TTL - DAY_IN_LEDGERS;
