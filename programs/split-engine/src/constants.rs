// Share configuration
pub const BPS_DENOMINATOR: u16 = 10_000;      // 100%
pub const REQUIRED_SPLIT_TOTAL: u16 = 10_000; // Recipients must total 100%

// Recipient limits
pub const MIN_RECIPIENTS: usize = 1;

// Chains the front-end targets
pub const BASE_CHAIN_ID: u64 = 8453;
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

// Cache keys: split:<chain_id>:<identifier>
pub const SPLIT_KEY_PREFIX: &str = "split";

// Payment links: <app_url>/sender?owner=<address>
pub const SENDER_PATH: &str = "/sender";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

// EVM address: "0x" + 40 hex characters
pub const ADDRESS_HEX_LEN: usize = 40;
