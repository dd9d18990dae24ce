pub mod global_state;
pub mod invoice;
pub mod referral_link;
pub mod user_ledger;
pub mod withdrawal;

pub use global_state::*;
pub use invoice::*;
pub use referral_link::*;
pub use user_ledger::*;
pub use withdrawal::*;
