pub mod entry;

pub use entry::{JoinWaitlist, WaitlistEntry};
