//! Subscription Use Cases
//!
//! Subscriptions are written by registration; callers can only read theirs.

mod get_subscription;

pub use get_subscription::GetSubscriptionUseCase;
