//! VMP Core
//!
//! Platform-agnostic types, traits, and error handling for the VMP audio/video
//! player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MediaKind`, `PlaybackMode`, `Asset`, notification payloads
//! - **Platform Traits**: `MediaEngine`, `MediaPlayer`, `AudioSession`, `AssetBundle`
//! - **Notifications**: `NotificationCenter` with drop-to-unsubscribe handles
//! - **Error Handling**: Unified `VmpError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vmp_core::types::{InterruptionPayload, Notification, Topic};
//! use vmp_core::NotificationCenter;
//!
//! let center = NotificationCenter::new();
//! let subscription = center.subscribe(Topic::Interruption);
//!
//! center.post(Notification::Interruption(InterruptionPayload::began()));
//! assert_eq!(subscription.drain().len(), 1);
//!
//! drop(subscription);
//! assert_eq!(center.observer_count(), 0);
//! ```

#![forbid(unsafe_code)]

pub mod bundle;
pub mod error;
pub mod notifications;
pub mod platform;
pub mod time;
pub mod traits;
pub mod types;

pub use bundle::DirectoryBundle;
pub use error::{Result, VmpError};
pub use notifications::{NotificationCenter, Subscription, SubscriptionId};
pub use platform::Platform;
pub use traits::{AssetBundle, AudioSession, MediaEngine, MediaPlayer};
pub use types::{
    Asset, HandleId, Interruption, InterruptionPayload, LifecycleEvent, MediaKind, Notification,
    PlaybackMode, Rect, SessionCategory, SessionMode, Size, Topic,
};
