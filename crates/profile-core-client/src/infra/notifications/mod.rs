// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channel_notification_source::ChannelNotificationSource;
pub use interval_notification_source::IntervalNotificationSource;
pub use noop_notification_source::NoopNotificationSource;

mod channel_notification_source;
mod interval_notification_source;
mod noop_notification_source;
