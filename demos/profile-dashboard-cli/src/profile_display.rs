// profile-core-client/profile-dashboard-cli
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use profile_core_client::ProfileRecord;

pub struct ProfileCard<'a>(pub &'a ProfileRecord);

trait OptionalField {
    fn or_dash(&self) -> &str;
}

impl OptionalField for Option<String> {
    fn or_dash(&self) -> &str {
        match self.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => "–",
        }
    }
}

impl Display for ProfileCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let profile = self.0;

        write!(
            f,
            r#"
    Id: {}
    Name: {}
    Username: {}
    Email: {}
    Phone: {}
    Website: {}
    Company: {}
    Avatar: {}
    Last updated: {}
    Last seen: {}
    "#,
            profile.id,
            profile.name,
            profile.username.or_dash(),
            profile.email,
            profile.phone.or_dash(),
            profile.website.or_dash(),
            profile.company.or_dash(),
            profile.avatar_url,
            profile.last_updated.to_rfc3339(),
            profile
                .last_seen
                .map(|date| date.to_rfc3339())
                .unwrap_or("–".to_string()),
        )
    }
}
