// profile-core-client/profile-core-client
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::form_urlencoded;

pub const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Returns the uppercased first letters of the first two whitespace-separated tokens of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Builds the avatar image URL for `name`. Renderers rely on the result being a pure function
/// of the name.
pub fn avatar_url(name: &str) -> String {
    let initials: String = form_urlencoded::byte_serialize(initials(name).as_bytes()).collect();
    format!(
        "{}?name={}&background=0D8ABC&color=fff&size=128",
        AVATAR_SERVICE_URL, initials
    )
}
