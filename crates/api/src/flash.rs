//! One-shot flash messages carried in a signed cookie.
//!
//! A flash is set on the response that issues a redirect and consumed
//! (read and cleared) by the next rendered page.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

/// Name of the signed flash cookie.
pub const FLASH_COOKIE: &str = "quill_flash";

/// Attach a flash message to the jar.
pub fn set_flash(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, message.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Take the pending flash message, clearing it from the jar.
///
/// Returns the updated jar along with the message, if one was set.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let message = cookie.value().to_string();
    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
    (jar, Some(message))
}
