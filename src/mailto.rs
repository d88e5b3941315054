use std::fmt::Write;

/// Percent-encodes `input` the way `encodeURIComponent` does: unreserved
/// characters pass through, everything else is UTF-8 escaped.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailLink {
    to: String,
    subject: Option<String>,
    body: Option<String>,
}

impl MailLink {
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: address.into(),
            ..Default::default()
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn href(&self) -> String {
        let mut href = format!("mailto:{}", self.to);
        let mut sep = '?';
        if let Some(subject) = &self.subject {
            let _ = write!(href, "{sep}subject={}", encode_component(subject));
            sep = '&';
        }
        if let Some(body) = &self.body {
            let _ = write!(href, "{sep}body={}", encode_component(body));
        }
        href
    }
}

/// Hands the link to the browser's mail handler.
#[cfg(feature = "csr")]
pub fn open(link: &MailLink) {
    let href = link.href();
    if let Err(e) = leptos::prelude::window().location().set_href(&href) {
        log::warn!("could not open mail client: {e:?}");
    }
}

#[cfg(not(feature = "csr"))]
pub fn open(_link: &MailLink) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("abc-XYZ_0.9!~*'()"), "abc-XYZ_0.9!~*'()");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a&b=c?"), "a%26b%3Dc%3F");
        assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_component("•"), "%E2%80%A2");
        assert_eq!(encode_component("https://x/y"), "https%3A%2F%2Fx%2Fy");
    }

    #[test]
    fn test_plain_mail_link() {
        assert_eq!(MailLink::to("me@example.com").href(), "mailto:me@example.com");
    }

    #[test]
    fn test_subject_only() {
        let link = MailLink::to("me@example.com").subject("Custom Booking Request");
        assert_eq!(
            link.href(),
            "mailto:me@example.com?subject=Custom%20Booking%20Request"
        );
    }

    #[test]
    fn test_subject_and_body() {
        let link = MailLink::to("me@example.com").subject("Hi").body("a\nb");
        assert_eq!(link.href(), "mailto:me@example.com?subject=Hi&body=a%0Ab");
    }
}
