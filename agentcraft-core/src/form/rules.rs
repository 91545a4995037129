//! 字段校验规则

use std::sync::LazyLock;

use regex::Regex;

/// 访问地址格式：http(s)://[user[:password]@]host[:port][/path]
///
/// host 可以是 `[::1]` 形式的 IPv6 字面量；path 之后不再限制字符，只要求无空白
const URL_PATTERN: &str = r"^(http|https)://([^\s/@:]+(:[^\s/@]*)?@)?([^\s/:?#@\[\]]+|\[[0-9A-Fa-f:.]+\])(:[0-9]+)?(/\S*)?$";

static URL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(URL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Invalid URL pattern: {e}");
        None
    }
});

/// A synchronous validation rule. `message` is shown when the rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty (whitespace counts as empty)
    Required { message: &'static str },
    /// Value must be an absolute http(s) URL
    Url { message: &'static str },
}

impl Rule {
    /// 返回失败信息，通过时返回 `None`
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Self::Required { message } => value.trim().is_empty().then_some(*message),
            Self::Url { message } => (!is_valid_url(value)).then_some(*message),
        }
    }
}

/// Whether `value` is a `scheme://host[:port][/path]` URL with scheme http or https.
pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.as_ref().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        for url in [
            "https://api.example.com/v1",
            "http://localhost",
            "http://127.0.0.1:8080",
            "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation",
            "http://user:pw@host.internal:9000/path?x=1&y=2",
            "https://example.com/",
            "https://example.com/~user",
            "https://api.example.com/v1/chat;v=2",
            "https://api.example.com/v1/a,b",
            "https://example.com/a*b",
            "https://example.com/path%20x",
            "http://first.last:pw@host.internal/x",
            "http://[::1]:8080/v1",
        ] {
            assert!(is_valid_url(url), "{url} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "",
            "example.com",
            "ftp://example.com",
            "http://",
            "https://exa mple.com",
            "http://host:port",
            "https://example.com/ space",
            " https://example.com",
            "not a url",
            "http://[not-ipv6]/",
            "http://user@/path",
        ] {
            assert!(!is_valid_url(url), "{url} should be invalid");
        }
    }

    #[test]
    fn required_rule_treats_blank_as_empty() {
        let rule = Rule::Required {
            message: "Name is required",
        };
        assert_eq!(rule.check(""), Some("Name is required"));
        assert_eq!(rule.check("   "), Some("Name is required"));
        assert_eq!(rule.check("gpt4proxy"), None);
    }

    #[test]
    fn url_rule_fails_on_empty() {
        let rule = Rule::Url { message: "bad" };
        assert_eq!(rule.check(""), Some("bad"));
        assert_eq!(rule.check("https://a.b"), None);
    }
}
