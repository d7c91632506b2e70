//! Pattern matchers compiled once per process

/// Compile a regular expression on first use and hand back the same
/// `&'static Regex` on every subsequent call from that site.
macro_rules! regex {
    ($pattern:expr) => {{
        static REGEX: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
