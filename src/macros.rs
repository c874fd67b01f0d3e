//! Helper macros used across the crate.

/// Declare a lazily compiled [`regex::Regex`] static.
///
/// Panics with `$msg` on first use if the pattern does not compile.
macro_rules! lazy_regex {
    ($vis:vis $name:ident = $pattern:expr, $msg:expr $(,)?) => {
        $vis static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).expect($msg));
    };
}
