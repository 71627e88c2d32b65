#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::regex::Regex;
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($e).unwrap());
        &*PATTERN
    }};
}

/// Same as [`regex!`], but the pattern matches against `&[u8]`.
#[macro_export]
macro_rules! bytes_regex {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::regex::bytes::Regex;
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($e).unwrap());
        &*PATTERN
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_regex_is_reused() {
        let get = || regex!(r"^[A-Z]{2}$");
        assert!(std::ptr::eq(get(), get()));
        assert!(get().is_match("PB"));
        assert!(!get().is_match("PBx"));
    }

    #[test]
    fn test_bytes_regex() {
        let re = bytes_regex!(r"KM\[");
        assert!(re.is_match(b"(;KM[6.5])"));
        assert!(!re.is_match(b"(;RE[B+R])"));
    }
}
