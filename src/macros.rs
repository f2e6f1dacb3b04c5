/// Builds a [`Document`](crate::Document) from section and property literals.
///
/// Values may be any [`ToIni`](crate::ToIni) type. The default section is
/// addressed as `""`.
///
/// ```rust
/// use sini::ini;
///
/// let doc = ini! {
///     "" => { "name" => "demo" },
///     "server" => { "port" => 8080, "debug" => false },
/// };
/// assert_eq!(doc.serialize(), "name=demo\n\n[server]\ndebug=false\nport=8080\n\n");
/// ```
#[macro_export]
macro_rules! ini {
    // Handle empty document
    () => {
        $crate::Document::new()
    };

    // Handle sections
    ($($section:expr => { $($key:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        let mut doc = $crate::Document::new();
        $(
            {
                let _section = doc.section($section);
                $(
                    _section.set($key, $value);
                )*
            }
        )+
        doc
    }};
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn test_ini_macro_empty() {
        assert_eq!(ini!(), Document::new());
    }

    #[test]
    fn test_ini_macro_sections() {
        let doc = ini! {
            "A" => { "c" => 4.5 },
            "" => { "a" => 42, "b" => "asdf" },
            "empty" => {},
        };

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.section_or_fail("").unwrap().get::<i32>("a").unwrap(), 42);
        assert_eq!(doc.section_or_fail("A").unwrap().get::<f64>("c").unwrap(), 4.5);
        assert!(doc.section_or_fail("empty").unwrap().is_empty());
    }
}
