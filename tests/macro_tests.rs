use sini::{ini, Document};

#[test]
fn test_ini_macro_empty() {
    let doc = ini!();
    assert_eq!(doc, Document::new());
    assert!(doc.is_empty());
}

#[test]
fn test_ini_macro_mixed_values() {
    let doc = ini! {
        "" => { "name" => "demo", "ratio" => 0.5 },
        "server" => {
            "port" => 8080u16,
            "debug" => false,
            "banner" => "  welcome  ",
            "mode" => 'r',
        },
    };

    let server = doc.section_or_fail("server").unwrap();
    assert_eq!(server.get::<u16>("port").unwrap(), 8080);
    assert!(!server.get::<bool>("debug").unwrap());
    assert_eq!(server.get::<char>("mode").unwrap(), 'r');
    assert_eq!(doc.default_section().get::<f64>("ratio").unwrap(), 0.5);

    assert_eq!(
        doc.serialize(),
        "name=demo\nratio=0.5\n\n\
         [server]\nbanner=\"  welcome  \"\ndebug=false\nmode=r\nport=8080\n\n"
    );
}

#[test]
fn test_ini_macro_repeated_section_merges() {
    let doc = ini! {
        "s" => { "a" => 1 },
        "s" => { "a" => 2, "b" => 3 },
    };
    assert_eq!(doc.section_or_fail("s").unwrap().len(), 2);
    assert_eq!(doc.section_or_fail("s").unwrap().raw("a"), Some("2"));
}

#[test]
fn test_ini_macro_matches_parsed_text() {
    let built = ini! {
        "A" => { "c" => 4.5 },
        "" => { "a" => 42, "b" => "asdf" },
    };
    let parsed = sini::from_str("a = 42\nb = asdf\n[A]\nc = 4.5\n").unwrap();
    assert_eq!(built, parsed);
}
