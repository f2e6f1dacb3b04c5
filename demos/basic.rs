//! Parse, inspect and re-serialize an INI document.
//!
//! Run with: cargo run --example basic

use sini::{from_str, to_string};
use std::error::Error;

const INPUT: &str = "\
; application settings
name    =   sini demo
version = 3

[server]
host = example.com   ; where to listen
port = 0x1F90
motd = '  welcome aboard  '

[features]
fast   = yes
legacy = Off
";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(INPUT)?;

    let server = doc.section_or_fail("server")?;
    let port: u16 = server.get("port")?;
    println!("server: {}:{}", server.get::<String>("host")?, port);

    let features = doc.section_or_fail("features")?;
    for (key, _) in features.iter() {
        println!("feature {} enabled: {}", key, features.get::<bool>(key)?);
    }

    println!("\nNormalized output:\n{}", to_string(&doc));

    match from_str("[broken\nkey = value\n") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("Error example:\n{}", e),
    }

    Ok(())
}
