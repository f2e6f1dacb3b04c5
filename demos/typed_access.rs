//! Existence-aware handles and typed conversions.
//!
//! Run with: cargo run --example typed_access

use sini::{to_string_with_options, Document, IniOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    let section = doc.section("limits");

    let mut retries = section.property("retries");
    match retries.get::<u32>() {
        Ok(n) => println!("retries already set to {}", n),
        Err(e) if e.is_missing() => {
            println!("retries not set, writing default");
            retries.set(3u32);
        }
        Err(e) => return Err(e.into()),
    }
    println!("retries = {}", retries.get::<u32>()?);

    section.set("timeout", "soon");
    if let Err(e) = section.get::<f64>("timeout") {
        println!("timeout has the wrong type: {}", e);
    }

    section.set("mask", "0755").set("label", "two  spaces");
    println!("mask = {}", section.get::<u32>("mask")?);

    println!("\nSafe output:\n{}", to_string_with_options(&doc, IniOptions::safe()));
    Ok(())
}
