use mo_reader::{MoCatalog, RevisionPolicy};
use std::env;

fn main() {
    let mut args: Vec<String> = env::args().collect();

    // Parse --strict-revision flag
    let mut policy = RevisionPolicy::Compatible;
    if let Some(flag_idx) = args.iter().position(|arg| arg == "--strict-revision") {
        policy = RevisionPolicy::Strict;
        args.remove(flag_idx);
    }

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <catalog.mo> [KEY [EXPECTED]] [--strict-revision]",
            args[0]
        );
        std::process::exit(1);
    }

    let catalog_path = &args[1];
    let key = args.get(2);
    let expected = args.get(3);

    println!("Reading message catalog: {}", catalog_path);
    if policy == RevisionPolicy::Strict {
        println!("Using strict revision checking.");
    }
    println!("{}", "=".repeat(60));

    let catalog = match MoCatalog::open_with(catalog_path, policy) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("\nERROR: Failed to read message catalog");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\n{}", "=".repeat(60));
    println!("SUCCESS! Catalog loaded.");
    println!("{}", "=".repeat(60));

    println!("\nCatalog Information:");
    println!(
        "  Revision: {}.{}",
        catalog.header().revision_major(),
        catalog.header().revision_minor()
    );
    println!("  Byte order: {:?}", catalog.header().byte_order);
    println!("  Entries: {}", catalog.entry_count());
    if let Some(charset) = catalog.metadata().charset() {
        println!("  Charset: {}", charset);
    }
    if let Some(plural) = catalog.metadata().plural_info() {
        println!("  Plural forms: {} ({})", plural.nplurals, plural.expression);
    }

    println!("\nSample Entries (first 10):");
    for (i, entry) in catalog.entries().take(10).enumerate() {
        println!(
            "  {}. {:?} -> {:?}",
            i + 1,
            entry.key,
            entry.primary().unwrap_or("")
        );
    }
    if catalog.entry_count() > 10 {
        println!("  ... and {} more", catalog.entry_count() - 10);
    }

    let mut failures = 0;

    if let Some(key) = key {
        match catalog.translation_for(key) {
            Some(translation) => {
                println!("\nLookup {:?}: {:?}", key, translation);
                if let Some(expected) = expected {
                    if translation == expected.as_str() {
                        println!("  Matches the expected translation.");
                    } else {
                        eprintln!("  MISMATCH: expected {:?}", expected);
                        failures += 1;
                    }
                }
            }
            None => {
                eprintln!("\nLookup {:?}: NOT FOUND", key);
                failures += 1;
            }
        }
    }

    // A key that cannot exist in real source text must come back absent.
    let absent = "__nonexistent_key_42__";
    if catalog.translation_for(absent).is_some() {
        eprintln!("\nSelf-check failed: {:?} resolved to a translation", absent);
        failures += 1;
    }

    println!("\n{}", "=".repeat(60));
    if failures == 0 {
        println!("ALL CHECKS PASSED");
    } else {
        eprintln!("{} check(s) failed", failures);
        std::process::exit(1);
    }
}
