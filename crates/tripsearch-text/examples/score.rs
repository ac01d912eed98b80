use std::env;

// Show which matching tier decides a query against one or more targets.
// Usage:
//   cargo run -p tripsearch-text --example score -- "<query>" "<target>" ["<target>" ...]

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run -p tripsearch-text --example score -- <query> <target> [target ...]");
        std::process::exit(1);
    }
    let query = &args[0];
    println!("Query: {:?} (normalized {:?})\n", query, tripsearch_text::normalize(query));
    for target in &args[1..] {
        let (tier, score) = tripsearch_text::classify(query, target);
        println!("  {:<30} tier={:<13} score={:.3}", target, format!("{:?}", tier), score);
    }
}
