use bijak::gst::*;

fn main() {
    println!("=== GSTIN Validation ===\n");

    let candidates = [
        "27AAPFU0939F1ZV",
        "08AABCT1332L1ZE",
        "27AAPFU0939F1ZW", // bad check character
        "00AAPFU0939F1ZV", // unknown state
        "27aapfu0939f1zv", // lowercase
    ];

    for gstin in &candidates {
        match validate_gstin(gstin) {
            Ok(parts) => println!(
                "  {gstin} => valid (state={}, pan={}, entity={})",
                parts.state_code, parts.pan, parts.entity_code
            ),
            Err(e) => println!("  {gstin} => INVALID: {e}"),
        }
    }

    println!("\n=== Registration State ===\n");

    for gstin in &candidates[..2] {
        println!("  {gstin} => {}", state_of(gstin).unwrap_or("unknown"));
    }

    println!("\n=== Check Character ===\n");

    let first14 = "24AAACC1206D1Z";
    if let Some(c) = check_char(first14) {
        println!("  {first14} => {first14}{c}");
    }
}
