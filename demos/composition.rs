use bijak::gst::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Composition Levy (Section 10) ===\n");

    let scenarios = [
        (
            "Trader below limit",
            CompositionScheme::Goods,
            dec!(9_000_000),
            dec!(5_000_000),
        ),
        (
            "Trader at the limit",
            CompositionScheme::Goods,
            dec!(15_000_000),
            dec!(15_000_000),
        ),
        (
            "Trader over mid-year",
            CompositionScheme::Goods,
            dec!(9_000_000),
            dec!(15_100_000),
        ),
        (
            "Sikkim trader",
            CompositionScheme::GoodsSpecialCategory,
            dec!(8_000_000),
            dec!(2_000_000),
        ),
        (
            "Service provider",
            CompositionScheme::Services,
            dec!(4_000_000),
            dec!(1_000_000),
        ),
    ];

    for (label, scheme, prev, curr) in scenarios {
        let status = check_composition(scheme, prev, curr);
        println!("  {label}:");
        println!(
            "    limit={}, eligible={}, reason={}",
            scheme.turnover_limit(),
            status.eligible,
            status.reason.as_deref().unwrap_or("—")
        );
    }

    println!("\n=== Special Category States ===\n");

    for code in ["05", "11", "27"] {
        println!(
            "  {code}: special category = {}",
            is_special_category_state(code)
        );
    }
}
