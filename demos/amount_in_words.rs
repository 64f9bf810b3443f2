use bijak::words::amount_in_words;
use rust_decimal_macros::dec;

fn main() {
    let amounts = [
        dec!(0),
        dec!(42),
        dec!(105),
        dec!(1500.50),
        dec!(123456.78),
        dec!(10000000),
        dec!(23456789.05),
    ];

    for amount in amounts {
        println!("{:>13} => {}", amount.to_string(), amount_in_words(amount));
    }
}
